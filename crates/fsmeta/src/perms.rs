use crate::error::MetaError;
use std::fs;
use std::os::unix::fs::MetadataExt;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

/// Read/write capability of one uid/gid pair against one inode.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Access {
    read: bool,
    write: bool,
}

impl Access {
    /// Full read/write access.
    #[must_use]
    pub const fn read_write() -> Self {
        Self {
            read: true,
            write: true,
        }
    }

    /// No access at all.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            read: false,
            write: false,
        }
    }

    /// Whether reading is permitted.
    #[must_use]
    pub const fn can_read(self) -> bool {
        self.read
    }

    /// Whether writing is permitted.
    #[must_use]
    pub const fn can_write(self) -> bool {
        self.write
    }
}

/// Renders the classic ten-character mode listing for `path`.
///
/// The first character is `d` for directories, `l` when the path itself
/// is a symbolic link, and `-` otherwise; the remaining nine characters
/// are the user/group/other permission triplets of the stat target.
pub fn permissions_string<P: AsRef<Path>>(path: P) -> Result<String, MetaError> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|source| MetaError::Stat {
        path: path.to_path_buf(),
        source,
    })?;
    let is_link = fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);

    let mode = metadata.permissions().mode();
    let mut listing = String::with_capacity(10);
    listing.push(if is_link {
        'l'
    } else if metadata.is_dir() {
        'd'
    } else {
        '-'
    });
    for (bit, ch) in [
        (0o400, 'r'),
        (0o200, 'w'),
        (0o100, 'x'),
        (0o040, 'r'),
        (0o020, 'w'),
        (0o010, 'x'),
        (0o004, 'r'),
        (0o002, 'w'),
        (0o001, 'x'),
    ] {
        listing.push(if mode & bit != 0 { ch } else { '-' });
    }
    Ok(listing)
}

/// Determines what `uid`/`gid` may do with `path`.
///
/// Root (uid or gid zero) and owners get read/write; everyone else is
/// judged by the *other* permission bits alone, matching the coarse
/// model of the original library rather than a full POSIX access check.
pub fn access_for<P: AsRef<Path>>(path: P, uid: u32, gid: u32) -> Result<Access, MetaError> {
    if uid == 0 || gid == 0 {
        return Ok(Access::read_write());
    }

    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|source| MetaError::Stat {
        path: path.to_path_buf(),
        source,
    })?;

    if metadata.uid() == uid || metadata.gid() == gid {
        return Ok(Access::read_write());
    }

    let mode = metadata.mode();
    Ok(Access {
        read: mode & 0o004 != 0,
        write: mode & 0o002 != 0,
    })
}

/// Determines what `uid`/`gid` may do with the parent directory of
/// `path`.
///
/// A path with no parent component cannot be checked and reports a stat
/// failure.
pub fn parent_access_for<P: AsRef<Path>>(path: P, uid: u32, gid: u32) -> Result<Access, MetaError> {
    let parent = path.as_ref().parent().unwrap_or_else(|| Path::new(""));
    access_for(parent, uid, gid)
}

use std::fs;
use std::path::Path;
use std::time::SystemTime;

#[cfg(unix)]
use crate::error::MetaError;

/// Reports whether `path` names a directory.
///
/// Any failure to stat the path answers `false`.
#[must_use]
pub fn is_directory<P: AsRef<Path>>(path: P) -> bool {
    fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

/// Reports whether `path` names a regular file.
///
/// Any failure to stat the path answers `false`.
#[must_use]
pub fn is_file<P: AsRef<Path>>(path: P) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

/// Returns the size in bytes of the regular file at `path`.
///
/// Paths that are missing, unreadable, or not regular files report zero.
#[must_use]
pub fn file_size<P: AsRef<Path>>(path: P) -> u64 {
    fs::metadata(path)
        .map(|m| if m.is_file() { m.len() } else { 0 })
        .unwrap_or(0)
}

/// Returns the last-modification time of `path`.
///
/// Paths that cannot be queried report the Unix epoch.
#[must_use]
pub fn last_modified<P: AsRef<Path>>(path: P) -> SystemTime {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH)
}

/// Returns the unprivileged free space, in bytes, of the filesystem
/// holding `path`.
#[cfg(unix)]
pub fn available_space<P: AsRef<Path>>(path: P) -> Result<u64, MetaError> {
    let path = path.as_ref();
    let stats = rustix::fs::statvfs(path).map_err(|errno| MetaError::Filesystem {
        path: path.to_path_buf(),
        source: errno.into(),
    })?;
    Ok(stats.f_bsize.saturating_mul(stats.f_bavail))
}

//! User and group database access.
//!
//! Lookups go through the thread-safe `getpwnam_r` family with a growing
//! scratch buffer, so entries served by NSS backends with long member
//! lists still resolve. Ownership changes route through `rustix`.

#![allow(unsafe_code)]

use crate::error::MetaError;
use std::ffi::{CStr, CString};
use std::fs;
use std::io;
use std::mem::MaybeUninit;
use std::os::unix::fs::MetadataExt;
use std::path::Path;
use std::ptr;

const INITIAL_BUFFER: usize = 4096;

fn uid_from_raw(raw: u32) -> rustix::fs::Uid {
    rustix::fs::Uid::from_raw(raw)
}

fn gid_from_raw(raw: u32) -> rustix::fs::Gid {
    rustix::fs::Gid::from_raw(raw)
}

/// Resolves a user name to its numeric uid.
pub fn uid_for_name(name: &str) -> Result<u32, MetaError> {
    let Ok(c_name) = CString::new(name) else {
        return Err(MetaError::UnknownUser { name: name.into() });
    };

    let mut buffer = vec![0_u8; INITIAL_BUFFER];
    loop {
        let mut pwd = MaybeUninit::<libc::passwd>::zeroed();
        let mut result: *mut libc::passwd = ptr::null_mut();
        // SAFETY: all pointers are valid for the duration of the call;
        // the buffer backs the strings referenced from `pwd`.
        let rc = unsafe {
            libc::getpwnam_r(
                c_name.as_ptr(),
                pwd.as_mut_ptr(),
                buffer.as_mut_ptr().cast::<libc::c_char>(),
                buffer.len(),
                &mut result,
            )
        };
        if rc == libc::ERANGE {
            buffer.resize(buffer.len() * 2, 0);
            continue;
        }
        if rc != 0 {
            return Err(MetaError::Lookup {
                source: io::Error::from_raw_os_error(rc),
            });
        }
        if result.is_null() {
            return Err(MetaError::UnknownUser { name: name.into() });
        }
        // SAFETY: a non-null result points at the initialized `pwd`.
        return Ok(unsafe { (*result).pw_uid });
    }
}

/// Resolves a group name to its numeric gid.
pub fn gid_for_name(name: &str) -> Result<u32, MetaError> {
    let Ok(c_name) = CString::new(name) else {
        return Err(MetaError::UnknownGroup { name: name.into() });
    };

    let mut buffer = vec![0_u8; INITIAL_BUFFER];
    loop {
        let mut grp = MaybeUninit::<libc::group>::zeroed();
        let mut result: *mut libc::group = ptr::null_mut();
        // SAFETY: all pointers are valid for the duration of the call;
        // the buffer backs the strings referenced from `grp`.
        let rc = unsafe {
            libc::getgrnam_r(
                c_name.as_ptr(),
                grp.as_mut_ptr(),
                buffer.as_mut_ptr().cast::<libc::c_char>(),
                buffer.len(),
                &mut result,
            )
        };
        if rc == libc::ERANGE {
            buffer.resize(buffer.len() * 2, 0);
            continue;
        }
        if rc != 0 {
            return Err(MetaError::Lookup {
                source: io::Error::from_raw_os_error(rc),
            });
        }
        if result.is_null() {
            return Err(MetaError::UnknownGroup { name: name.into() });
        }
        // SAFETY: a non-null result points at the initialized `grp`.
        return Ok(unsafe { (*result).gr_gid });
    }
}

/// Resolves a numeric uid to its user name.
pub fn user_name_for_uid(uid: u32) -> Result<String, MetaError> {
    let mut buffer = vec![0_u8; INITIAL_BUFFER];
    loop {
        let mut pwd = MaybeUninit::<libc::passwd>::zeroed();
        let mut result: *mut libc::passwd = ptr::null_mut();
        // SAFETY: all pointers are valid for the duration of the call;
        // the buffer backs the strings referenced from `pwd`.
        let rc = unsafe {
            libc::getpwuid_r(
                uid,
                pwd.as_mut_ptr(),
                buffer.as_mut_ptr().cast::<libc::c_char>(),
                buffer.len(),
                &mut result,
            )
        };
        if rc == libc::ERANGE {
            buffer.resize(buffer.len() * 2, 0);
            continue;
        }
        if rc != 0 {
            return Err(MetaError::Lookup {
                source: io::Error::from_raw_os_error(rc),
            });
        }
        if result.is_null() {
            return Err(MetaError::UnknownUid { uid });
        }
        // SAFETY: a non-null result points at the initialized `pwd` and
        // `pw_name` is a NUL-terminated string inside `buffer`.
        let name = unsafe { CStr::from_ptr((*result).pw_name) };
        return Ok(name.to_string_lossy().into_owned());
    }
}

/// Resolves a numeric gid to its group name.
pub fn group_name_for_gid(gid: u32) -> Result<String, MetaError> {
    let mut buffer = vec![0_u8; INITIAL_BUFFER];
    loop {
        let mut grp = MaybeUninit::<libc::group>::zeroed();
        let mut result: *mut libc::group = ptr::null_mut();
        // SAFETY: all pointers are valid for the duration of the call;
        // the buffer backs the strings referenced from `grp`.
        let rc = unsafe {
            libc::getgrgid_r(
                gid,
                grp.as_mut_ptr(),
                buffer.as_mut_ptr().cast::<libc::c_char>(),
                buffer.len(),
                &mut result,
            )
        };
        if rc == libc::ERANGE {
            buffer.resize(buffer.len() * 2, 0);
            continue;
        }
        if rc != 0 {
            return Err(MetaError::Lookup {
                source: io::Error::from_raw_os_error(rc),
            });
        }
        if result.is_null() {
            return Err(MetaError::UnknownGid { gid });
        }
        // SAFETY: a non-null result points at the initialized `grp` and
        // `gr_name` is a NUL-terminated string inside `buffer`.
        let name = unsafe { CStr::from_ptr((*result).gr_name) };
        return Ok(name.to_string_lossy().into_owned());
    }
}

/// Returns the user name owning `path`.
pub fn owner_user<P: AsRef<Path>>(path: P) -> Result<String, MetaError> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|source| MetaError::Stat {
        path: path.to_path_buf(),
        source,
    })?;
    user_name_for_uid(metadata.uid())
}

/// Returns the group name owning `path`.
pub fn owner_group<P: AsRef<Path>>(path: P) -> Result<String, MetaError> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|source| MetaError::Stat {
        path: path.to_path_buf(),
        source,
    })?;
    group_name_for_gid(metadata.gid())
}

/// Changes ownership of `path` to the numeric `uid`/`gid`.
pub fn chown_path<P: AsRef<Path>>(path: P, uid: u32, gid: u32) -> Result<(), MetaError> {
    let path = path.as_ref();
    rustix::fs::chown(path, Some(uid_from_raw(uid)), Some(gid_from_raw(gid))).map_err(|errno| {
        MetaError::Chown {
            path: path.to_path_buf(),
            source: errno.into(),
        }
    })
}

/// Changes ownership of `path` to the named user and group.
///
/// Both names must resolve before any change is attempted.
pub fn chown_by_names<P: AsRef<Path>>(path: P, user: &str, group: &str) -> Result<(), MetaError> {
    let uid = uid_for_name(user)?;
    let gid = gid_for_name(group)?;
    chown_path(path, uid, gid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_names_are_reported_as_such() {
        let error = uid_for_name("no-such-user-fsmeta").expect_err("must fail");
        assert!(matches!(error, MetaError::UnknownUser { .. }));

        let error = gid_for_name("no-such-group-fsmeta").expect_err("must fail");
        assert!(matches!(error, MetaError::UnknownGroup { .. }));
    }

    #[test]
    fn embedded_nul_cannot_match_any_entry() {
        assert!(uid_for_name("bad\0name").is_err());
        assert!(gid_for_name("bad\0name").is_err());
    }

    #[test]
    fn name_and_id_lookups_agree_for_current_user() {
        let uid = rustix::process::getuid().as_raw();
        // Containers occasionally run under uids with no passwd entry;
        // only assert when the database knows the current user.
        if let Ok(name) = user_name_for_uid(uid) {
            assert_eq!(uid_for_name(&name).expect("forward lookup"), uid);
        }
    }

    #[test]
    fn owner_of_created_file_is_current_user() {
        let temp = tempfile::tempdir().expect("tempdir");
        let file = temp.path().join("mine.txt");
        fs::write(&file, b"x").expect("write");

        let uid = rustix::process::getuid().as_raw();
        if let Ok(expected) = user_name_for_uid(uid) {
            assert_eq!(owner_user(&file).expect("owner"), expected);
        }
    }

    #[test]
    fn owner_lookup_on_missing_path_is_stat_error() {
        let error = owner_user("/nonexistent/path/for/ids").expect_err("must fail");
        assert!(matches!(error, MetaError::Stat { .. }));
        let error = owner_group("/nonexistent/path/for/ids").expect_err("must fail");
        assert!(matches!(error, MetaError::Stat { .. }));
    }

    #[test]
    fn chown_to_current_ids_is_a_no_op_change() {
        let temp = tempfile::tempdir().expect("tempdir");
        let file = temp.path().join("keep.txt");
        fs::write(&file, b"x").expect("write");
        let metadata = fs::metadata(&file).expect("stat");

        chown_path(&file, metadata.uid(), metadata.gid()).expect("chown to self");
    }

    #[test]
    fn chown_by_unknown_names_never_touches_the_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let file = temp.path().join("untouched.txt");
        fs::write(&file, b"x").expect("write");

        assert!(chown_by_names(&file, "no-such-user-fsmeta", "no-such-group-fsmeta").is_err());
    }
}

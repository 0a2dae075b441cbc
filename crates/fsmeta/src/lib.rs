#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `fsmeta` collects the small metadata queries the rest of the
//! workspace leans on: inode type predicates, sizes and timestamps,
//! mode-string rendering, ownership resolution against the user/group
//! database, ownership changes, advisory locking, and open-descriptor
//! auditing. Each helper is a thin, single-call wrapper; none of them
//! cache or hold state.
//!
//! # Design
//!
//! - Predicates ([`is_directory`], [`is_file`]) and the size/timestamp
//!   queries never fail: a path that cannot be queried answers `false`,
//!   zero, or the epoch, so callers can probe freely.
//! - Everything that resolves database entries or mutates the
//!   filesystem returns `Result<_, MetaError>` with the offending path
//!   or name in the error.
//! - User and group lookups use the re-entrant `getpwnam_r` family with
//!   a growing scratch buffer; syscall access goes through `rustix`.
//!
//! # Examples
//!
//! ```
//! use fsmeta::{file_size, is_directory, is_file};
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let file = temp.path().join("data.bin");
//! std::fs::write(&file, vec![0_u8; 64])?;
//!
//! assert!(is_directory(temp.path()));
//! assert!(is_file(&file));
//! assert_eq!(file_size(&file), 64);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod error;
mod stat;

#[cfg(unix)]
mod fd;
#[cfg(unix)]
mod ids;
#[cfg(unix)]
mod lock;
#[cfg(unix)]
mod perms;

pub use crate::error::MetaError;
pub use crate::stat::{file_size, is_directory, is_file, last_modified};

#[cfg(unix)]
pub use crate::fd::{count_open_descriptors, fd_is_valid};
#[cfg(unix)]
pub use crate::ids::{
    chown_by_names, chown_path, gid_for_name, group_name_for_gid, owner_group, owner_user,
    uid_for_name, user_name_for_uid,
};
#[cfg(unix)]
pub use crate::lock::lock_exclusive;
#[cfg(unix)]
pub use crate::perms::{Access, access_for, parent_access_for, permissions_string};
#[cfg(unix)]
pub use crate::stat::available_space;

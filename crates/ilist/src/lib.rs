#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `ilist` enumerates a filesystem subtree into an ordered, flat list of
//! inode paths. Given a root path the walker produces every direct child
//! of the root and, when recursion is enabled, the children of each child
//! directory in depth-first pre-order. Sibling names are sorted byte-wise
//! before they are appended, so the output is deterministic regardless of
//! the underlying filesystem's iteration order.
//!
//! # Design
//!
//! - [`WalkBuilder`] configures an enumeration: the root path and whether
//!   child directories are descended into. [`walk`] is the one-call form.
//! - [`InodeList`] is the accumulated result: an append-only sequence of
//!   owned paths plus a [`WalkStatus`] tag that distinguishes a missing
//!   root from a legitimately empty enumeration.
//! - [`direct_child_count`] counts a single directory's entries without
//!   materializing a list.
//!
//! # Invariants
//!
//! - A directory's path always precedes the paths of its descendants.
//! - Each visited directory's direct children appear sorted byte-wise by
//!   full path among themselves; the overall list is the concatenation of
//!   these per-directory scopes in discovery order, not a global sort.
//! - The `.` and `..` pseudo-entries are never emitted; other dot-prefixed
//!   names (hidden files) always are.
//! - Enumeration never panics and never fails: unreadable directories
//!   contribute zero entries and a missing root yields an empty list
//!   tagged [`WalkStatus::RootNotFound`].
//!
//! # Examples
//!
//! Enumerate a directory tree and collect the discovered paths:
//!
//! ```
//! use ilist::WalkBuilder;
//! use std::fs;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let root = temp.path().join("src");
//! fs::create_dir_all(root.join("nested"))?;
//! fs::write(root.join("file.txt"), b"data")?;
//!
//! let list = WalkBuilder::new(&root).recursive(true).run();
//! assert!(list.root_found());
//! assert!(list.iter().any(|p| p.ends_with("file.txt")));
//! assert!(list.iter().any(|p| p.ends_with("nested")));
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod builder;
mod count;
mod list;
mod walker;

#[cfg(test)]
mod tests;

pub use crate::builder::{WalkBuilder, walk};
pub use crate::count::direct_child_count;
pub use crate::list::{InodeList, WalkStatus};

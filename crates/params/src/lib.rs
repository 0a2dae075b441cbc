#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `params` turns plain-text parameter files into sorted name/value
//! tables with fast lookup. The on-disk format is one record per line,
//! `name=value`; lines whose first significant character is `#` are
//! comments and blank lines are ignored:
//!
//! ```text
//! # server settings
//! port = 2121
//! root = /srv/files
//! banner = welcome
//! ```
//!
//! # Design
//!
//! - A per-line state machine scans characters one at a time, tracking
//!   the first significant character, the `=` separator, and the start
//!   of the value. Blanks are insignificant outside comments; there is
//!   no escaping mechanism.
//! - [`ParameterTable`] accumulates the emitted [`Parameter`] records
//!   and is sorted by name (ascending byte-wise) after loading, which is
//!   the precondition for [`ParameterTable::binary_search`].
//! - Malformed lines (no separator, no value, bare `=`) are silently
//!   discarded; names and values are truncated at [`FIELD_CAP`] and
//!   lines at [`LINE_CAP`].
//!
//! # Errors
//!
//! Only an unreadable file is reported, via [`ParamsError::Read`]; no
//! partial record set is ever produced. Absent names are `None` from the
//! lookup methods, not errors.
//!
//! # Examples
//!
//! ```
//! use params::ParameterTable;
//!
//! let table = ParameterTable::from_str_input("port = 2121\n# note\nuser=ftp\n");
//! assert_eq!(table.value_of("port"), Some("2121"));
//! assert_eq!(table.value_of("note"), None);
//! ```

mod error;
mod record;
mod scanner;
mod table;

pub use crate::error::ParamsError;
pub use crate::record::{FIELD_CAP, LINE_CAP, Parameter};
pub use crate::table::ParameterTable;

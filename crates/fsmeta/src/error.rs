use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by the metadata helpers.
///
/// Every variant carries enough context to name the inode or database
/// entry involved; the underlying `io::Error` is preserved as the source
/// where one exists.
#[derive(Debug, Error)]
pub enum MetaError {
    /// Metadata for a path could not be queried.
    #[error("failed to stat '{path}': {source}")]
    Stat {
        /// Path whose metadata could not be retrieved.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
    /// Filesystem-level statistics could not be queried.
    #[error("failed to query filesystem statistics for '{path}': {source}")]
    Filesystem {
        /// Path used to select the filesystem.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
    /// The user/group database itself failed to answer.
    #[error("user database lookup failed: {source}")]
    Lookup {
        /// Underlying error emitted by the lookup routine.
        #[source]
        source: io::Error,
    },
    /// No database entry exists for the named user.
    #[error("no database entry for user '{name}'")]
    UnknownUser {
        /// The name that was looked up.
        name: String,
    },
    /// No database entry exists for the named group.
    #[error("no database entry for group '{name}'")]
    UnknownGroup {
        /// The name that was looked up.
        name: String,
    },
    /// No database entry exists for the numeric user id.
    #[error("no database entry for user id {uid}")]
    UnknownUid {
        /// The id that was looked up.
        uid: u32,
    },
    /// No database entry exists for the numeric group id.
    #[error("no database entry for group id {gid}")]
    UnknownGid {
        /// The id that was looked up.
        gid: u32,
    },
    /// Ownership of a path could not be changed.
    #[error("failed to change ownership of '{path}': {source}")]
    Chown {
        /// Path whose ownership was being changed.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
    /// An advisory lock could not be taken.
    #[error("failed to lock file: {source}")]
    Lock {
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
}

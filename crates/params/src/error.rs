use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors reported while loading a parameter file.
///
/// Parsing itself never fails: malformed lines are discarded and
/// oversized fields are truncated. The only reportable failure is not
/// being able to read the file at all, in which case no records are
/// produced.
#[derive(Debug, Error)]
pub enum ParamsError {
    /// The parameter file could not be opened or read.
    #[error("failed to read parameter file '{path}': {source}")]
    Read {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
}

impl ParamsError {
    /// Returns the path of the file the failure refers to.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } => path,
        }
    }
}

use std::fs;
use std::path::Path;
use tracing::trace;

/// Counts a directory's direct children without building a list.
///
/// Counts every entry except the `.` and `..` pseudo-entries, hidden
/// names included. A path that is not a directory, or a directory that
/// cannot be read, counts zero.
#[must_use]
pub fn direct_child_count<P: AsRef<Path>>(path: P) -> usize {
    let path = path.as_ref();
    match fs::read_dir(path) {
        Ok(read_dir) => read_dir.filter(Result::is_ok).count(),
        Err(error) => {
            trace!("counting {:?} as empty: {}", path, error);
            0
        }
    }
}

use crate::error::MetaError;
use rustix::fs::FlockOperation;
use std::fs::File;

/// Takes a non-blocking exclusive advisory lock over the whole file.
///
/// The lock is released when the descriptor closes; there is no
/// explicit unlock in this API. A file already locked elsewhere fails
/// immediately instead of blocking.
pub fn lock_exclusive(file: &File) -> Result<(), MetaError> {
    rustix::fs::fcntl_lock(file, FlockOperation::NonBlockingLockExclusive)
        .map_err(|errno| MetaError::Lock {
            source: errno.into(),
        })
}

//! Store lock
//!
//! One advisory exclusive lock per store root serializes mutating
//! operations. Contention is an immediate error rather than a wait: a
//! deploy blocked behind another deploy should be retried deliberately,
//! not queued invisibly.

use std::fs::File;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::error::{PlinthError, PlinthResult};

/// Name of the lock file inside the store root
pub const LOCK_FILE: &str = "lock";

/// Held exclusive lock on a store; released on drop
#[derive(Debug)]
pub struct StoreLock {
    file: File,
    root: PathBuf,
}

impl StoreLock {
    pub fn acquire(root: &Path) -> PlinthResult<Self> {
        let path = root.join(LOCK_FILE);
        let file = File::create(&path).map_err(|e| PlinthError::io("creating lock file", &path, e))?;

        match file.try_lock_exclusive() {
            Ok(()) => Ok(Self {
                file,
                root: root.to_path_buf(),
            }),
            Err(e) if e.kind() == fs2::lock_contended_error().kind() => Err(PlinthError::Busy {
                path: root.to_path_buf(),
            }),
            Err(e) => Err(PlinthError::io("locking", &path, e)),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

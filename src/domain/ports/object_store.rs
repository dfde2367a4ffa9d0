//! Object Store port - the content-addressed tree store
//!
//! The store that holds the actual filesystem trees is an external
//! collaborator. The deployment core only needs two operations from it:
//! resolving a revision to a commit identifier, and materializing a commit's
//! tree at a destination path. Checkout may be long-running and internally
//! concurrent; from this side it is a single blocking call.

use std::path::Path;

use thiserror::Error;

use crate::domain::value_objects::CommitId;

/// Object store operation errors
#[derive(Debug, Error)]
pub enum ObjectStoreError {
    /// The revision does not name anything in the store
    #[error("unknown revision '{0}'")]
    UnknownRevision(String),

    /// The store is present but its contents are not usable
    #[error("object store corrupt: {0}")]
    Corrupt(String),

    /// Underlying I/O failure
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Abstract content-addressed tree store
pub trait ObjectStore {
    /// Resolve a revision (ref name or commit id) to a concrete commit
    fn resolve(&self, revision: &str) -> Result<CommitId, ObjectStoreError>;

    /// Materialize the tree of `commit` at `dest`.
    ///
    /// `dest` must not exist; on error the store makes no promise about what
    /// was partially written - callers stage into a disposable path.
    fn checkout(&self, commit: &CommitId, dest: &Path) -> Result<(), ObjectStoreError>;
}

//! Error types for Plinth
//!
//! Uses `thiserror` for library errors. Every error carries enough context
//! to identify the failing path and phase; the only errors swallowed
//! anywhere in the crate are NOENT-class results of idempotent cleanup
//! operations (see `fs_tree`).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Plinth operations
pub type PlinthResult<T> = Result<T, PlinthError>;

/// Main error type for Plinth operations
#[derive(Error, Debug)]
pub enum PlinthError {
    /// Revision could not be resolved to a commit (unknown ref, corrupt store)
    #[error("cannot resolve revision '{revision}': {message}")]
    Resolve { revision: String, message: String },

    /// I/O failure, annotated with the phase that performed the operation
    #[error("{phase} {}: {source}", path.display())]
    Io {
        phase: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// External checkout step failed
    #[error("checking out commit {commit} into {}: {message}", path.display())]
    Checkout {
        commit: String,
        path: PathBuf,
        message: String,
    },

    /// Trigger execution in a staged root failed
    #[error("running triggers in {}: {message}", root.display())]
    Triggers { root: PathBuf, message: String },

    /// Post-activation kernel integration failed
    #[error("updating kernel configuration for {}: {message}", deployment.display())]
    Kernel { deployment: PathBuf, message: String },

    /// Store configuration file is present but malformed
    #[error("invalid store config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// Store root is missing the expected layout
    #[error("store at {} is not initialized (run 'plinth init')", path.display())]
    Uninitialized { path: PathBuf },

    /// Another invocation holds the store lock
    #[error("store at {} is locked by another deploy operation", path.display())]
    Busy { path: PathBuf },

    /// Target name cannot form a valid deployment directory name
    #[error("invalid target name '{name}': {reason}")]
    InvalidTarget { name: String, reason: String },

    /// A path expected inside the store root was not under it
    #[error("path {} is outside the store root {}", path.display(), root.display())]
    OutsideStore { path: PathBuf, root: PathBuf },
}

impl PlinthError {
    /// Annotate an I/O error with the phase and path that produced it
    pub fn io(phase: impl Into<String>, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PlinthError::Io {
            phase: phase.into(),
            path: path.into(),
            source,
        }
    }
}

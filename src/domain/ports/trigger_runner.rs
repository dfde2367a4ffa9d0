//! Trigger Runner port
//!
//! After checkout, trigger scripts get a chance to regenerate caches and
//! similar derived state inside the staged root, before the deployment is
//! committed. Execution is opaque to the core: it either succeeds or aborts
//! the whole stage operation.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Trigger execution errors
#[derive(Debug, Error)]
pub enum TriggerError {
    /// A trigger script exited unsuccessfully
    #[error("trigger {} failed: {status}", path.display())]
    Script { path: PathBuf, status: String },

    /// Underlying I/O failure
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Runs post-checkout triggers in a staged root
pub trait TriggerRunner {
    fn run(&self, root: &Path) -> Result<(), TriggerError>;
}

/// Trigger runner that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTriggerRunner;

impl TriggerRunner for NoopTriggerRunner {
    fn run(&self, _root: &Path) -> Result<(), TriggerError> {
        Ok(())
    }
}

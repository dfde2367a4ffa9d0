//! Kernel Integration port
//!
//! Optional, separable step invoked after a deployment becomes active:
//! regenerating the initramfs, adding a bootloader entry, whatever the
//! platform needs. The core only knows it can be asked to run for a
//! deployment path and may fail.

use std::path::Path;

use thiserror::Error;

/// Kernel integration errors
#[derive(Debug, Error)]
pub enum KernelError {
    /// The external integration command exited unsuccessfully
    #[error("command '{command}' failed: {status}")]
    Command { command: String, status: String },

    /// Underlying I/O failure
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Updates kernel-related configuration for a live deployment
pub trait KernelIntegration {
    fn update(&self, deployment: &Path) -> Result<(), KernelError>;
}

/// Kernel integration that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopKernelIntegration;

impl KernelIntegration for NoopKernelIntegration {
    fn update(&self, _deployment: &Path) -> Result<(), KernelError> {
        Ok(())
    }
}

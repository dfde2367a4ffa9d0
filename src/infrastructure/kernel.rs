//! Command-based kernel integration
//!
//! Runs the configured external command with the newly active deployment
//! path as its final argument. An unconfigured command makes the whole step
//! a no-op, which is the default for stores that manage no bootable state.

use std::path::Path;
use std::process::Command;

use crate::config::KernelConfig;
use crate::domain::ports::{KernelError, KernelIntegration};

/// Kernel integration driven by an external command from the store config
#[derive(Debug, Clone, Default)]
pub struct CommandKernelIntegration {
    command: Option<String>,
}

impl CommandKernelIntegration {
    pub fn new(command: Option<String>) -> Self {
        Self { command }
    }

    pub fn from_config(config: &KernelConfig) -> Self {
        Self::new(config.command.clone())
    }
}

impl KernelIntegration for CommandKernelIntegration {
    fn update(&self, deployment: &Path) -> Result<(), KernelError> {
        let Some(command) = &self.command else {
            return Ok(());
        };

        let mut parts = command.split_whitespace();
        let Some(program) = parts.next() else {
            return Ok(());
        };

        let status = Command::new(program).args(parts).arg(deployment).status()?;
        if !status.success() {
            return Err(KernelError::Command {
                command: command.clone(),
                status: status.to_string(),
            });
        }
        Ok(())
    }
}

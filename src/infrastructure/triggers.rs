//! Script trigger runner
//!
//! Runs the executable scripts found under a configurable directory inside
//! the staged root, in lexical order, with the staged root as working
//! directory and as the first argument. A missing trigger directory means
//! the tree ships no triggers; non-executable entries are ignored.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::TriggersConfig;
use crate::domain::ports::{TriggerError, TriggerRunner};

/// Trigger runner executing scripts from inside the staged tree
#[derive(Debug, Clone)]
pub struct ScriptTriggerRunner {
    dir: PathBuf,
}

impl ScriptTriggerRunner {
    /// `dir` is relative to the staged root
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn from_config(config: &TriggersConfig) -> Self {
        Self::new(config.dir.clone())
    }
}

impl TriggerRunner for ScriptTriggerRunner {
    fn run(&self, root: &Path) -> Result<(), TriggerError> {
        let trigger_dir = root.join(&self.dir);
        if !trigger_dir.is_dir() {
            return Ok(());
        }

        let mut scripts = Vec::new();
        for entry in fs::read_dir(&trigger_dir)? {
            let entry = entry?;
            let meta = entry.metadata()?;
            if meta.is_file() && meta.permissions().mode() & 0o111 != 0 {
                scripts.push(entry.path());
            }
        }
        scripts.sort();

        for script in scripts {
            let status = Command::new(&script).arg(root).current_dir(root).status()?;
            if !status.success() {
                return Err(TriggerError::Script {
                    path: script,
                    status: status.to_string(),
                });
            }
        }

        Ok(())
    }
}

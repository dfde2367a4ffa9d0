//! Store configuration
//!
//! An optional `config.toml` at the store root tunes the external
//! integration points. A missing file yields the defaults, and every key is
//! individually defaulted, so a config file only needs to name what it
//! changes. A malformed file is an error - silently ignoring a config the
//! administrator wrote would be worse than refusing to run.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PlinthError, PlinthResult};

/// Name of the config file inside the store root
pub const CONFIG_FILE: &str = "config.toml";

/// Store-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub kernel: KernelConfig,

    #[serde(default)]
    pub triggers: TriggersConfig,
}

/// Kernel integration settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KernelConfig {
    /// External command run after activation with the deployment path as its
    /// argument. Unset means kernel integration is a no-op.
    #[serde(default)]
    pub command: Option<String>,
}

/// Trigger execution settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggersConfig {
    /// Directory inside a staged root holding executable trigger scripts
    #[serde(default = "default_trigger_dir")]
    pub dir: PathBuf,
}

impl Default for TriggersConfig {
    fn default() -> Self {
        Self {
            dir: default_trigger_dir(),
        }
    }
}

fn default_trigger_dir() -> PathBuf {
    PathBuf::from("usr/lib/plinth/triggers")
}

impl StoreConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> PlinthResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PlinthError::io("reading config", path, e))?;
        toml::from_str(&content).map_err(|e| PlinthError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load the store config from `<root>/config.toml`, falling back to the
    /// defaults when the file does not exist
    pub fn load_for_store(root: &Path) -> PlinthResult<Self> {
        let path = root.join(CONFIG_FILE);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Serialize the config as TOML
    pub fn to_toml(&self) -> PlinthResult<String> {
        toml::to_string_pretty(self).map_err(|e| PlinthError::Config {
            path: PathBuf::from(CONFIG_FILE),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = StoreConfig::load_for_store(dir.path()).unwrap();
        assert_eq!(config, StoreConfig::default());
        assert!(config.kernel.command.is_none());
    }

    #[test]
    fn partial_config_keeps_defaults_for_missing_keys() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "[kernel]\ncommand = \"update-kernel\"\n",
        )
        .unwrap();

        let config = StoreConfig::load_for_store(dir.path()).unwrap();
        assert_eq!(config.kernel.command.as_deref(), Some("update-kernel"));
        assert_eq!(config.triggers.dir, PathBuf::from("usr/lib/plinth/triggers"));
    }

    #[test]
    fn custom_trigger_dir() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "[triggers]\ndir = \"etc/triggers.d\"\n",
        )
        .unwrap();

        let config = StoreConfig::load_for_store(dir.path()).unwrap();
        assert_eq!(config.triggers.dir, PathBuf::from("etc/triggers.d"));
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "this is = = not toml").unwrap();

        let err = StoreConfig::load_for_store(dir.path()).unwrap_err();
        assert!(matches!(err, PlinthError::Config { .. }));
    }

    #[test]
    fn roundtrips_through_toml() {
        let mut config = StoreConfig::default();
        config.kernel.command = Some("plinth-update-kernel".to_string());

        let toml = config.to_toml().unwrap();
        let parsed: StoreConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, config);
    }
}

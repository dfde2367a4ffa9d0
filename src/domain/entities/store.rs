//! Deployment Store Entity
//!
//! The root directory of the managed system state. Owns the naming of
//! everything under it: the `deploy/` directory holding deployment trees and
//! their etc overlays, and the `current`/`previous` pointer pair (plus the
//! transient `tmp-current`/`tmp-previous` links used mid-swap).
//!
//! Invariant: `current`, when present, resolves to a fully committed
//! deployment directory - never to a `.tmp` staging path.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{DeploymentId, OVERLAY_SUFFIX};
use crate::error::{PlinthError, PlinthResult};

/// Name of the directory holding deployments and overlays
pub const DEPLOY_DIR: &str = "deploy";

/// The deployment store rooted at one directory
#[derive(Debug, Clone)]
pub struct DeploymentStore {
    root: PathBuf,
}

impl DeploymentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/deploy`
    pub fn deploy_dir(&self) -> PathBuf {
        self.root.join(DEPLOY_DIR)
    }

    /// `<root>/current`
    pub fn current_link(&self) -> PathBuf {
        self.root.join("current")
    }

    /// `<root>/previous`
    pub fn previous_link(&self) -> PathBuf {
        self.root.join("previous")
    }

    /// `<root>/tmp-current` - transient, only observed mid-swap
    pub fn tmp_current_link(&self) -> PathBuf {
        self.root.join("tmp-current")
    }

    /// `<root>/tmp-previous` - transient, only observed mid-swap
    pub fn tmp_previous_link(&self) -> PathBuf {
        self.root.join("tmp-previous")
    }

    /// Path of the committed deployment directory for `id`
    pub fn deployment_path(&self, id: &DeploymentId) -> PathBuf {
        self.deploy_dir().join(id.dir_name())
    }

    /// Path of the staging directory for `id`
    pub fn staging_path(&self, id: &DeploymentId) -> PathBuf {
        self.deploy_dir().join(id.staging_name())
    }

    /// Path of the etc overlay directory for `id`
    pub fn overlay_path(&self, id: &DeploymentId) -> PathBuf {
        self.deploy_dir().join(id.overlay_name())
    }

    /// Overlay path belonging to an arbitrary deployment directory
    pub fn overlay_for(&self, deployment: &Path) -> PathBuf {
        let mut name = deployment.file_name().unwrap_or_default().to_os_string();
        name.push(OVERLAY_SUFFIX);
        deployment.with_file_name(name)
    }

    /// Whether the store skeleton exists on disk
    pub fn is_initialized(&self) -> bool {
        self.deploy_dir().is_dir()
    }

    /// Express `path` relative to the store root, for use as a symlink target
    pub fn relative_from_root(&self, path: &Path) -> PlinthResult<PathBuf> {
        path.strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .map_err(|_| PlinthError::OutsideStore {
                path: path.to_path_buf(),
                root: self.root.clone(),
            })
    }

    /// Deployment the `current` pointer resolves to, if any
    pub fn read_current(&self) -> PlinthResult<Option<PathBuf>> {
        self.read_pointer(&self.current_link())
    }

    /// Deployment the `previous` pointer resolves to, if any
    pub fn read_previous(&self) -> PlinthResult<Option<PathBuf>> {
        self.read_pointer(&self.previous_link())
    }

    fn read_pointer(&self, link: &Path) -> PlinthResult<Option<PathBuf>> {
        match fs::read_link(link) {
            Ok(target) if target.is_absolute() => Ok(Some(target)),
            Ok(target) => Ok(Some(self.root.join(target))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PlinthError::io("reading pointer", link, e)),
        }
    }
}

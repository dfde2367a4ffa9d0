//! Deployment Identifier Value Object
//!
//! A deployment is identified by its target name and the commit it was
//! checked out from. All directory names derived from that pair - the
//! committed tree, the staging directory, the etc overlay - are formatted
//! here and nowhere else, so the naming scheme cannot drift between the
//! stager and the rest of the system.

use std::fmt;

use crate::error::{PlinthError, PlinthResult};

/// Suffix of a staging directory under construction
pub const STAGING_SUFFIX: &str = ".tmp";

/// Suffix of the mutable configuration overlay directory
pub const OVERLAY_SUFFIX: &str = "-etc";

/// Opaque commit identifier produced by the object store
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommitId(String);

impl CommitId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of one deployment: `(target_name, commit_id)`
///
/// Deployments are content-addressed: the same target at the same commit
/// always maps to the same directory name, which is what makes redeploys
/// naturally idempotent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentId {
    target: String,
    commit: CommitId,
}

impl DeploymentId {
    /// Create a deployment id, validating that the target name can form a
    /// directory name
    pub fn new(target: &str, commit: CommitId) -> PlinthResult<Self> {
        if target.is_empty() {
            return Err(PlinthError::InvalidTarget {
                name: target.to_string(),
                reason: "name is empty".to_string(),
            });
        }
        if target.contains('/') || target.contains('\0') {
            return Err(PlinthError::InvalidTarget {
                name: target.to_string(),
                reason: "name contains a path separator".to_string(),
            });
        }
        if target.starts_with('.') {
            return Err(PlinthError::InvalidTarget {
                name: target.to_string(),
                reason: "name starts with '.'".to_string(),
            });
        }
        Ok(Self {
            target: target.to_string(),
            commit,
        })
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn commit(&self) -> &CommitId {
        &self.commit
    }

    /// Directory name of the committed deployment: `<target>-<commit>`
    pub fn dir_name(&self) -> String {
        format!("{}-{}", self.target, self.commit)
    }

    /// Directory name of the staging directory: `<target>-<commit>.tmp`
    pub fn staging_name(&self) -> String {
        format!("{}{}", self.dir_name(), STAGING_SUFFIX)
    }

    /// Directory name of the etc overlay: `<target>-<commit>-etc`
    pub fn overlay_name(&self) -> String {
        format!("{}{}", self.dir_name(), OVERLAY_SUFFIX)
    }

    /// Parse a committed deployment directory name back into an id.
    ///
    /// Commit ids never contain `-`, so the split happens at the last one;
    /// staging and overlay directory names are rejected.
    pub fn parse_dir_name(name: &str) -> Option<Self> {
        if name.ends_with(STAGING_SUFFIX) || name.ends_with(OVERLAY_SUFFIX) {
            return None;
        }
        let (target, commit) = name.rsplit_once('-')?;
        if target.is_empty() || commit.is_empty() {
            return None;
        }
        Self::new(target, CommitId::new(commit)).ok()
    }
}

impl fmt::Display for DeploymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

//! Value objects - small immutable types with validation

mod content_hash;
mod deployment_id;

pub use content_hash::ContentHash;
pub use deployment_id::{CommitId, DeploymentId, OVERLAY_SUFFIX, STAGING_SUFFIX};

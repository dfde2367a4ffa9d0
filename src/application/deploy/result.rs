//! Deploy operation result

use std::path::PathBuf;

use crate::domain::services::MergeSummary;
use crate::domain::value_objects::DeploymentId;

/// Outcome of a completed deploy operation
#[derive(Debug, Clone)]
pub struct DeployOutcome {
    /// Identity of the deployed tree
    pub id: DeploymentId,

    /// Committed deployment directory
    pub path: PathBuf,

    /// An existing deployment directory was reused instead of re-staged
    pub reused: bool,

    /// Config replay counts, absent on a first deployment
    pub merge: Option<MergeSummary>,

    /// The requested deployment was already active; pointers were untouched
    pub already_active: bool,

    /// Deployment that `previous` now points at, if the swap demoted one
    pub previous: Option<PathBuf>,

    /// Kernel integration ran for this deployment
    pub kernel_updated: bool,
}

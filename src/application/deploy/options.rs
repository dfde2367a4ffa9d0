//! Deploy operation options

/// Options controlling one deploy operation
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Target name the deployment is created for
    pub target: String,

    /// Revision to deploy (ref name or commit id)
    pub revision: String,

    /// Discard and re-create an existing deployment of the same commit
    pub force: bool,

    /// Skip the post-activation kernel integration step
    pub no_kernel: bool,
}

impl DeployOptions {
    pub fn new(target: impl Into<String>, revision: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            revision: revision.into(),
            force: false,
            no_kernel: false,
        }
    }
}

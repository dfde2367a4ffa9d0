//! Deploy operation - staging, activation, and orchestration

mod options;
mod result;
mod stager;
mod swap;
mod use_case;

pub use options::DeployOptions;
pub use result::DeployOutcome;
pub use stager::{StagedDeployment, Stager, ETC_DIR};
pub use swap::{activate, Activation};
pub use use_case::DeployUseCase;

//! Domain entities

mod store;

pub use store::{DeploymentStore, DEPLOY_DIR};

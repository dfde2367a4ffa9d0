//! Plinth - atomic deployment of immutable filesystem trees
//!
//! A store holds content-addressed trees and a `deploy/` directory of
//! checked-out deployments, each paired with a mutable `-etc` configuration
//! overlay. Deploying stages a complete new deployment next to the live one,
//! replays local configuration changes onto it, commits it with one atomic
//! rename, and swaps the `current`/`previous` pointer pair so the prior
//! deployment stays available for rollback.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod fs_tree;
pub mod infrastructure;

pub use application::deploy::{DeployOptions, DeployOutcome, DeployUseCase};
pub use config::StoreConfig;
pub use domain::entities::DeploymentStore;
pub use error::{PlinthError, PlinthResult};

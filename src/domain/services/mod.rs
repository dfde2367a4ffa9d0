//! Domain services - pure tree-level algorithms
//!
//! The diff and merge engines operate on plain directory paths and know
//! nothing about stores, deployments, or pointers.

pub mod config_merge;
pub mod tree_diff;

pub use config_merge::{merge_config, MergeSummary};
pub use tree_diff::{diff_trees, TreeDiff};

//! Common test utilities for plinth CLI scenario tests.
//!
//! Provides `TestEnv` (an isolated store plus helpers to run the built
//! binary against it), fixtures for building source trees, and a small
//! assertion macro.
#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;

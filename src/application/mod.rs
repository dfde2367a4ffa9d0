//! Application layer - operation orchestration over domain ports

pub mod deploy;

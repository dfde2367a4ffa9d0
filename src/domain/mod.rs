//! Domain layer - core model of stores, deployments, and tree algorithms

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

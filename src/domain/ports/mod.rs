//! Domain ports - abstractions over external collaborators
//!
//! The object store, trigger execution, and kernel integration are consumed
//! through these traits; concrete adapters live in the infrastructure layer.

mod deploy_events;
mod kernel_integration;
mod object_store;
mod trigger_runner;

pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
pub use kernel_integration::{KernelError, KernelIntegration, NoopKernelIntegration};
pub use object_store::{ObjectStore, ObjectStoreError};
pub use trigger_runner::{NoopTriggerRunner, TriggerError, TriggerRunner};

#[cfg(test)]
pub use deploy_events::testing;

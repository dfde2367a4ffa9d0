//! Infrastructure layer - concrete adapters behind the domain ports

pub mod events;
pub mod kernel;
pub mod lock;
pub mod object_store;
pub mod triggers;

pub use events::{ConsoleEventSink, JsonEventSink};
pub use kernel::CommandKernelIntegration;
pub use lock::StoreLock;
pub use object_store::FsObjectStore;
pub use triggers::ScriptTriggerRunner;

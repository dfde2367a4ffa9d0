//! Deploy Event Port
//!
//! Progress reporting for deploy operations is an observable side effect,
//! not an error channel. Sinks can render events for humans, stream them as
//! NDJSON, or ignore them.

use std::path::PathBuf;

/// Event emitted during a deploy operation
#[derive(Debug, Clone)]
pub enum DeployEvent {
    /// Revision resolved to a concrete commit
    Resolved {
        target: String,
        revision: String,
        commit: String,
    },

    /// Fresh deployment is being checked out into its staging directory
    StagingStarted { path: PathBuf },

    /// Deployment directory already existed and is being reused
    DeploymentReused { path: PathBuf },

    /// Etc overlay created from the checked-out tree's own etc
    OverlayCreated { path: PathBuf },

    /// Local configuration changes replayed onto the new overlay
    ConfigMerged {
        modified: usize,
        removed: usize,
        added: usize,
    },

    /// First deployment: no prior overlay, nothing to merge
    NoPriorConfig,

    /// Staging directory atomically renamed into place
    Committed { path: PathBuf },

    /// The requested deployment is already the active one
    AlreadyActive { path: PathBuf },

    /// Active pointer pair updated
    Activated {
        current: PathBuf,
        previous: Option<PathBuf>,
    },

    /// Kernel integration completed for the new deployment
    KernelUpdated { deployment: PathBuf },
}

/// Trait for receiving deploy events
pub trait DeployEventSink {
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingEventSink;
    use super::*;

    #[test]
    fn recording_sink_captures_events() {
        let (sink, events) = RecordingEventSink::new();

        sink.on_event(DeployEvent::NoPriorConfig);
        sink.on_event(DeployEvent::Committed {
            path: PathBuf::from("/store/deploy/myos-3f2a"),
        });

        assert_eq!(events.lock().unwrap().len(), 2);
    }
}

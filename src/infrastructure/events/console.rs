//! Human-readable event output

use crate::domain::ports::{DeployEvent, DeployEventSink};

/// Event sink printing one progress line per event to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleEventSink;

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        match event {
            DeployEvent::Resolved {
                target,
                revision,
                commit,
            } => println!("resolved {revision} -> {commit} for target {target}"),
            DeployEvent::StagingStarted { path } => {
                println!("creating deployment {}", path.display())
            }
            DeployEvent::DeploymentReused { path } => {
                println!("reusing existing deployment {}", path.display())
            }
            DeployEvent::OverlayCreated { path } => {
                println!("created config overlay {}", path.display())
            }
            DeployEvent::ConfigMerged {
                modified,
                removed,
                added,
            } => println!("processing config: {modified} modified, {removed} removed, {added} added"),
            DeployEvent::NoPriorConfig => println!("no previous configuration to merge"),
            DeployEvent::Committed { path } => {
                println!("committed deployment {}", path.display())
            }
            DeployEvent::AlreadyActive { path } => {
                println!("current already points to {}", path.display())
            }
            DeployEvent::Activated { current, previous } => {
                println!("current -> {}", current.display());
                if let Some(previous) = previous {
                    println!("previous -> {}", previous.display());
                }
            }
            DeployEvent::KernelUpdated { deployment } => {
                println!("updated kernel configuration for {}", deployment.display())
            }
        }
    }
}

//! NDJSON event output
//!
//! One JSON object per line, tagged with an `event` field. The writer is
//! injectable so tests can capture the stream; write failures are dropped,
//! progress reporting must never abort a deploy.

use std::io::{self, Write};
use std::sync::Mutex;

use serde_json::{json, Value};

use crate::domain::ports::{DeployEvent, DeployEventSink};

/// Event sink emitting newline-delimited JSON
pub struct JsonEventSink<W: Write> {
    writer: Mutex<W>,
}

impl JsonEventSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonEventSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    fn render(event: &DeployEvent) -> Value {
        match event {
            DeployEvent::Resolved {
                target,
                revision,
                commit,
            } => json!({
                "event": "resolved",
                "target": target,
                "revision": revision,
                "commit": commit,
            }),
            DeployEvent::StagingStarted { path } => json!({
                "event": "staging_started",
                "path": path,
            }),
            DeployEvent::DeploymentReused { path } => json!({
                "event": "deployment_reused",
                "path": path,
            }),
            DeployEvent::OverlayCreated { path } => json!({
                "event": "overlay_created",
                "path": path,
            }),
            DeployEvent::ConfigMerged {
                modified,
                removed,
                added,
            } => json!({
                "event": "config_merged",
                "modified": modified,
                "removed": removed,
                "added": added,
            }),
            DeployEvent::NoPriorConfig => json!({ "event": "no_prior_config" }),
            DeployEvent::Committed { path } => json!({
                "event": "committed",
                "path": path,
            }),
            DeployEvent::AlreadyActive { path } => json!({
                "event": "already_active",
                "path": path,
            }),
            DeployEvent::Activated { current, previous } => json!({
                "event": "activated",
                "current": current,
                "previous": previous,
            }),
            DeployEvent::KernelUpdated { deployment } => json!({
                "event": "kernel_updated",
                "deployment": deployment,
            }),
        }
    }
}

impl<W: Write> DeployEventSink for JsonEventSink<W> {
    fn on_event(&self, event: DeployEvent) {
        let value = Self::render(&event);
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{value}");
        }
    }
}

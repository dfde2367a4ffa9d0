//! Deploy command - wire the adapters and run the deploy use case

use std::path::Path;

use anyhow::{bail, Result};

use plinth::domain::ports::DeployEventSink;
use plinth::infrastructure::{
    CommandKernelIntegration, ConsoleEventSink, FsObjectStore, JsonEventSink,
    ScriptTriggerRunner, StoreLock,
};
use plinth::{DeployOptions, DeployUseCase, DeploymentStore, StoreConfig};

pub fn cmd_deploy(
    store_root: &Path,
    target: &str,
    revision: Option<&str>,
    force: bool,
    no_kernel: bool,
    json: bool,
) -> Result<()> {
    // a ref named after the target is the common case
    let revision = revision.unwrap_or(target);

    let store = DeploymentStore::new(store_root);
    if !store.is_initialized() {
        bail!(plinth::PlinthError::Uninitialized {
            path: store_root.to_path_buf(),
        });
    }
    let _lock = StoreLock::acquire(store_root)?;

    let config = StoreConfig::load_for_store(store_root)?;
    let objects = FsObjectStore::for_store(store_root);
    let triggers = ScriptTriggerRunner::from_config(&config.triggers);
    let kernel = CommandKernelIntegration::from_config(&config.kernel);

    let json_sink;
    let console_sink;
    let events: &dyn DeployEventSink = if json {
        json_sink = JsonEventSink::stdout();
        &json_sink
    } else {
        console_sink = ConsoleEventSink;
        &console_sink
    };

    let use_case = DeployUseCase::new(&store, &objects, &triggers, &kernel);
    let mut options = DeployOptions::new(target, revision);
    options.force = force;
    options.no_kernel = no_kernel;

    let outcome = use_case.execute(&options, events)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "event": "deployed",
                "deployment": outcome.id.to_string(),
                "path": outcome.path,
                "reused": outcome.reused,
                "already_active": outcome.already_active,
                "previous": outcome.previous,
                "kernel_updated": outcome.kernel_updated,
            })
        );
    } else {
        println!("deployed {} at {}", outcome.id, outcome.path.display());
    }
    Ok(())
}

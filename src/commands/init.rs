//! Init command - create the store skeleton

use std::fs;
use std::path::Path;

use anyhow::Result;

use plinth::config::{StoreConfig, CONFIG_FILE};
use plinth::fs_tree;
use plinth::infrastructure::FsObjectStore;
use plinth::DeploymentStore;

/// Create the deploy directory, the object repository, and a default config
pub fn cmd_init(store_root: &Path, json: bool) -> Result<()> {
    let store = DeploymentStore::new(store_root);
    fs_tree::ensure_dir(&store.deploy_dir())?;
    FsObjectStore::for_store(store_root).init()?;

    // an existing config is the administrator's, leave it alone
    let config_path = store_root.join(CONFIG_FILE);
    if !config_path.exists() {
        fs::write(&config_path, StoreConfig::default().to_toml()?)?;
    }

    if json {
        println!(
            "{}",
            serde_json::json!({
                "event": "initialized",
                "store": store_root,
            })
        );
    } else {
        println!("initialized store at {}", store_root.display());
    }
    Ok(())
}

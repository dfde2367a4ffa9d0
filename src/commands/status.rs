//! Status command - show the pointer pair and known deployments

use std::fs;
use std::path::Path;

use anyhow::{bail, Result};

use plinth::domain::value_objects::DeploymentId;
use plinth::DeploymentStore;

pub fn cmd_status(store_root: &Path, json: bool) -> Result<()> {
    let store = DeploymentStore::new(store_root);
    if !store.is_initialized() {
        bail!(plinth::PlinthError::Uninitialized {
            path: store_root.to_path_buf(),
        });
    }

    let current = store.read_current()?;
    let previous = store.read_previous()?;
    let deployments = list_deployments(&store)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "store": store_root,
                "current": current,
                "previous": previous,
                "deployments": deployments,
            })
        );
    } else {
        match &current {
            Some(path) => println!("current:  {}", path.display()),
            None => println!("current:  (none)"),
        }
        match &previous {
            Some(path) => println!("previous: {}", path.display()),
            None => println!("previous: (none)"),
        }
        println!("deployments:");
        for name in &deployments {
            println!("  {name}");
        }
    }
    Ok(())
}

/// Committed deployment names, skipping overlays and staging leftovers
fn list_deployments(store: &DeploymentStore) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(store.deploy_dir())? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if DeploymentId::parse_dir_name(name).is_some() {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}

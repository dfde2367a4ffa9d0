//! Import command - bring a tree into the object repository

use std::path::Path;

use anyhow::{bail, Result};

use plinth::infrastructure::{FsObjectStore, StoreLock};

pub fn cmd_import(
    store_root: &Path,
    source: &Path,
    reference: Option<&str>,
    json: bool,
) -> Result<()> {
    if !source.is_dir() {
        bail!("import source {} is not a directory", source.display());
    }

    let objects = FsObjectStore::for_store(store_root);
    if !objects.is_initialized() {
        bail!(plinth::PlinthError::Uninitialized {
            path: store_root.to_path_buf(),
        });
    }

    let _lock = StoreLock::acquire(store_root)?;
    let commit = objects.import(source, reference)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "event": "imported",
                "commit": commit.as_str(),
                "ref": reference,
            })
        );
    } else {
        println!("imported {} as commit {commit}", source.display());
        if let Some(name) = reference {
            println!("ref {name} -> {commit}");
        }
    }
    Ok(())
}

//! Config Merge Engine
//!
//! Carries local configuration changes forward across a deployment switch by
//! replay, not by three-way merge: the difference between the old default
//! configuration and the old live configuration is computed, then applied on
//! top of the new deployment's default configuration. Local edits always win
//! over upstream edits to the same path; paths deleted locally are deleted
//! again (an idempotent no-op when upstream already dropped them); modified
//! and locally-added paths are copied from the live tree with permissions
//! and extended attributes preserved and symlinks copied as links.

use std::fs;
use std::path::Path;

use super::tree_diff::{diff_trees, TreeDiff};
use crate::error::{PlinthError, PlinthResult};
use crate::fs_tree;

/// Counts of replayed changes, for reporting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSummary {
    pub modified: usize,
    pub removed: usize,
    pub added: usize,
}

/// Replay local changes between `old_default` and `old_live` onto the
/// overlay at `new_overlay`.
///
/// `new_overlay` is expected to already hold the new deployment's default
/// configuration; on success it holds that configuration with the local
/// changes applied on top.
pub fn merge_config(
    old_default: &Path,
    old_live: &Path,
    new_overlay: &Path,
) -> PlinthResult<MergeSummary> {
    let diff = diff_trees(old_default, old_live)?;
    apply_diff(&diff, old_live, new_overlay)?;

    Ok(MergeSummary {
        modified: diff.modified.len(),
        removed: diff.removed.len(),
        added: diff.added.len(),
    })
}

fn apply_diff(diff: &TreeDiff, old_live: &Path, new_overlay: &Path) -> PlinthResult<()> {
    for rel in &diff.removed {
        fs_tree::ensure_removed(&new_overlay.join(rel))?;
    }
    for rel in diff.modified.iter().chain(&diff.added) {
        replay_entry(&old_live.join(rel), &new_overlay.join(rel))?;
    }
    Ok(())
}

/// Make `dest` match the live entry at `src`, whatever was there before.
///
/// A directory is copied recursively: when an entry changed kind from file to
/// directory the diff lists only the directory itself, so its contents must
/// come along here. Descendants of locally-added directories get replayed a
/// second time by their own diff entries, which is harmless.
fn replay_entry(src: &Path, dest: &Path) -> PlinthResult<()> {
    let meta =
        fs::symlink_metadata(src).map_err(|e| PlinthError::io("inspecting", src, e))?;

    fs_tree::ensure_removed(dest)?;
    if let Some(parent) = dest.parent() {
        fs_tree::ensure_dir(parent)?;
    }

    let file_type = meta.file_type();
    if file_type.is_dir() {
        fs_tree::copy_tree(src, dest)?;
    } else if file_type.is_symlink() {
        let target = fs::read_link(src).map_err(|e| PlinthError::io("reading symlink", src, e))?;
        fs_tree::symlink(&target, dest)?;
    } else {
        fs::copy(src, dest).map_err(|e| PlinthError::io("copying into", dest, e))?;
        fs_tree::copy_xattrs(src, dest)
            .map_err(|e| PlinthError::io("copying attributes onto", dest, e))?;
    }

    Ok(())
}

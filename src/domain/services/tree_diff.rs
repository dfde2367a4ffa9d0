//! Tree Diff Engine
//!
//! Recursively compares two directory trees and classifies every path as
//! modified, removed, or added relative to the base tree. File equality is
//! decided by content checksum, not timestamps; symlinks compare by link
//! target; a path that changes kind (file vs directory vs symlink) counts as
//! modified. Removed and added directories are reported together with their
//! descendants.
//!
//! No partial results: any unreadable path fails the whole diff.

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ContentHash;
use crate::error::{PlinthError, PlinthResult};

/// Result of comparing two trees: three disjoint sets of relative paths
#[derive(Debug, Clone, Default)]
pub struct TreeDiff {
    /// Paths present in both trees with differing content
    pub modified: Vec<PathBuf>,
    /// Paths present only in the base tree
    pub removed: Vec<PathBuf>,
    /// Paths present only in the comparison tree
    pub added: Vec<PathBuf>,
}

impl TreeDiff {
    pub fn is_empty(&self) -> bool {
        self.modified.is_empty() && self.removed.is_empty() && self.added.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Dir,
    File,
    Symlink,
}

impl EntryKind {
    fn of(path: &Path) -> io::Result<Self> {
        let file_type = fs::symlink_metadata(path)?.file_type();
        Ok(if file_type.is_dir() {
            EntryKind::Dir
        } else if file_type.is_symlink() {
            EntryKind::Symlink
        } else {
            EntryKind::File
        })
    }
}

/// Compare tree `base` against tree `other`
pub fn diff_trees(base: &Path, other: &Path) -> PlinthResult<TreeDiff> {
    let mut diff = TreeDiff::default();
    diff_dir(base, other, Path::new(""), &mut diff)?;
    Ok(diff)
}

fn diff_dir(base_root: &Path, other_root: &Path, rel: &Path, diff: &mut TreeDiff) -> PlinthResult<()> {
    let base_dir = base_root.join(rel);
    let other_dir = other_root.join(rel);

    let base_names = read_names(&base_dir)?;
    let other_names = read_names(&other_dir)?;

    for name in base_names.union(&other_names) {
        let entry_rel = rel.join(name);
        let base_path = base_root.join(&entry_rel);
        let other_path = other_root.join(&entry_rel);

        match (base_names.contains(name), other_names.contains(name)) {
            (true, false) => {
                let kind = entry_kind(&base_path)?;
                diff.removed.push(entry_rel.clone());
                if kind == EntryKind::Dir {
                    collect_descendants(base_root, &entry_rel, &mut diff.removed)?;
                }
            }
            (false, true) => {
                let kind = entry_kind(&other_path)?;
                diff.added.push(entry_rel.clone());
                if kind == EntryKind::Dir {
                    collect_descendants(other_root, &entry_rel, &mut diff.added)?;
                }
            }
            (true, true) => {
                let base_kind = entry_kind(&base_path)?;
                let other_kind = entry_kind(&other_path)?;

                if base_kind != other_kind {
                    diff.modified.push(entry_rel);
                } else {
                    match base_kind {
                        EntryKind::Dir => {
                            diff_dir(base_root, other_root, &entry_rel, diff)?;
                        }
                        EntryKind::Symlink => {
                            if links_differ(&base_path, &other_path)? {
                                diff.modified.push(entry_rel);
                            }
                        }
                        EntryKind::File => {
                            if files_differ(&base_path, &other_path)? {
                                diff.modified.push(entry_rel);
                            }
                        }
                    }
                }
            }
            (false, false) => unreachable!("name came from the union of both sets"),
        }
    }

    Ok(())
}

fn read_names(dir: &Path) -> PlinthResult<BTreeSet<OsString>> {
    let entries = fs::read_dir(dir).map_err(|e| PlinthError::io("reading tree", dir, e))?;
    let mut names = BTreeSet::new();
    for entry in entries {
        let entry = entry.map_err(|e| PlinthError::io("reading tree", dir, e))?;
        names.insert(entry.file_name());
    }
    Ok(names)
}

fn entry_kind(path: &Path) -> PlinthResult<EntryKind> {
    EntryKind::of(path).map_err(|e| PlinthError::io("inspecting", path, e))
}

fn collect_descendants(root: &Path, rel: &Path, out: &mut Vec<PathBuf>) -> PlinthResult<()> {
    let dir = root.join(rel);
    let entries = fs::read_dir(&dir).map_err(|e| PlinthError::io("reading tree", &dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| PlinthError::io("reading tree", &dir, e))?;
        let entry_rel = rel.join(entry.file_name());
        let file_type = entry
            .file_type()
            .map_err(|e| PlinthError::io("inspecting", entry.path(), e))?;
        out.push(entry_rel.clone());
        if file_type.is_dir() {
            collect_descendants(root, &entry_rel, out)?;
        }
    }
    Ok(())
}

fn links_differ(a: &Path, b: &Path) -> PlinthResult<bool> {
    let target_a = fs::read_link(a).map_err(|e| PlinthError::io("reading symlink", a, e))?;
    let target_b = fs::read_link(b).map_err(|e| PlinthError::io("reading symlink", b, e))?;
    Ok(target_a != target_b)
}

fn files_differ(a: &Path, b: &Path) -> PlinthResult<bool> {
    let len_a = fs::symlink_metadata(a)
        .map_err(|e| PlinthError::io("inspecting", a, e))?
        .len();
    let len_b = fs::symlink_metadata(b)
        .map_err(|e| PlinthError::io("inspecting", b, e))?
        .len();
    if len_a != len_b {
        return Ok(true);
    }

    let hash_a = ContentHash::of_file(a).map_err(|e| PlinthError::io("hashing", a, e))?;
    let hash_b = ContentHash::of_file(b).map_err(|e| PlinthError::io("hashing", b, e))?;
    Ok(hash_a != hash_b)
}

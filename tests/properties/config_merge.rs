//! Properties of the diff and replay engines over generated file trees.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use proptest::prelude::*;
use tempfile::tempdir;

use plinth::domain::services::{diff_trees, merge_config};

/// Flat file maps are enough to exercise the classification logic
fn file_map() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map("[a-z]{1,8}", "[a-zA-Z0-9 ]{0,16}", 0..8)
}

fn materialize(root: &Path, files: &BTreeMap<String, String>) {
    fs::create_dir_all(root).unwrap();
    for (name, content) in files {
        fs::write(root.join(name), content).unwrap();
    }
}

fn read_back(root: &Path) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    for entry in fs::read_dir(root).unwrap() {
        let entry = entry.unwrap();
        let name = entry.file_name().into_string().unwrap();
        out.insert(name, fs::read_to_string(entry.path()).unwrap());
    }
    out
}

proptest! {
    /// A tree diffed against itself is empty
    #[test]
    fn diff_of_identical_trees_is_empty(files in file_map()) {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        materialize(&a, &files);
        materialize(&b, &files);

        let diff = diff_trees(&a, &b).unwrap();
        prop_assert!(diff.is_empty());
    }

    /// Every path lands in exactly one bucket
    #[test]
    fn diff_buckets_are_disjoint(base in file_map(), other in file_map()) {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        materialize(&a, &base);
        materialize(&b, &other);

        let diff = diff_trees(&a, &b).unwrap();
        for path in &diff.modified {
            prop_assert!(!diff.removed.contains(path));
            prop_assert!(!diff.added.contains(path));
        }
        for path in &diff.removed {
            prop_assert!(!diff.added.contains(path));
        }
    }

    /// No local changes means the new defaults come through untouched
    #[test]
    fn replay_without_local_changes_is_identity(
        old in file_map(),
        new in file_map(),
    ) {
        let dir = tempdir().unwrap();
        let old_default = dir.path().join("old_default");
        let old_live = dir.path().join("old_live");
        let overlay = dir.path().join("overlay");
        materialize(&old_default, &old);
        materialize(&old_live, &old);
        materialize(&overlay, &new);

        let summary = merge_config(&old_default, &old_live, &overlay).unwrap();
        prop_assert_eq!(summary.modified, 0);
        prop_assert_eq!(summary.removed, 0);
        prop_assert_eq!(summary.added, 0);
        prop_assert_eq!(read_back(&overlay), new);
    }

    /// After replay, the overlay agrees with the live tree on every locally
    /// changed path
    #[test]
    fn replay_makes_local_changes_win(
        old in file_map(),
        live in file_map(),
        new in file_map(),
    ) {
        let dir = tempdir().unwrap();
        let old_default = dir.path().join("old_default");
        let old_live = dir.path().join("old_live");
        let overlay = dir.path().join("overlay");
        materialize(&old_default, &old);
        materialize(&old_live, &live);
        materialize(&overlay, &new);

        merge_config(&old_default, &old_live, &overlay).unwrap();
        let merged = read_back(&overlay);

        for (name, content) in &live {
            match old.get(name) {
                // locally added or modified: live content wins
                None => prop_assert_eq!(merged.get(name), Some(content)),
                Some(old_content) if old_content != content => {
                    prop_assert_eq!(merged.get(name), Some(content))
                }
                // locally untouched: whatever the new defaults say
                Some(_) => {}
            }
        }
        for name in old.keys() {
            if !live.contains_key(name) {
                // locally removed: gone regardless of the new defaults
                prop_assert!(!merged.contains_key(name));
            }
        }
    }
}

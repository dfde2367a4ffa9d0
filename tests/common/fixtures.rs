//! Test fixtures - helpers for building source trees on disk.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

/// Write a tree of files under `root`, creating parent directories
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full = root.join(path);
        fs::create_dir_all(full.parent().expect("file path with parent")).expect("create parents");
        fs::write(full, content).expect("write fixture file");
    }
}

/// Write an executable shell script at `path`
pub fn write_script(path: &Path, body: &str) {
    fs::create_dir_all(path.parent().expect("script path with parent")).expect("create parents");
    fs::write(path, format!("#!/bin/sh\n{body}\n")).expect("write script");
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).expect("chmod script");
}

/// A minimal OS-like tree with an etc directory
pub fn os_tree(version: &str) -> Vec<(String, String)> {
    vec![
        ("usr/bin/tool".to_string(), format!("binary {version}")),
        ("etc/release".to_string(), version.to_string()),
        ("etc/motd".to_string(), "welcome\n".to_string()),
    ]
}

/// Write `os_tree(version)` under `root`
pub fn write_os_tree(root: &Path, version: &str) {
    for (path, content) in os_tree(version) {
        let full = root.join(&path);
        fs::create_dir_all(full.parent().expect("file path with parent")).expect("create parents");
        fs::write(full, content).expect("write fixture file");
    }
}

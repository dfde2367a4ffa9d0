//! Filesystem tree primitives
//!
//! Low-level operations shared by the diff engine, the config merge engine,
//! and the deployment stager: recursive copies that preserve permissions and
//! copy symlinks as links, idempotent removal helpers, and the atomic rename
//! used to commit staged state.
//!
//! Cleanup helpers (`ensure_unlinked`, `ensure_removed`) treat NotFound as
//! success: deleting something already absent is idempotent. No other error
//! is swallowed; everything else surfaces as `PlinthError::Io` with the
//! phase and path that failed.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{PlinthError, PlinthResult};

/// Create a directory and all parents
pub fn ensure_dir(path: &Path) -> PlinthResult<()> {
    fs::create_dir_all(path).map_err(|e| PlinthError::io("creating directory", path, e))
}

/// Remove a file or symlink, succeeding if it does not exist
pub fn ensure_unlinked(path: &Path) -> PlinthResult<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(PlinthError::io("unlinking", path, e)),
    }
}

/// Remove a path of any kind (file, symlink, or directory tree), succeeding
/// if it does not exist
pub fn ensure_removed(path: &Path) -> PlinthResult<()> {
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => Err(PlinthError::io("inspecting", path, e))?,
    };

    let result = if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(PlinthError::io("removing", path, e)),
    }
}

/// Rename `from` to `to`.
///
/// Atomic with respect to readers of `to`: they observe either the old entry
/// or the new one, never an intermediate state.
pub fn atomic_rename(from: &Path, to: &Path) -> PlinthResult<()> {
    fs::rename(from, to).map_err(|e| PlinthError::io("renaming into", to, e))
}

/// Create a symlink at `link` pointing at `target`
pub fn symlink(target: &Path, link: &Path) -> PlinthResult<()> {
    std::os::unix::fs::symlink(target, link)
        .map_err(|e| PlinthError::io("creating symlink", link, e))
}

/// Recursively copy the tree at `src` into `dest`, creating `dest`.
///
/// Permissions and extended attributes are preserved; symlinks are copied as
/// links, never followed.
pub fn copy_tree(src: &Path, dest: &Path) -> PlinthResult<()> {
    copy_tree_contents(src, dest).map_err(|e| PlinthError::io("copying tree into", dest, e))
}

/// Raw recursive copy with plain `io::Error`, for adapters that carry their
/// own error types
pub fn copy_tree_contents(src: &Path, dest: &Path) -> io::Result<()> {
    let meta = fs::symlink_metadata(src)?;
    match fs::create_dir(dest) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {}
        Err(e) => return Err(e),
    }
    fs::set_permissions(dest, meta.permissions())?;
    copy_xattrs(src, dest)?;

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let from = entry.path();
        let to = dest.join(entry.file_name());

        if file_type.is_dir() {
            copy_tree_contents(&from, &to)?;
        } else if file_type.is_symlink() {
            let target = fs::read_link(&from)?;
            std::os::unix::fs::symlink(&target, &to)?;
        } else {
            fs::copy(&from, &to)?;
            copy_xattrs(&from, &to)?;
        }
    }

    Ok(())
}

/// Copy extended attributes from `src` to `dest`.
///
/// Filesystems without xattr support are tolerated; any other failure to
/// read or write an attribute is an error, the metadata is part of the
/// content being copied.
pub fn copy_xattrs(src: &Path, dest: &Path) -> io::Result<()> {
    let names = match xattr::list(src) {
        Ok(names) => names,
        Err(e) if e.kind() == io::ErrorKind::Unsupported => return Ok(()),
        Err(e) => return Err(e),
    };
    for name in names {
        if let Some(value) = xattr::get(src, &name)? {
            xattr::set(dest, &name, &value)?;
        }
    }
    Ok(())
}

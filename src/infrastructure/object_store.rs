//! Filesystem-backed object store
//!
//! Trees live under `repo/trees/<commit>/`, named by a content hash of the
//! whole tree, so importing identical content twice lands on the same commit.
//! Refs are plain files under `repo/refs/<name>` containing a commit id.
//! Imports stage into a `.tmp` directory and commit with a rename, the same
//! discipline the deployment stager uses.

use std::fs;
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::domain::ports::{ObjectStore, ObjectStoreError};
use crate::domain::value_objects::CommitId;
use crate::error::{PlinthError, PlinthResult};
use crate::fs_tree;

/// Name of the repository directory inside the store root
pub const REPO_DIR: &str = "repo";

const REFS_DIR: &str = "refs";
const TREES_DIR: &str = "trees";
const IMPORT_STAGING: &str = ".import.tmp";

/// Content-addressed tree store rooted at one repository directory
#[derive(Debug, Clone)]
pub struct FsObjectStore {
    repo: PathBuf,
}

impl FsObjectStore {
    pub fn new(repo: impl Into<PathBuf>) -> Self {
        Self { repo: repo.into() }
    }

    /// The repository belonging to the store rooted at `root`
    pub fn for_store(root: &Path) -> Self {
        Self::new(root.join(REPO_DIR))
    }

    /// Create the repository skeleton
    pub fn init(&self) -> PlinthResult<()> {
        fs_tree::ensure_dir(&self.repo.join(REFS_DIR))?;
        fs_tree::ensure_dir(&self.repo.join(TREES_DIR))?;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.repo.join(TREES_DIR).is_dir()
    }

    fn tree_path(&self, commit: &str) -> PathBuf {
        self.repo.join(TREES_DIR).join(commit)
    }

    fn ref_path(&self, name: &str) -> PathBuf {
        self.repo.join(REFS_DIR).join(name)
    }

    /// Import the tree at `source`, returning its commit id and optionally
    /// pointing `ref_name` at it.
    ///
    /// Importing the same content again is a cheap no-op that returns the
    /// same commit.
    pub fn import(&self, source: &Path, ref_name: Option<&str>) -> PlinthResult<CommitId> {
        let hex = hash_tree(source).map_err(|e| PlinthError::io("hashing tree", source, e))?;
        let commit = CommitId::new(&hex);

        let tree = self.tree_path(&hex);
        if !tree.is_dir() {
            let staging = self.repo.join(TREES_DIR).join(IMPORT_STAGING);
            fs_tree::ensure_removed(&staging)?;
            fs_tree::copy_tree(source, &staging)?;
            fs_tree::atomic_rename(&staging, &tree)?;
        }

        if let Some(name) = ref_name {
            self.set_ref(name, &commit)?;
        }

        Ok(commit)
    }

    /// Point the ref `name` at `commit`
    pub fn set_ref(&self, name: &str, commit: &CommitId) -> PlinthResult<()> {
        if !is_usable_name(name) {
            return Err(PlinthError::Resolve {
                revision: name.to_string(),
                message: "not a usable ref name".to_string(),
            });
        }
        let path = self.ref_path(name);
        fs::write(&path, format!("{commit}\n")).map_err(|e| PlinthError::io("writing ref", &path, e))
    }
}

/// Names that stay inside the refs/trees directories when joined: no path
/// separators, no dotfile prefix (which also rules out `.` and `..`)
fn is_usable_name(name: &str) -> bool {
    !name.is_empty() && !name.contains('/') && !name.starts_with('.')
}

impl ObjectStore for FsObjectStore {
    fn resolve(&self, revision: &str) -> Result<CommitId, ObjectStoreError> {
        if !is_usable_name(revision) {
            return Err(ObjectStoreError::UnknownRevision(revision.to_string()));
        }

        // a revision naming a stored tree directly is already a commit
        if self.tree_path(revision).is_dir() {
            return Ok(CommitId::new(revision));
        }

        let ref_path = self.ref_path(revision);
        let content = match fs::read_to_string(&ref_path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ObjectStoreError::UnknownRevision(revision.to_string()))
            }
            Err(e) => return Err(ObjectStoreError::Io(e)),
        };

        let commit = content.trim();
        if commit.is_empty() {
            return Err(ObjectStoreError::Corrupt(format!(
                "ref '{revision}' is empty"
            )));
        }
        if !self.tree_path(commit).is_dir() {
            return Err(ObjectStoreError::Corrupt(format!(
                "ref '{revision}' names missing commit {commit}"
            )));
        }
        Ok(CommitId::new(commit))
    }

    fn checkout(&self, commit: &CommitId, dest: &Path) -> Result<(), ObjectStoreError> {
        let tree = self.tree_path(commit.as_str());
        if !tree.is_dir() {
            return Err(ObjectStoreError::Corrupt(format!(
                "no tree for commit {commit}"
            )));
        }
        fs_tree::copy_tree_contents(&tree, dest)?;
        Ok(())
    }
}

/// Canonical hash of a directory tree.
///
/// Entries are visited in sorted order; each contributes its relative path,
/// a kind tag, its permission bits, and its content (file bytes or symlink
/// target). Directory mtimes and ownership do not participate, so trees that
/// deploy identically hash identically.
fn hash_tree(root: &Path) -> io::Result<String> {
    let mut hasher = Sha256::new();
    hash_dir(root, Path::new(""), &mut hasher)?;
    Ok(format!("{:x}", hasher.finalize()))
}

fn hash_dir(root: &Path, rel: &Path, hasher: &mut Sha256) -> io::Result<()> {
    let dir = root.join(rel);
    let mut entries: Vec<_> = fs::read_dir(&dir)?.collect::<io::Result<_>>()?;
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let entry_rel = rel.join(entry.file_name());
        let path = entry.path();
        let meta = fs::symlink_metadata(&path)?;
        let mode = meta.permissions().mode() & 0o7777;

        hasher.update(entry_rel.as_os_str().as_encoded_bytes());
        hasher.update([0]);

        let file_type = meta.file_type();
        if file_type.is_dir() {
            hasher.update(format!("d{mode:o}\0").as_bytes());
            hash_dir(root, &entry_rel, hasher)?;
        } else if file_type.is_symlink() {
            hasher.update(format!("l{mode:o}\0").as_bytes());
            hasher.update(fs::read_link(&path)?.as_os_str().as_encoded_bytes());
            hasher.update([0]);
        } else {
            hasher.update(format!("f{mode:o}\0").as_bytes());
            let mut file = fs::File::open(&path)?;
            io::copy(&mut file, hasher)?;
            hasher.update([0]);
        }
    }

    Ok(())
}

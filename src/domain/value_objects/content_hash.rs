//! Content Hash Value Object
//!
//! A validated, immutable SHA-256 hash of file content. The diff engine
//! compares files by hash rather than by timestamp so that equality is
//! reliable across checkouts.

use std::fmt;
use std::fs::File;
use std::io;
use std::path::Path;

use sha2::{Digest, Sha256};

/// Content hash value object
///
/// Wraps a SHA-256 hash string with the `sha256:` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    /// Prefix for SHA-256 hashes
    pub const PREFIX: &'static str = "sha256:";

    /// Create a ContentHash by hashing a byte slice
    pub fn from_bytes(content: &[u8]) -> Self {
        let hash = Sha256::digest(content);
        Self(format!("{}{:x}", Self::PREFIX, hash))
    }

    /// Create a ContentHash by streaming a file's content through the hasher
    pub fn of_file(path: &Path) -> io::Result<Self> {
        let mut file = File::open(path)?;
        let mut hasher = Sha256::new();
        io::copy(&mut file, &mut hasher)?;
        Ok(Self(format!("{}{:x}", Self::PREFIX, hasher.finalize())))
    }

    /// Get the full hash string with prefix
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get just the hex part without prefix
    pub fn hex(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ContentHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn from_bytes_computes_sha256() {
        let hash = ContentHash::from_bytes(b"hello");
        assert!(hash.as_str().starts_with("sha256:"));
        assert_eq!(hash.hex().len(), 64);
    }

    #[test]
    fn same_content_same_hash() {
        assert_eq!(
            ContentHash::from_bytes(b"test"),
            ContentHash::from_bytes(b"test")
        );
    }

    #[test]
    fn different_content_different_hash() {
        assert_ne!(
            ContentHash::from_bytes(b"test1"),
            ContentHash::from_bytes(b"test2")
        );
    }

    #[test]
    fn of_file_matches_from_bytes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("file");
        std::fs::write(&path, "content").unwrap();

        assert_eq!(
            ContentHash::of_file(&path).unwrap(),
            ContentHash::from_bytes(b"content")
        );
    }

    #[test]
    fn of_file_missing_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(ContentHash::of_file(&dir.path().join("missing")).is_err());
    }
}

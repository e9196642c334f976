//! Local key-value blob storage
//!
//! A small persistent store holding one serialized document per key. It
//! outlives the process and is used to carry the session across restarts.

pub mod file;
pub mod memory;

pub use file::FileBlobStore;
pub use memory::InMemoryBlobStore;

use crate::error::{Error, Result};
use async_trait::async_trait;

/// Persistent string values addressed by key
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Read a value, `None` when the key was never written or was removed
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a value. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;
}

/// Keys become file names, so only a conservative character set is accepted
pub(crate) fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(Error::Storage(format!("invalid blob key: {:?}", key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("userData").is_ok());
        assert!(validate_key("user-data_2").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("a/b").is_err());
    }
}

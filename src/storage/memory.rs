//! In-memory blob store

use super::{validate_key, BlobStore};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Blob store that lives as long as the value does
#[derive(Default)]
pub struct InMemoryBlobStore {
    blobs: Mutex<HashMap<String, String>>,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value without going through validation
    pub fn with_blob(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store
            .blobs
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.into(), value.into());
        store
    }

    fn blobs(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.blobs
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.blobs().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.blobs().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        self.blobs().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_blob_lifecycle() {
        let store = InMemoryBlobStore::with_blob("userData", "{}");
        assert_eq!(store.get("userData").await.unwrap().as_deref(), Some("{}"));

        store.remove("userData").await.unwrap();
        assert_eq!(store.get("userData").await.unwrap(), None);
    }
}

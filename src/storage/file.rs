//! File-backed blob store

use super::{validate_key, BlobStore};
use crate::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tracing::trace;

/// Stores each key as `<base_path>/<key>.json`
pub struct FileBlobStore {
    base_path: PathBuf,
}

impl FileBlobStore {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", key))
    }
}

#[async_trait]
impl BlobStore for FileBlobStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        let path = self.blob_path(key);

        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        fs::create_dir_all(&self.base_path).await?;

        // Write to a temp file and rename so readers never see half a blob
        let temp_path = self.base_path.join(format!("{}.json.tmp", key));
        let final_path = self.blob_path(key);
        fs::write(&temp_path, value).await?;
        fs::rename(&temp_path, &final_path).await?;

        trace!("Wrote blob {} to {}", key, final_path.display());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        let path = self.blob_path(key);

        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

//! JSON file storage backend
//!
//! Stores each registry as a pretty-printed JSON array at
//! `<base_dir>/<store_id>.json`, human-inspectable and editable.

use async_trait::async_trait;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

use super::RecordStore;
use crate::error::{RegistryError, Result};

/// JSON file storage backend
pub struct JsonFileStore {
    /// Directory holding one file per store id
    base_dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at the given directory, creating it if needed
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        std::fs::create_dir_all(&base_dir)?;

        debug!("JSON file store initialized at: {:?}", base_dir);

        Ok(Self { base_dir })
    }

    /// Resolve the default registry directory under the OS data directory
    pub fn default_dir() -> Result<PathBuf> {
        ProjectDirs::from("com", "wallet-registry", "wallet-registry")
            .map(|dirs| dirs.data_dir().join("registries"))
            .ok_or_else(|| {
                RegistryError::StorageError("Could not determine data directory".to_string())
            })
    }

    /// Get the base directory path
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    fn store_file_path(&self, store_id: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", store_id))
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn read_all(&self, store_id: &str) -> Result<Vec<serde_json::Value>> {
        let path = self.store_file_path(store_id);

        if !path.exists() {
            debug!("No existing file for store {:?}", store_id);
            return Ok(Vec::new());
        }

        let contents = tokio::fs::read_to_string(&path).await?;
        let records: Vec<serde_json::Value> = serde_json::from_str(&contents)?;

        debug!("Read {} records from store {:?}", records.len(), store_id);
        Ok(records)
    }

    async fn write_all(&self, store_id: &str, records: &[serde_json::Value]) -> Result<()> {
        let contents = serde_json::to_string_pretty(records)?;
        let path = self.store_file_path(store_id);

        // Write atomically using a temp file
        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, &contents).await?;
        tokio::fs::rename(&temp_path, &path).await?;

        debug!("Wrote {} records to store {:?}", records.len(), store_id);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "JSON File Storage"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_missing_store() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path()).unwrap();

        let records = store.read_all("wallets").await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path()).unwrap();

        let records = vec![json!({"name": "walletOne"}), json!({"name": "walletTwo"})];
        store.write_all("wallets", &records).await.unwrap();

        let read = store.read_all("wallets").await.unwrap();
        assert_eq!(read, records);
    }

    #[tokio::test]
    async fn test_stores_are_isolated_by_id() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path()).unwrap();

        store
            .write_all("wallets", &[json!({"name": "a"})])
            .await
            .unwrap();
        store
            .write_all("environments", &[json!({"name": "b"})])
            .await
            .unwrap();

        assert_eq!(store.read_all("wallets").await.unwrap().len(), 1);
        assert_eq!(store.read_all("environments").await.unwrap().len(), 1);
        assert_eq!(store.read_all("wallets").await.unwrap()[0]["name"], "a");
    }

    #[tokio::test]
    async fn test_file_is_human_readable() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path()).unwrap();

        store
            .write_all("wallets", &[json!({"name": "walletOne"})])
            .await
            .unwrap();

        let on_disk =
            std::fs::read_to_string(temp_dir.path().join("wallets.json")).unwrap();
        assert!(on_disk.contains("\"walletOne\""));
        // pretty-printed, one field per line
        assert!(on_disk.contains('\n'));
    }
}

//! Flat store of persisted wallet entries

use std::sync::Arc;

use super::Registry;
use crate::entry::WalletEntry;
use crate::error::Result;
use crate::storage::RecordStore;

/// Store id for the wallets registry
pub const WALLETS: &str = "wallets";

/// Persisted wallet entries, keyed by name
///
/// This is the flat store only: it never sees entries synthesized from
/// environments. The merged view lives in [`crate::view::WalletViewAggregator`].
pub struct WalletStore {
    registry: Registry<WalletEntry>,
}

impl WalletStore {
    /// Create a wallet store over the given backend
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            registry: Registry::new(WALLETS, store),
        }
    }

    /// Add a wallet entry; fails with `DuplicateKey` if the name is taken
    pub async fn add(&self, entry: &WalletEntry) -> Result<()> {
        self.registry.add(entry).await
    }

    /// Get a wallet entry by name
    pub async fn get(&self, name: &str) -> Result<WalletEntry> {
        self.registry.get(name).await
    }

    /// Get all persisted entries in insertion order
    pub async fn get_all(&self) -> Result<Vec<WalletEntry>> {
        self.registry.get_all().await
    }

    /// Check whether an entry with the given name exists
    pub async fn exists(&self, name: &str) -> Result<bool> {
        self.registry.exists(name).await
    }

    /// Replace an existing entry, keyed by name
    pub async fn update(&self, entry: &WalletEntry) -> Result<()> {
        self.registry.update(entry).await
    }

    /// Delete an entry by name
    pub async fn delete(&self, name: &str) -> Result<()> {
        self.registry.delete(name).await
    }

    /// Remove all persisted entries; idempotent
    pub async fn clear(&self) -> Result<()> {
        self.registry.clear().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::JsonFileStore;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_wallet_store_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = WalletStore::new(Arc::new(JsonFileStore::new(dir.path()).unwrap()));

        let entry = WalletEntry::new("walletOne", "myPath").with_display_name("Wallet One");
        store.add(&entry).await.unwrap();

        assert_eq!(store.get("walletOne").await.unwrap(), entry);
    }

    #[tokio::test]
    async fn test_error_message_uses_wallets_store_id() {
        let dir = TempDir::new().unwrap();
        let store = WalletStore::new(Arc::new(JsonFileStore::new(dir.path()).unwrap()));

        let err = store.get("blah").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Entry \"blah\" in registry \"wallets\" does not exist"
        );
    }
}

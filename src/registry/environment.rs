//! Store of registered environment descriptors
//!
//! The wallet view consumes this store read-only; the CRUD surface exists so
//! callers that own environment lifecycles can share the same backend.

use std::sync::Arc;

use super::Registry;
use crate::entry::EnvironmentEntry;
use crate::error::Result;
use crate::storage::RecordStore;

/// Store id for the environments registry
pub const ENVIRONMENTS: &str = "environments";

/// Persisted environment descriptors, keyed by name
pub struct EnvironmentStore {
    registry: Registry<EnvironmentEntry>,
}

impl EnvironmentStore {
    /// Create an environment store over the given backend
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            registry: Registry::new(ENVIRONMENTS, store),
        }
    }

    /// Register an environment; fails with `DuplicateKey` if the name is taken
    pub async fn add(&self, entry: &EnvironmentEntry) -> Result<()> {
        self.registry.add(entry).await
    }

    /// Get an environment by name
    pub async fn get(&self, name: &str) -> Result<EnvironmentEntry> {
        self.registry.get(name).await
    }

    /// Get all environments in registration order
    pub async fn get_all(&self) -> Result<Vec<EnvironmentEntry>> {
        self.registry.get_all().await
    }

    /// Check whether an environment with the given name is registered
    pub async fn exists(&self, name: &str) -> Result<bool> {
        self.registry.exists(name).await
    }

    /// Replace an existing environment, keyed by name
    pub async fn update(&self, entry: &EnvironmentEntry) -> Result<()> {
        self.registry.update(entry).await
    }

    /// Delete an environment by name
    pub async fn delete(&self, name: &str) -> Result<()> {
        self.registry.delete(name).await
    }

    /// Remove all environments; idempotent
    pub async fn clear(&self) -> Result<()> {
        self.registry.clear().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EnvironmentType;
    use crate::storage::JsonFileStore;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_environment_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = EnvironmentStore::new(Arc::new(JsonFileStore::new(dir.path()).unwrap()));

        let entry = EnvironmentEntry {
            name: "myEnvironment".to_string(),
            environment_type: EnvironmentType::AnsibleEnvironment,
            managed_runtime: false,
            environment_directory: "test/data/nonManagedAnsible".into(),
        };
        store.add(&entry).await.unwrap();

        assert_eq!(store.get("myEnvironment").await.unwrap(), entry);
    }

    #[tokio::test]
    async fn test_error_message_uses_environments_store_id() {
        let dir = TempDir::new().unwrap();
        let store = EnvironmentStore::new(Arc::new(JsonFileStore::new(dir.path()).unwrap()));

        let err = store.get("blah").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Entry \"blah\" in registry \"environments\" does not exist"
        );
    }
}

//! Generic registry over a record store backend

use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

use crate::entry::RegistryEntry;
use crate::error::{RegistryError, Result};
use crate::storage::RecordStore;

/// A keyed collection of records persisted through a `RecordStore`
///
/// Reads pass through to the backend on every call, so multiple registry
/// instances over the same backend stay consistent. Insertion order is
/// preserved and is the order `get_all` returns.
pub struct Registry<T> {
    /// Store id, used as the record file name and in error messages
    store_id: String,
    /// Storage backend
    store: Arc<dyn RecordStore>,
    _entry: PhantomData<T>,
}

impl<T: RegistryEntry> Registry<T> {
    /// Create a registry bound to a store id
    pub fn new(store_id: impl Into<String>, store: Arc<dyn RecordStore>) -> Self {
        let store_id = store_id.into();
        debug!("Registry {:?} backed by {}", store_id, store.backend_name());

        Self {
            store_id,
            store,
            _entry: PhantomData,
        }
    }

    /// Get the store id this registry persists under
    pub fn store_id(&self) -> &str {
        &self.store_id
    }

    /// Get all entries in insertion order
    pub async fn get_all(&self) -> Result<Vec<T>> {
        let records = self.store.read_all(&self.store_id).await?;
        records
            .into_iter()
            .map(|record| serde_json::from_value(record).map_err(Into::into))
            .collect()
    }

    /// Get an entry by name
    pub async fn get(&self, name: &str) -> Result<T> {
        self.get_all()
            .await?
            .into_iter()
            .find(|entry| entry.name() == name)
            .ok_or_else(|| RegistryError::NotFound {
                registry: self.store_id.clone(),
                name: name.to_string(),
            })
    }

    /// Check whether an entry with the given name exists
    pub async fn exists(&self, name: &str) -> Result<bool> {
        Ok(self
            .get_all()
            .await?
            .iter()
            .any(|entry| entry.name() == name))
    }

    /// Add a new entry, appending it to the record list
    pub async fn add(&self, entry: &T) -> Result<()> {
        let mut entries = self.get_all().await?;

        if entries.iter().any(|existing| existing.name() == entry.name()) {
            return Err(RegistryError::DuplicateKey {
                registry: self.store_id.clone(),
                name: entry.name().to_string(),
            });
        }

        entries.push(entry.clone());
        self.write(&entries).await?;

        debug!("Added entry {:?} to registry {:?}", entry.name(), self.store_id);
        Ok(())
    }

    /// Replace an existing entry in place, keyed by name
    pub async fn update(&self, entry: &T) -> Result<()> {
        let mut entries = self.get_all().await?;

        let position = entries
            .iter()
            .position(|existing| existing.name() == entry.name())
            .ok_or_else(|| RegistryError::NotFound {
                registry: self.store_id.clone(),
                name: entry.name().to_string(),
            })?;

        entries[position] = entry.clone();
        self.write(&entries).await?;

        debug!("Updated entry {:?} in registry {:?}", entry.name(), self.store_id);
        Ok(())
    }

    /// Delete an entry by name
    pub async fn delete(&self, name: &str) -> Result<()> {
        let mut entries = self.get_all().await?;
        let before = entries.len();
        entries.retain(|entry| entry.name() != name);

        if entries.len() == before {
            return Err(RegistryError::NotFound {
                registry: self.store_id.clone(),
                name: name.to_string(),
            });
        }

        self.write(&entries).await?;

        debug!("Deleted entry {:?} from registry {:?}", name, self.store_id);
        Ok(())
    }

    /// Remove all entries; idempotent
    pub async fn clear(&self) -> Result<()> {
        self.write(&[]).await?;

        debug!("Cleared registry {:?}", self.store_id);
        Ok(())
    }

    async fn write(&self, entries: &[T]) -> Result<()> {
        let records = entries
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        self.store.write_all(&self.store_id, &records).await
    }
}

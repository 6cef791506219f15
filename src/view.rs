//! Aggregated wallet view
//!
//! Produces the canonical ordered list of wallets visible to a caller:
//! entries synthesized per registered environment, followed by persisted
//! entries, deduplicated by name, with the local-default wallet subject to
//! special ordering.

use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

use crate::entry::{EnvironmentEntry, WalletEntry, LOCAL_WALLET};
use crate::error::{RegistryError, Result};
use crate::generator::WalletGenerator;
use crate::registry::{EnvironmentStore, WalletStore, WALLETS};

/// Merged view over persisted wallets and environment-owned wallets
pub struct WalletViewAggregator {
    wallets: Arc<WalletStore>,
    environments: Arc<EnvironmentStore>,
    generator: Arc<dyn WalletGenerator>,
}

impl WalletViewAggregator {
    /// Create an aggregator over explicit store references and an injected
    /// wallet generator
    pub fn new(
        wallets: Arc<WalletStore>,
        environments: Arc<EnvironmentStore>,
        generator: Arc<dyn WalletGenerator>,
    ) -> Self {
        Self {
            wallets,
            environments,
            generator,
        }
    }

    /// Get the canonical ordered wallet list
    ///
    /// Environment-owned wallets come first, in environment registration
    /// order, each stamped with the environment's managed flag; persisted
    /// entries follow in insertion order. Names are unique in the result,
    /// first occurrence wins. When `include_local_wallet_first` is true the
    /// local-default wallet (if present) is forced to index 0; otherwise it
    /// is removed entirely.
    ///
    /// Exactly one entry is synthesized per environment that owns a wallet;
    /// identity counts do not change the cardinality. A generator failure
    /// rejects the whole call.
    pub async fn get_all(&self, include_local_wallet_first: bool) -> Result<Vec<WalletEntry>> {
        let mut merged: Vec<WalletEntry> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        // Synthesis is awaited per environment in registration order, so the
        // merge order is deterministic.
        for environment in self.environments.get_all().await? {
            let Some(entry) = self.synthesize(&environment).await? else {
                continue;
            };
            if seen.insert(entry.name.clone()) {
                merged.push(entry);
            }
        }

        for entry in self.wallets.get_all().await? {
            if seen.insert(entry.name.clone()) {
                merged.push(entry);
            }
        }

        if let Some(position) = merged.iter().position(|entry| entry.name == LOCAL_WALLET) {
            let local = merged.remove(position);
            if include_local_wallet_first {
                merged.insert(0, local);
            }
        }

        debug!("Aggregated {} wallet entries", merged.len());
        Ok(merged)
    }

    /// Resolve a wallet entry by name
    ///
    /// Without an environment scope this is a flat-store lookup. With one,
    /// the name is resolved against the merged view restricted to entries
    /// synthesized from that environment.
    pub async fn get(&self, name: &str, environment: Option<&str>) -> Result<WalletEntry> {
        let Some(environment) = environment else {
            return self.wallets.get(name).await;
        };

        self.get_all(true)
            .await?
            .into_iter()
            .find(|entry| {
                entry.name == name && entry.from_environment.as_deref() == Some(environment)
            })
            .ok_or_else(|| RegistryError::NotFoundInEnvironment {
                registry: WALLETS.to_string(),
                name: name.to_string(),
                environment: environment.to_string(),
            })
    }

    async fn synthesize(&self, environment: &EnvironmentEntry) -> Result<Option<WalletEntry>> {
        let Some(handle) = self.generator.get_wallet(environment).await? else {
            return Ok(None);
        };

        Ok(Some(WalletEntry {
            name: handle.name().to_string(),
            wallet_path: handle.path().to_path_buf(),
            display_name: None,
            managed_wallet: environment.managed_runtime,
            from_environment: Some(environment.name.clone()),
        }))
    }
}

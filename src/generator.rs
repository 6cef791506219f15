//! Wallet-materialization capability
//!
//! Environments own wallets whose material lives outside the registry; a
//! `WalletGenerator` materializes a handle to that wallet on demand. The
//! implementation is injected at construction time so tests can substitute
//! stubs.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::entry::EnvironmentEntry;
use crate::error::Result;

/// An identity stored inside a materialized wallet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Label the identity is stored under
    pub label: String,
    /// MSP the identity belongs to
    pub msp_id: String,
}

/// Handle to a materialized wallet
#[async_trait]
pub trait WalletHandle: Send + Sync {
    /// Wallet name as known to its owning environment
    fn name(&self) -> &str;

    /// Location of the wallet material on disk
    fn path(&self) -> &Path;

    /// Import an identity into the wallet
    async fn import_identity(
        &self,
        certificate: &str,
        private_key: &str,
        identity: Identity,
    ) -> Result<()>;

    /// List the identities stored in the wallet
    async fn get_identities(&self) -> Result<Vec<Identity>>;
}

/// Factory materializing the wallet owned by an environment
#[async_trait]
pub trait WalletGenerator: Send + Sync {
    /// Materialize the environment's wallet, or `None` if the environment
    /// owns no wallet
    async fn get_wallet(
        &self,
        environment: &EnvironmentEntry,
    ) -> Result<Option<Box<dyn WalletHandle>>>;
}

//! # wallet-registry
//!
//! Local registry of named wallet configurations merged with wallets derived
//! from registered environments:
//! - Flat JSON-file stores for wallet entries and environment descriptors
//! - Pluggable wallet-materialization capability per environment
//! - Aggregated view with canonical ordering and local-wallet handling

pub mod entry;
pub mod error;
pub mod generator;
pub mod registry;
pub mod storage;
pub mod view;

pub use entry::{
    EnvironmentEntry, EnvironmentType, RegistryEntry, WalletEntry, LOCAL_RUNTIME_DISPLAY_NAME,
    LOCAL_WALLET,
};
pub use error::{RegistryError, Result};
pub use generator::{Identity, WalletGenerator, WalletHandle};
pub use registry::{EnvironmentStore, Registry, WalletStore, ENVIRONMENTS, WALLETS};
pub use storage::{JsonFileStore, RecordStore};
pub use view::WalletViewAggregator;

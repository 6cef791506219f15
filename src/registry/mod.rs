//! Registries for persisted wallet and environment records
//!
//! Both stores share the generic `Registry` base; each binds a fixed store id
//! that identifies its record file and appears verbatim in error messages.

mod base;
mod environment;
mod wallet;

pub use base::Registry;
pub use environment::{EnvironmentStore, ENVIRONMENTS};
pub use wallet::{WalletStore, WALLETS};

//! Registry entry types
//!
//! `WalletEntry` is the persisted record for user-added wallets and the
//! synthesized record for environment-owned wallets. `EnvironmentEntry`
//! describes a registered runtime that may own wallets of its own.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Reserved name of the built-in local runtime's wallet, subject to special
/// ordering in the aggregated view.
pub const LOCAL_WALLET: &str = "local_wallet";

/// Display label for the built-in local runtime
pub const LOCAL_RUNTIME_DISPLAY_NAME: &str = "Local Runtime";

/// Trait for records persisted in a registry
///
/// `name` acts as the primary key within a single registry.
pub trait RegistryEntry: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Primary key within the registry
    fn name(&self) -> &str;
}

/// A named wallet configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletEntry {
    /// Unique name within the flat store
    pub name: String,

    /// Filesystem location of the wallet material (opaque to the registry)
    pub wallet_path: PathBuf,

    /// Optional human label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// True if the wallet is owned by a managed environment rather than
    /// user-created
    #[serde(default)]
    pub managed_wallet: bool,

    /// Name of the environment this entry was synthesized from, if any.
    /// Never set on user-added entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_environment: Option<String>,
}

impl WalletEntry {
    /// Create a user-added wallet entry
    pub fn new(name: impl Into<String>, wallet_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            wallet_path: wallet_path.into(),
            display_name: None,
            managed_wallet: false,
            from_environment: None,
        }
    }

    /// Set the display name
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }
}

impl RegistryEntry for WalletEntry {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Kind of a registered environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnvironmentType {
    /// Manually configured remote environment
    Environment,
    /// Environment created from an Ansible-generated topology
    AnsibleEnvironment,
    /// The built-in local runtime
    LocalEnvironment,
    /// Environment imported from an ops console
    OpsToolsEnvironment,
}

/// A registered environment descriptor (consumed read-only by the wallet view)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentEntry {
    /// Unique name within the environments store
    pub name: String,

    /// Kind of environment
    pub environment_type: EnvironmentType,

    /// True if the environment's runtime lifecycle is managed by this tool
    #[serde(default)]
    pub managed_runtime: bool,

    /// Directory holding the environment's configuration and artifacts
    pub environment_directory: PathBuf,
}

impl RegistryEntry for EnvironmentEntry {
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_entry_json_shape() {
        let entry = WalletEntry::new("walletOne", "myPath");
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["name"], "walletOne");
        assert_eq!(json["walletPath"], "myPath");
        assert_eq!(json["managedWallet"], false);
        // optional fields stay off disk when unset
        assert!(json.get("displayName").is_none());
        assert!(json.get("fromEnvironment").is_none());
    }

    #[test]
    fn test_environment_type_wire_format() {
        let json = serde_json::to_value(EnvironmentType::AnsibleEnvironment).unwrap();
        assert_eq!(json, "ANSIBLE_ENVIRONMENT");
    }
}

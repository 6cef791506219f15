//! Error types for wallet-registry

use thiserror::Error;

/// Result type alias for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Registry error types
///
/// Key lookups carry structured context (entry name, registry id, optional
/// environment scope); the human-readable message is only produced at the
/// `Display` boundary. The `NotFound` message texts are part of the observable
/// contract and asserted verbatim in tests.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Entry \"{name}\" in registry \"{registry}\" already exists")]
    DuplicateKey { registry: String, name: String },

    #[error("Entry \"{name}\" in registry \"{registry}\" does not exist")]
    NotFound { registry: String, name: String },

    #[error("Entry \"{name}\" from environment \"{environment}\" in registry \"{registry}\" does not exist")]
    NotFoundInEnvironment {
        registry: String,
        name: String,
        environment: String,
    },

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Wallet generation failed: {0}")]
    GeneratorError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

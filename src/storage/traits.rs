//! Storage trait definitions

use crate::error::Result;
use async_trait::async_trait;

/// Trait for record list persistence backends
///
/// A backend holds one flat record list per store id. Records are opaque
/// JSON values; typing is the registry's concern.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Read the full record list for a store id. A store that has never been
    /// written reads as empty.
    async fn read_all(&self, store_id: &str) -> Result<Vec<serde_json::Value>>;

    /// Replace the full record list for a store id
    async fn write_all(&self, store_id: &str, records: &[serde_json::Value]) -> Result<()>;

    /// Get a human-readable name for this storage backend
    fn backend_name(&self) -> &'static str;
}

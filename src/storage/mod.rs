//! Storage backends for registry persistence
//!
//! A registry persists its records through the `RecordStore` trait; the
//! default backend is a plain JSON file per store id.

mod json_file;
mod traits;

pub use json_file::JsonFileStore;
pub use traits::RecordStore;

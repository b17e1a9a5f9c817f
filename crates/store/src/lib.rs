//! Local key-value persistence.
//!
//! The application keeps exactly two records client-side: the entitlement
//! state blob and the locale preference string, each under a fixed key.
//! [`KeyValueStore`] is the seam that lets the backing store vary (file
//! directory, in-memory, or the unavailable no-op fallback) without
//! touching call sites; absence is an explicit `Option`, never an error.
//!
//! The store is single-writer-per-process with last-write-wins semantics.
//! Concurrent processes are not reconciled.

pub mod entitlement;
pub mod file;
pub mod locale;
pub mod memory;

pub use entitlement::EntitlementRepo;
pub use file::FileStore;
pub use locale::LocaleRepo;
pub use memory::{MemoryStore, NullStore};

/// Fixed key for the entitlement state JSON blob.
pub const ENTITLEMENT_STATE_KEY: &str = "entitlement_state";

/// Fixed key for the locale preference string.
pub const LOCALE_KEY: &str = "locale";

/// Errors raised by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage I/O failed for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode value for key '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience alias for store operation results.
pub type StoreResult<T> = Result<T, StoreError>;

/// A durable string-keyed, string-valued store.
///
/// `get` returns `Ok(None)` for a missing key; `clear` on a missing key is
/// a no-op. Writes are whole-value overwrites.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
    fn clear(&self, key: &str) -> StoreResult<()>;
}

//! Abstract storage for NewsGuard.
//!
//! Every backend (LMDB, in-memory for testing, a browser-style local store)
//! implements [`KeyValueStore`]. The rest of the codebase depends only on the
//! trait and on the typed helpers in [`collection`].

pub mod collection;
pub mod error;

pub use collection::{JsonCollection, JsonSlot, MAX_CAS_ATTEMPTS};
pub use error::StoreError;

/// Synchronous string-keyed storage of string blobs.
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Unconditionally write `value` under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Write `new` under `key` only if the current value equals `expected`
    /// (`None` meaning the key must be absent). Returns whether the write
    /// happened. The comparison and the write are atomic.
    fn compare_and_swap(
        &self,
        key: &str,
        expected: Option<&str>,
        new: &str,
    ) -> Result<bool, StoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }

    fn compare_and_swap(
        &self,
        key: &str,
        expected: Option<&str>,
        new: &str,
    ) -> Result<bool, StoreError> {
        (**self).compare_and_swap(key, expected, new)
    }
}

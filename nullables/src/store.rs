//! Nullable store: thread-safe in-memory key-value storage for testing.

use newsguard_store::{KeyValueStore, StoreError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// An in-memory [`KeyValueStore`] for testing.
///
/// Writes can be made to fail on demand, and every successful write is
/// counted, so tests can assert both error propagation and the absence of
/// partial writes.
#[derive(Default)]
pub struct NullKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
    fail_writes: AtomicBool,
    fail_sets: AtomicBool,
    writes: AtomicUsize,
}

impl NullKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write (set, remove, CAS) fail with a backend error.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Make plain `set` and `remove` fail while compare-and-swap keeps working.
    pub fn fail_sets(&self, fail: bool) {
        self.fail_sets.store(fail, Ordering::SeqCst);
    }

    /// Number of writes that have been applied.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Snapshot of the raw value under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.lock().ok()?.get(key).cloned()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StoreError> {
        self.entries
            .lock()
            .map_err(|_| StoreError::Backend("null store mutex poisoned".into()))
    }

    fn check_writable(&self) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("injected write failure".into()));
        }
        Ok(())
    }

    fn check_settable(&self) -> Result<(), StoreError> {
        self.check_writable()?;
        if self.fail_sets.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("injected set failure".into()));
        }
        Ok(())
    }
}

impl KeyValueStore for NullKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check_settable()?;
        self.lock()?.insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.check_settable()?;
        self.lock()?.remove(key);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn compare_and_swap(
        &self,
        key: &str,
        expected: Option<&str>,
        new: &str,
    ) -> Result<bool, StoreError> {
        self.check_writable()?;
        let mut entries = self.lock()?;
        if entries.get(key).map(String::as_str) != expected {
            return Ok(false);
        }
        entries.insert(key.to_string(), new.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let store = NullKeyValueStore::new();
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn remove_absent_key_is_ok() {
        let store = NullKeyValueStore::new();
        assert!(store.remove("missing").is_ok());
    }

    #[test]
    fn cas_requires_expected_value() {
        let store = NullKeyValueStore::new();
        assert!(store.compare_and_swap("k", None, "a").unwrap());
        assert!(!store.compare_and_swap("k", None, "b").unwrap());
        assert!(!store.compare_and_swap("k", Some("x"), "b").unwrap());
        assert!(store.compare_and_swap("k", Some("a"), "b").unwrap());
        assert_eq!(store.raw("k").as_deref(), Some("b"));
    }

    #[test]
    fn injected_failure_blocks_writes() {
        let store = NullKeyValueStore::new();
        store.set("k", "v").unwrap();
        store.fail_writes(true);
        assert!(matches!(store.set("k", "w"), Err(StoreError::Backend(_))));
        assert!(store.compare_and_swap("k", Some("v"), "w").is_err());
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn injected_set_failure_spares_cas() {
        let store = NullKeyValueStore::new();
        store.fail_sets(true);
        assert!(store.set("k", "v").is_err());
        assert!(store.remove("k").is_err());
        assert!(store.compare_and_swap("k", None, "v").unwrap());
        assert_eq!(store.raw("k").as_deref(), Some("v"));
    }
}

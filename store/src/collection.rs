//! Typed JSON values over a [`KeyValueStore`].
//!
//! A [`JsonSlot`] holds at most one value under a key. A [`JsonCollection`]
//! holds an ordered JSON array under a key; appends are read-modify-write
//! guarded by compare-and-swap so concurrent writers never lose an update.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{KeyValueStore, StoreError};

/// Attempts an append makes before giving up with [`StoreError::Conflict`].
pub const MAX_CAS_ATTEMPTS: usize = 8;

fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Result<T, StoreError> {
    serde_json::from_str(raw).map_err(|e| StoreError::Serialization(format!("{key}: {e}")))
}

fn encode<T: Serialize + ?Sized>(key: &str, value: &T) -> Result<String, StoreError> {
    serde_json::to_string(value).map_err(|e| StoreError::Serialization(format!("{key}: {e}")))
}

/// A single optional JSON value stored under one key.
pub struct JsonSlot<T> {
    key: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Serialize + DeserializeOwned> JsonSlot<T> {
    pub const fn new(key: &'static str) -> Self {
        Self {
            key,
            _marker: PhantomData,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Read the slot. An absent key reads as `None`.
    pub fn load<S: KeyValueStore + ?Sized>(&self, kv: &S) -> Result<Option<T>, StoreError> {
        kv.get(self.key)?
            .map(|raw| decode(self.key, &raw))
            .transpose()
    }

    pub fn store<S: KeyValueStore + ?Sized>(&self, kv: &S, value: &T) -> Result<(), StoreError> {
        kv.set(self.key, &encode(self.key, value)?)
    }

    pub fn clear<S: KeyValueStore + ?Sized>(&self, kv: &S) -> Result<(), StoreError> {
        kv.remove(self.key)
    }
}

/// An ordered JSON array stored under one key.
pub struct JsonCollection<T> {
    key: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Serialize + DeserializeOwned + Clone> JsonCollection<T> {
    pub const fn new(key: &'static str) -> Self {
        Self {
            key,
            _marker: PhantomData,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Read every item in insertion order. An absent key reads as empty.
    pub fn load<S: KeyValueStore + ?Sized>(&self, kv: &S) -> Result<Vec<T>, StoreError> {
        match kv.get(self.key)? {
            Some(raw) => decode(self.key, &raw),
            None => Ok(Vec::new()),
        }
    }

    /// Append one item built from the current contents.
    ///
    /// `build` sees the items as they are at the start of each attempt and
    /// either returns the item to append or rejects the append. It is called
    /// again if another writer changed the collection in between. Nothing is
    /// written when `build` fails.
    pub fn append_with<S, E, F>(&self, kv: &S, mut build: F) -> Result<T, E>
    where
        S: KeyValueStore + ?Sized,
        E: From<StoreError>,
        F: FnMut(&[T]) -> Result<T, E>,
    {
        for attempt in 1..=MAX_CAS_ATTEMPTS {
            let raw = kv.get(self.key)?;
            let mut items: Vec<T> = match raw.as_deref() {
                Some(r) => decode(self.key, r)?,
                None => Vec::new(),
            };
            let item = build(&items)?;
            items.push(item.clone());
            let encoded = encode(self.key, &items)?;
            if kv.compare_and_swap(self.key, raw.as_deref(), &encoded)? {
                return Ok(item);
            }
            tracing::warn!(key = self.key, attempt, "collection changed during append, retrying");
        }
        Err(StoreError::Conflict(self.key.to_string()).into())
    }

    /// Append one item unconditionally.
    pub fn append<S: KeyValueStore + ?Sized>(&self, kv: &S, item: T) -> Result<T, StoreError> {
        self.append_with(kv, |_| Ok::<_, StoreError>(item.clone()))
    }

    /// Remove the first item matching `pred`, returning it.
    ///
    /// Returns `None` without writing when nothing matches. Items appended by
    /// other writers in the meantime are kept.
    pub fn remove_first<S, F>(&self, kv: &S, mut pred: F) -> Result<Option<T>, StoreError>
    where
        S: KeyValueStore + ?Sized,
        F: FnMut(&T) -> bool,
    {
        for attempt in 1..=MAX_CAS_ATTEMPTS {
            let Some(raw) = kv.get(self.key)? else {
                return Ok(None);
            };
            let mut items: Vec<T> = decode(self.key, &raw)?;
            let Some(pos) = items.iter().position(&mut pred) else {
                return Ok(None);
            };
            let removed = items.remove(pos);
            let encoded = encode(self.key, &items)?;
            if kv.compare_and_swap(self.key, Some(raw.as_str()), &encoded)? {
                return Ok(Some(removed));
            }
            tracing::warn!(key = self.key, attempt, "collection changed during removal, retrying");
        }
        Err(StoreError::Conflict(self.key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MapStore {
        map: Mutex<HashMap<String, String>>,
        /// Number of upcoming CAS calls that should report a lost race.
        lose_races: Mutex<usize>,
    }

    impl KeyValueStore for MapStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            Ok(self.map.lock().unwrap().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            self.map.lock().unwrap().insert(key.into(), value.into());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<(), StoreError> {
            self.map.lock().unwrap().remove(key);
            Ok(())
        }

        fn compare_and_swap(
            &self,
            key: &str,
            expected: Option<&str>,
            new: &str,
        ) -> Result<bool, StoreError> {
            let mut lose = self.lose_races.lock().unwrap();
            if *lose > 0 {
                *lose -= 1;
                return Ok(false);
            }
            let mut map = self.map.lock().unwrap();
            if map.get(key).map(String::as_str) != expected {
                return Ok(false);
            }
            map.insert(key.into(), new.into());
            Ok(true)
        }
    }

    const NUMBERS: JsonCollection<u32> = JsonCollection::new("numbers");
    const NAME: JsonSlot<String> = JsonSlot::new("name");

    #[test]
    fn missing_collection_is_empty() {
        let kv = MapStore::default();
        assert!(NUMBERS.load(&kv).unwrap().is_empty());
    }

    #[test]
    fn append_preserves_order() {
        let kv = MapStore::default();
        for n in [3, 1, 2] {
            NUMBERS.append(&kv, n).unwrap();
        }
        assert_eq!(NUMBERS.load(&kv).unwrap(), vec![3, 1, 2]);
    }

    #[test]
    fn rejected_build_writes_nothing() {
        let kv = MapStore::default();
        NUMBERS.append(&kv, 1).unwrap();
        let result: Result<u32, StoreError> = NUMBERS.append_with(&kv, |items| {
            if items.contains(&1) {
                Err(StoreError::Backend("duplicate".into()))
            } else {
                Ok(1)
            }
        });
        assert!(result.is_err());
        assert_eq!(NUMBERS.load(&kv).unwrap(), vec![1]);
    }

    #[test]
    fn lost_race_is_retried_with_fresh_contents() {
        let kv = MapStore::default();
        *kv.lose_races.lock().unwrap() = 2;
        let calls = Cell::new(0);
        NUMBERS
            .append_with(&kv, |_| {
                calls.set(calls.get() + 1);
                Ok::<_, StoreError>(9)
            })
            .unwrap();
        assert_eq!(calls.get(), 3);
        assert_eq!(NUMBERS.load(&kv).unwrap(), vec![9]);
    }

    #[test]
    fn exhausted_retries_report_conflict() {
        let kv = MapStore::default();
        *kv.lose_races.lock().unwrap() = MAX_CAS_ATTEMPTS;
        let err = NUMBERS.append(&kv, 1).unwrap_err();
        assert!(matches!(err, StoreError::Conflict(ref k) if k == "numbers"));
        assert!(NUMBERS.load(&kv).unwrap().is_empty());
    }

    #[test]
    fn remove_first_takes_one_match() {
        let kv = MapStore::default();
        for n in [4, 7, 4] {
            NUMBERS.append(&kv, n).unwrap();
        }
        assert_eq!(NUMBERS.remove_first(&kv, |n| *n == 4).unwrap(), Some(4));
        assert_eq!(NUMBERS.load(&kv).unwrap(), vec![7, 4]);
    }

    #[test]
    fn remove_first_without_match_writes_nothing() {
        let kv = MapStore::default();
        assert_eq!(NUMBERS.remove_first(&kv, |_| true).unwrap(), None);
        assert_eq!(kv.get("numbers").unwrap(), None);
        NUMBERS.append(&kv, 1).unwrap();
        *kv.lose_races.lock().unwrap() = MAX_CAS_ATTEMPTS;
        assert_eq!(NUMBERS.remove_first(&kv, |n| *n == 2).unwrap(), None);
    }

    #[test]
    fn remove_first_retries_lost_race() {
        let kv = MapStore::default();
        NUMBERS.append(&kv, 5).unwrap();
        *kv.lose_races.lock().unwrap() = 1;
        assert_eq!(NUMBERS.remove_first(&kv, |n| *n == 5).unwrap(), Some(5));
        assert!(NUMBERS.load(&kv).unwrap().is_empty());
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let kv = MapStore::default();
        kv.set("numbers", "{not json").unwrap();
        assert!(matches!(NUMBERS.load(&kv), Err(StoreError::Serialization(_))));
    }

    #[test]
    fn slot_store_load_clear() {
        let kv = MapStore::default();
        assert_eq!(NAME.load(&kv).unwrap(), None);
        NAME.store(&kv, &"ada".to_string()).unwrap();
        assert_eq!(NAME.load(&kv).unwrap().as_deref(), Some("ada"));
        NAME.clear(&kv).unwrap();
        assert_eq!(NAME.load(&kv).unwrap(), None);
    }
}

//! LMDB implementation of KeyValueStore.

use heed::types::Str;
use heed::{Database, Env};

use newsguard_store::{KeyValueStore, StoreError};

use crate::LmdbError;

/// Durable key-value store. Cheap to clone; clones share one environment.
#[derive(Clone)]
pub struct LmdbKeyValueStore {
    pub(crate) env: Env,
    pub(crate) db: Database<Str, Str>,
}

impl KeyValueStore for LmdbKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let rtxn = self.env.read_txn().map_err(LmdbError::from)?;
        let value = self
            .db
            .get(&rtxn, key)
            .map_err(LmdbError::from)?
            .map(str::to_string);
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut wtxn = self.env.write_txn().map_err(LmdbError::from)?;
        self.db
            .put(&mut wtxn, key, value)
            .map_err(LmdbError::from)?;
        wtxn.commit().map_err(LmdbError::from)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut wtxn = self.env.write_txn().map_err(LmdbError::from)?;
        self.db.delete(&mut wtxn, key).map_err(LmdbError::from)?;
        wtxn.commit().map_err(LmdbError::from)?;
        Ok(())
    }

    fn compare_and_swap(
        &self,
        key: &str,
        expected: Option<&str>,
        new: &str,
    ) -> Result<bool, StoreError> {
        // LMDB allows one write transaction at a time, so reading inside it
        // makes the check and the write atomic.
        let mut wtxn = self.env.write_txn().map_err(LmdbError::from)?;
        let matches = {
            let current = self.db.get(&wtxn, key).map_err(LmdbError::from)?;
            current == expected
        };
        if !matches {
            wtxn.abort();
            return Ok(false);
        }
        self.db.put(&mut wtxn, key, new).map_err(LmdbError::from)?;
        wtxn.commit().map_err(LmdbError::from)?;
        Ok(true)
    }
}

//! LMDB environment setup.

use std::path::{Path, PathBuf};

use heed::types::Str;
use heed::{Database, Env, EnvOpenOptions};

use crate::kv::LmdbKeyValueStore;
use crate::LmdbError;

/// Name of the database holding every key-value pair.
const KV_DB_NAME: &str = "kv";
const MAX_DBS: u32 = 4;

/// Wraps the LMDB environment and its database handle.
pub struct LmdbEnvironment {
    env: Env,
    kv_db: Database<Str, Str>,
    path: PathBuf,
}

impl LmdbEnvironment {
    /// Open or create an LMDB environment in the directory `path`.
    pub fn open(path: &Path, map_size: usize) -> Result<Self, LmdbError> {
        std::fs::create_dir_all(path)?;

        // SAFETY: the environment is opened at most once per directory by this
        // process, and the memory map is never modified outside of heed.
        let env = unsafe {
            EnvOpenOptions::new()
                .map_size(map_size)
                .max_dbs(MAX_DBS)
                .open(path)?
        };

        let mut wtxn = env.write_txn()?;
        let kv_db: Database<Str, Str> = env.create_database(&mut wtxn, Some(KV_DB_NAME))?;
        wtxn.commit()?;

        tracing::info!(path = %path.display(), map_size, "opened LMDB environment");

        Ok(Self {
            env,
            kv_db,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A key-value store handle sharing this environment.
    pub fn kv_store(&self) -> LmdbKeyValueStore {
        LmdbKeyValueStore {
            env: self.env.clone(),
            db: self.kv_db,
        }
    }
}

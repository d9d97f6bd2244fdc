//! LMDB storage backend for NewsGuard.
//!
//! Implements [`newsguard_store::KeyValueStore`] using the `heed` LMDB
//! bindings. All keys live in one named database within a single environment.

pub mod environment;
pub mod error;
pub mod kv;

pub use environment::LmdbEnvironment;
pub use error::LmdbError;
pub use kv::LmdbKeyValueStore;

//! Accounts and the current session.
//!
//! [`AccountStore`] owns two persisted values: the `accounts` collection
//! (every registered account with its Argon2id credential hash) and the
//! `session` slot (the public view of whoever is logged in). Nothing else
//! writes to either key.

pub mod error;
pub mod password;
pub mod store;

pub use error::AccountError;
pub use password::{CredentialHasher, HashingParams};
pub use store::{normalize_email, AccountStore, StoredAccount, ACCOUNTS_KEY, SESSION_KEY};

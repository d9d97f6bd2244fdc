//! The account registry and session slot.

use newsguard_store::{JsonCollection, JsonSlot, KeyValueStore, StoreError};
use newsguard_types::{Account, AccountId};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::{AccountError, CredentialHasher};

pub const ACCOUNTS_KEY: &str = "accounts";
pub const SESSION_KEY: &str = "session";

const ACCOUNTS: JsonCollection<StoredAccount> = JsonCollection::new(ACCOUNTS_KEY);
const SESSION: JsonSlot<Account> = JsonSlot::new(SESSION_KEY);

/// An account as persisted, including its credential hash.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredAccount {
    pub id: AccountId,
    /// Lowercased and trimmed.
    pub email: String,
    pub name: String,
    /// Argon2id PHC string.
    pub password_hash: String,
}

impl StoredAccount {
    pub fn public_view(&self) -> Account {
        Account {
            id: self.id.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}

/// Canonical form of an email address for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Registered accounts plus the currently logged-in one.
pub struct AccountStore<S> {
    kv: S,
    hasher: CredentialHasher,
    rng: Box<dyn RngCore + Send>,
    session: Option<Account>,
}

impl<S: KeyValueStore> AccountStore<S> {
    /// Open the store and restore any persisted session.
    ///
    /// A session value that cannot be decoded is logged and ignored.
    pub fn open(
        kv: S,
        hasher: CredentialHasher,
        rng: Box<dyn RngCore + Send>,
    ) -> Result<Self, AccountError> {
        let session = match SESSION.load(&kv) {
            Ok(session) => session,
            Err(StoreError::Serialization(e)) => {
                tracing::warn!(error = %e, "ignoring unreadable session");
                None
            }
            Err(e) => return Err(e.into()),
        };
        if let Some(account) = &session {
            tracing::debug!(account = %account.id, "restored session");
        }
        Ok(Self {
            kv,
            hasher,
            rng,
            session,
        })
    }

    /// Open with an OS-seeded random source.
    pub fn with_entropy(kv: S, hasher: CredentialHasher) -> Result<Self, AccountError> {
        Self::open(kv, hasher, Box::new(StdRng::from_entropy()))
    }

    /// Create an account and log it in.
    pub fn register(
        &mut self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<Account, AccountError> {
        let email = normalize_email(email);

        // Cheap check before paying for the hash; repeated under CAS below.
        if ACCOUNTS.load(&self.kv)?.iter().any(|a| a.email == email) {
            return Err(AccountError::DuplicateEmail(email));
        }

        let password_hash = self.hasher.hash(password, self.rng.as_mut())?;
        let rng = &mut self.rng;
        let stored = ACCOUNTS.append_with(&self.kv, |existing| {
            if existing.iter().any(|a| a.email == email) {
                return Err(AccountError::DuplicateEmail(email.clone()));
            }
            Ok(StoredAccount {
                id: AccountId::generate(rng.as_mut()),
                email: email.clone(),
                name: name.trim().to_string(),
                password_hash: password_hash.clone(),
            })
        })?;

        let account = stored.public_view();
        if let Err(e) = self.start_session(account.clone()) {
            self.undo_register(&stored);
            return Err(e);
        }
        tracing::info!(account = %account.id, "registered account");
        Ok(account)
    }

    /// Check credentials and log the account in.
    pub fn login(&mut self, email: &str, password: &str) -> Result<Account, AccountError> {
        let email = normalize_email(email);
        let stored = ACCOUNTS
            .load(&self.kv)?
            .into_iter()
            .find(|a| a.email == email)
            .ok_or(AccountError::InvalidCredentials)?;

        if !self.hasher.verify(password, &stored.password_hash)? {
            tracing::info!(account = %stored.id, "rejected login");
            return Err(AccountError::InvalidCredentials);
        }

        let account = stored.public_view();
        tracing::info!(account = %account.id, "logged in");
        self.start_session(account.clone())?;
        Ok(account)
    }

    /// End the session. Logging out with no session is a no-op.
    ///
    /// The in-memory session is cleared even if removing the persisted slot fails.
    pub fn logout(&mut self) -> Result<(), AccountError> {
        if let Some(account) = self.session.take() {
            tracing::info!(account = %account.id, "logged out");
        }
        SESSION.clear(&self.kv)?;
        Ok(())
    }

    /// The logged-in account, if any.
    pub fn current_account(&self) -> Option<&Account> {
        self.session.as_ref()
    }

    /// Every registered account, public view only, in registration order.
    pub fn accounts(&self) -> Result<Vec<Account>, AccountError> {
        Ok(ACCOUNTS
            .load(&self.kv)?
            .iter()
            .map(StoredAccount::public_view)
            .collect())
    }

    /// Take back an account whose session could not be started.
    fn undo_register(&self, stored: &StoredAccount) {
        match ACCOUNTS.remove_first(&self.kv, |a| a.id == stored.id) {
            Ok(_) => tracing::warn!(account = %stored.id, "rolled back registration"),
            Err(e) => {
                tracing::error!(account = %stored.id, error = %e, "failed to roll back registration")
            }
        }
    }

    fn start_session(&mut self, account: Account) -> Result<(), AccountError> {
        SESSION.store(&self.kv, &account)?;
        self.session = Some(account);
        Ok(())
    }
}

//! The service facade.

use newsguard_accounts::{AccountStore, CredentialHasher};
use newsguard_store::{KeyValueStore, StoreError};
use newsguard_store_lmdb::{LmdbEnvironment, LmdbKeyValueStore};
use newsguard_types::{validate_submission, Account, AccountId, VerificationId, VerificationRecord};
use newsguard_verification::VerificationStore;

use crate::{ServiceConfig, ServiceError};

/// Accounts, session and verifications over one backend.
pub struct NewsGuard<S> {
    accounts: AccountStore<S>,
    verifications: VerificationStore<S>,
    min_text_len: usize,
}

impl NewsGuard<LmdbKeyValueStore> {
    /// Open (or create) the LMDB store in `config.data_dir`.
    pub fn open(config: &ServiceConfig) -> Result<Self, ServiceError> {
        let env = LmdbEnvironment::open(&config.data_dir, config.map_size_bytes())
            .map_err(StoreError::from)?;
        let guard = Self::with_store(env.kv_store(), config)?;
        tracing::info!(
            data_dir = %config.data_dir.display(),
            logged_in = guard.current_account().is_some(),
            "opened NewsGuard store"
        );
        Ok(guard)
    }
}

impl<S: KeyValueStore + Clone> NewsGuard<S> {
    /// Build over `kv` with OS entropy and the system clock.
    pub fn with_store(kv: S, config: &ServiceConfig) -> Result<Self, ServiceError> {
        let hasher = CredentialHasher::new(&config.password_hashing)?;
        let accounts = AccountStore::with_entropy(kv.clone(), hasher)?;
        let verifications = VerificationStore::new(kv);
        Ok(Self::from_parts(accounts, verifications, config.min_text_len))
    }
}

impl<S: KeyValueStore> NewsGuard<S> {
    /// Assemble from already-configured stores (e.g. with test clocks).
    pub fn from_parts(
        accounts: AccountStore<S>,
        verifications: VerificationStore<S>,
        min_text_len: usize,
    ) -> Self {
        Self {
            accounts,
            verifications,
            min_text_len,
        }
    }

    pub fn register(
        &mut self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<Account, ServiceError> {
        Ok(self.accounts.register(email, password, name)?)
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<Account, ServiceError> {
        Ok(self.accounts.login(email, password)?)
    }

    pub fn logout(&mut self) -> Result<(), ServiceError> {
        Ok(self.accounts.logout()?)
    }

    pub fn current_account(&self) -> Option<&Account> {
        self.accounts.current_account()
    }

    /// Classify and persist for `account_id`, without validating input.
    pub fn create_verification(
        &mut self,
        account_id: &AccountId,
        text: &str,
        url: Option<&str>,
    ) -> Result<VerificationRecord, ServiceError> {
        Ok(self.verifications.create(account_id, text, url)?)
    }

    pub fn get_verification(
        &self,
        id: &VerificationId,
    ) -> Result<Option<VerificationRecord>, ServiceError> {
        Ok(self.verifications.get_by_id(id)?)
    }

    /// The account's verifications, most recent first.
    pub fn list_verifications(
        &self,
        account_id: &AccountId,
    ) -> Result<Vec<VerificationRecord>, ServiceError> {
        Ok(self.verifications.list_for_account(account_id)?)
    }

    /// Validate a submission and verify it for the logged-in account.
    pub fn submit(
        &mut self,
        text: &str,
        url: Option<&str>,
    ) -> Result<VerificationRecord, ServiceError> {
        let account_id = self
            .accounts
            .current_account()
            .map(|a| a.id.clone())
            .ok_or(ServiceError::NotAuthenticated)?;
        let submission = validate_submission(text, url, self.min_text_len)?;
        self.create_verification(&account_id, &submission.text, submission.url.as_deref())
    }

    /// The logged-in account's verifications, most recent first.
    pub fn history(&self) -> Result<Vec<VerificationRecord>, ServiceError> {
        let account = self
            .accounts
            .current_account()
            .ok_or(ServiceError::NotAuthenticated)?;
        self.list_verifications(&account.id)
    }
}

use newsguard_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("an account with email {0} already exists")]
    DuplicateEmail(String),

    /// Unknown email or wrong password. The two are deliberately indistinguishable.
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("credential hashing error: {0}")]
    Credential(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

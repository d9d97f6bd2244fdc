use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("account error: {0}")]
    Account(#[from] newsguard_accounts::AccountError),

    #[error("verification error: {0}")]
    Verification(#[from] newsguard_verification::VerificationError),

    #[error("invalid submission: {0}")]
    Validation(#[from] newsguard_types::ValidationError),

    #[error("store error: {0}")]
    Store(#[from] newsguard_store::StoreError),

    #[error("not logged in")]
    NotAuthenticated,

    #[error("config error: {0}")]
    Config(String),
}

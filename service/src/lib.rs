//! The NewsGuard service.
//!
//! [`NewsGuard`] wires an [`AccountStore`](newsguard_accounts::AccountStore)
//! and a [`VerificationStore`](newsguard_verification::VerificationStore)
//! over one shared key-value backend and exposes the public operations a
//! presentation layer calls. [`ServiceConfig`] carries the settings, loaded
//! from TOML.

pub mod config;
pub mod error;
pub mod service;

pub use config::ServiceConfig;
pub use error::ServiceError;
pub use service::NewsGuard;

//! News verification records.
//!
//! [`VerificationStore`] is the only writer of the `verifications`
//! collection. Creating a verification runs the injected classifier, stamps
//! the record with a fresh id and the injected clock's time, and appends it.
//! Records are immutable afterwards and can be fetched by id or listed per
//! account, newest first.

pub mod error;
pub mod store;

pub use error::VerificationError;
pub use store::{VerificationStore, VERIFICATIONS_KEY};

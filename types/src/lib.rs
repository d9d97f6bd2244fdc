//! Fundamental types for NewsGuard.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! identifiers, timestamps and clocks, verdicts, the public account view, the
//! persisted verification record, and submission validation.

pub mod account;
pub mod id;
pub mod record;
pub mod time;
pub mod validation;
pub mod verdict;

pub use account::Account;
pub use id::{AccountId, VerificationId};
pub use record::VerificationRecord;
pub use time::{Clock, SystemClock, Timestamp};
pub use validation::{validate_submission, Submission, ValidationError};
pub use verdict::Verdict;

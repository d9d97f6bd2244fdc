//! Public view of a registered account.

use crate::AccountId;
use serde::{Deserialize, Serialize};

/// An account as seen by callers. Never carries credential material.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub email: String,
    pub name: String,
}

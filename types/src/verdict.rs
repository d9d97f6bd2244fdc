//! The classifier's categorical output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Authenticity verdict for a piece of news text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Real-news indicators outweigh fake-news indicators by at least two.
    Real,
    /// Fake-news indicators outweigh real-news indicators by at least two.
    Fake,
    /// Scores are within one of each other.
    Uncertain,
}

impl Verdict {
    pub const ALL: [Verdict; 3] = [Verdict::Real, Verdict::Fake, Verdict::Uncertain];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Real => "real",
            Self::Fake => "fake",
            Self::Uncertain => "uncertain",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

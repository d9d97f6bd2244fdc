//! News classification.
//!
//! Given raw text, a [`Classifier`] produces a [`Verdict`] and a confidence
//! score, then picks an explanation for that verdict. The storage and session
//! layers only see the trait, so the keyword heuristic in [`KeywordClassifier`]
//! can be replaced by a real model without touching them.
//!
//! The decision is deterministic. Only the confidence (sampled inside a
//! verdict-dependent range) and the explanation (sampled from a fixed pool)
//! use randomness, which callers inject.

pub mod engine;
pub mod explanation;
pub mod indicators;

pub use engine::{confidence_range, Analysis, Classifier, KeywordClassifier};
pub use explanation::explanations_for;
pub use indicators::{FAKE_INDICATORS, REAL_INDICATORS};

pub use newsguard_types::Verdict;

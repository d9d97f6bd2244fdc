//! Indicator phrases. These affect output and must stay verbatim.

/// Phrases typical of fabricated or sensationalist stories.
pub const FAKE_INDICATORS: [&str; 9] = [
    "shocking truth",
    "they don't want you to know",
    "conspiracy",
    "miracle cure",
    "secret",
    "shocking",
    "you won't believe",
    "doctors hate",
    "one weird trick",
];

/// Phrases typical of sourced reporting.
pub const REAL_INDICATORS: [&str; 8] = [
    "according to research",
    "studies show",
    "experts say",
    "official statement",
    "confirmed by",
    "evidence suggests",
    "data indicates",
    "analysis shows",
];

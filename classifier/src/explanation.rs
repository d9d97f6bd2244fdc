//! Canned explanations, four per verdict.

use newsguard_types::Verdict;

const REAL_EXPLANATIONS: [&str; 4] = [
    "The information has been confirmed by multiple credible sources.",
    "Facts and figures in this news have been verified by official records.",
    "This story contains accurate citations and references to primary sources.",
    "The claims made are consistent with expert consensus in the field.",
];

const FAKE_EXPLANATIONS: [&str; 4] = [
    "This contains claims that contradict well-established facts.",
    "The source has a history of publishing misleading information.",
    "Key details in this story cannot be verified by any credible sources.",
    "The article contains logical inconsistencies and factual errors.",
];

const UNCERTAIN_EXPLANATIONS: [&str; 4] = [
    "Some parts of this news can be verified, but others remain questionable.",
    "The information is too recent to be fully verified at this time.",
    "The claims made are plausible but lack sufficient evidence for confirmation.",
    "The source mixes factual reporting with opinion in ways that make verification difficult.",
];

/// The explanation pool for a verdict.
pub fn explanations_for(verdict: Verdict) -> &'static [&'static str] {
    match verdict {
        Verdict::Real => &REAL_EXPLANATIONS,
        Verdict::Fake => &FAKE_EXPLANATIONS,
        Verdict::Uncertain => &UNCERTAIN_EXPLANATIONS,
    }
}

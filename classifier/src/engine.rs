//! The classification engine.

use std::ops::Range;

use newsguard_types::Verdict;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::explanation::explanations_for;
use crate::indicators::{FAKE_INDICATORS, REAL_INDICATORS};

/// Output of one analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct Analysis {
    pub verdict: Verdict,
    /// Sampled from [`confidence_range`] of `verdict`.
    pub confidence: f64,
    /// Number of distinct fake indicators found.
    pub fake_score: usize,
    /// Number of distinct real indicators found.
    pub real_score: usize,
}

/// Confidence range for a verdict, half-open.
///
/// Uncertain verdicts land in `[40, 70)`; real and fake in `[70, 90)`.
pub fn confidence_range(verdict: Verdict) -> Range<f64> {
    match verdict {
        Verdict::Uncertain => 40.0..70.0,
        Verdict::Real | Verdict::Fake => 70.0..90.0,
    }
}

/// A pluggable news classifier.
pub trait Classifier: Send + Sync {
    /// Classify `text`. Never fails; empty text is a valid input.
    fn analyze(&self, text: &str, rng: &mut dyn RngCore) -> Analysis;

    /// Pick a human-readable explanation for `verdict`.
    fn explain(&self, verdict: Verdict, rng: &mut dyn RngCore) -> String {
        explanations_for(verdict)
            .choose(rng)
            .copied()
            .unwrap_or_default()
            .to_string()
    }
}

/// Keyword-scoring heuristic.
///
/// Each indicator phrase found anywhere in the lowercased text scores one
/// point for its side, however often it occurs. Phrases may overlap, so
/// "shocking truth" also scores "shocking".
pub struct KeywordClassifier {
    fake: Vec<String>,
    real: Vec<String>,
}

impl KeywordClassifier {
    pub fn new() -> Self {
        Self::with_indicators(&FAKE_INDICATORS, &REAL_INDICATORS)
    }

    /// Build with custom phrase lists. Phrases are matched case-insensitively.
    pub fn with_indicators(fake: &[&str], real: &[&str]) -> Self {
        Self {
            fake: fake.iter().map(|p| p.to_lowercase()).collect(),
            real: real.iter().map(|p| p.to_lowercase()).collect(),
        }
    }

    /// Count fake and real indicator hits in `text`.
    pub fn score(&self, text: &str) -> (usize, usize) {
        let lower = text.to_lowercase();
        let hits = |phrases: &[String]| {
            phrases
                .iter()
                .filter(|p| lower.contains(p.as_str()))
                .count()
        };
        (hits(self.fake.as_slice()), hits(self.real.as_slice()))
    }

    /// Decide the verdict from the two scores.
    ///
    /// Scores within one of each other are uncertain; otherwise the larger
    /// side wins.
    pub fn decide(fake_score: usize, real_score: usize) -> Verdict {
        if fake_score.abs_diff(real_score) <= 1 {
            Verdict::Uncertain
        } else if real_score > fake_score {
            Verdict::Real
        } else {
            Verdict::Fake
        }
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for KeywordClassifier {
    fn analyze(&self, text: &str, rng: &mut dyn RngCore) -> Analysis {
        let (fake_score, real_score) = self.score(text);
        let verdict = Self::decide(fake_score, real_score);
        let confidence = rng.gen_range(confidence_range(verdict));
        tracing::debug!(fake_score, real_score, %verdict, confidence, "scored news text");
        Analysis {
            verdict,
            confidence,
            fake_score,
            real_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsguard_nullables::NullRandom;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn analyze(text: &str) -> Analysis {
        KeywordClassifier::new().analyze(text, &mut StdRng::seed_from_u64(3))
    }

    #[test]
    fn sourced_text_is_real() {
        let a = analyze("Experts say studies show this is true, confirmed by data");
        assert_eq!(a.verdict, Verdict::Real);
        assert_eq!((a.fake_score, a.real_score), (0, 3));
        assert!(confidence_range(Verdict::Real).contains(&a.confidence));
    }

    #[test]
    fn sensational_text_is_fake() {
        let a = analyze("The shocking truth they don't want you to know: a secret miracle cure");
        assert_eq!(a.verdict, Verdict::Fake);
        // "shocking truth" and "shocking" both count.
        assert_eq!(a.fake_score, 5);
        assert_eq!(a.real_score, 0);
        assert!(confidence_range(Verdict::Fake).contains(&a.confidence));
    }

    #[test]
    fn empty_text_is_uncertain() {
        let a = analyze("");
        assert_eq!(a.verdict, Verdict::Uncertain);
        assert_eq!((a.fake_score, a.real_score), (0, 0));
        assert!(confidence_range(Verdict::Uncertain).contains(&a.confidence));
    }

    #[test]
    fn whitespace_text_is_uncertain() {
        assert_eq!(analyze("   \n\t ").verdict, Verdict::Uncertain);
    }

    #[test]
    fn matching_ignores_case() {
        let a = analyze("EXPERTS SAY the Official Statement was CONFIRMED BY police");
        assert_eq!(a.real_score, 3);
        assert_eq!(a.verdict, Verdict::Real);
    }

    #[test]
    fn repeated_phrase_counts_once() {
        let (fake, _) = KeywordClassifier::new().score("conspiracy conspiracy conspiracy");
        assert_eq!(fake, 1);
    }

    #[test]
    fn difference_of_one_is_uncertain() {
        assert_eq!(KeywordClassifier::decide(0, 1), Verdict::Uncertain);
        assert_eq!(KeywordClassifier::decide(3, 2), Verdict::Uncertain);
        assert_eq!(KeywordClassifier::decide(2, 2), Verdict::Uncertain);
    }

    #[test]
    fn difference_of_two_decides() {
        assert_eq!(KeywordClassifier::decide(0, 2), Verdict::Real);
        assert_eq!(KeywordClassifier::decide(4, 2), Verdict::Fake);
    }

    #[test]
    fn lowest_draw_hits_range_floor() {
        let classifier = KeywordClassifier::new();
        let a = classifier.analyze("nothing to see", &mut NullRandom::low());
        assert_eq!(a.confidence, 40.0);
        let a = classifier.analyze("studies show experts say", &mut NullRandom::low());
        assert_eq!(a.confidence, 70.0);
    }

    #[test]
    fn explanation_comes_from_verdict_pool() {
        let classifier = KeywordClassifier::new();
        let mut rng = StdRng::seed_from_u64(11);
        for verdict in Verdict::ALL {
            for _ in 0..20 {
                let line = classifier.explain(verdict, &mut rng);
                assert!(explanations_for(verdict).contains(&line.as_str()));
            }
        }
    }

    #[test]
    fn lowest_draw_picks_first_explanation() {
        let line = KeywordClassifier::new().explain(Verdict::Fake, &mut NullRandom::low());
        assert_eq!(line, explanations_for(Verdict::Fake)[0]);
    }

    #[test]
    fn custom_indicators_are_case_insensitive() {
        let classifier = KeywordClassifier::with_indicators(&["HOAX", "Fabricated"], &["peer reviewed"]);
        let (fake, real) = classifier.score("A fabricated hoax");
        assert_eq!((fake, real), (2, 0));
    }
}

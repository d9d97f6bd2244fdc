//! Create, fetch and list verification records.

use newsguard_classifier::{Classifier, KeywordClassifier};
use newsguard_store::{JsonCollection, KeyValueStore};
use newsguard_types::{AccountId, Clock, SystemClock, VerificationId, VerificationRecord};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::VerificationError;

pub const VERIFICATIONS_KEY: &str = "verifications";

const VERIFICATIONS: JsonCollection<VerificationRecord> = JsonCollection::new(VERIFICATIONS_KEY);

/// The persisted collection of verification records.
pub struct VerificationStore<S> {
    kv: S,
    classifier: Box<dyn Classifier>,
    clock: Box<dyn Clock>,
    rng: Box<dyn RngCore + Send>,
}

impl<S: KeyValueStore> VerificationStore<S> {
    /// A store using the keyword classifier, the system clock and OS entropy.
    pub fn new(kv: S) -> Self {
        Self {
            kv,
            classifier: Box::new(KeywordClassifier::new()),
            clock: Box::new(SystemClock),
            rng: Box::new(StdRng::from_entropy()),
        }
    }

    pub fn with_classifier(mut self, classifier: impl Classifier + 'static) -> Self {
        self.classifier = Box::new(classifier);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_rng(mut self, rng: impl RngCore + Send + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    /// Classify `news_text` and persist the result for `account_id`.
    ///
    /// The caller vouches that `account_id` names a live account. Either the
    /// whole record is appended or nothing is.
    pub fn create(
        &mut self,
        account_id: &AccountId,
        news_text: &str,
        news_url: Option<&str>,
    ) -> Result<VerificationRecord, VerificationError> {
        let analysis = self.classifier.analyze(news_text, self.rng.as_mut());
        let explanation = self.classifier.explain(analysis.verdict, self.rng.as_mut());
        let record = VerificationRecord {
            id: VerificationId::generate(self.rng.as_mut()),
            account_id: account_id.clone(),
            news_text: news_text.to_string(),
            news_url: news_url.map(str::to_string),
            result: analysis.verdict,
            confidence: analysis.confidence,
            explanation,
            created_at: self.clock.now(),
        };

        let record = VERIFICATIONS.append(&self.kv, record)?;
        tracing::info!(
            id = %record.id,
            account = %record.account_id,
            verdict = %record.result,
            confidence = record.confidence,
            text_len = record.news_text.len(),
            "created verification"
        );
        Ok(record)
    }

    /// Look up one record. Absence is `Ok(None)`, not an error.
    pub fn get_by_id(
        &self,
        id: &VerificationId,
    ) -> Result<Option<VerificationRecord>, VerificationError> {
        let found = VERIFICATIONS
            .load(&self.kv)?
            .into_iter()
            .find(|r| &r.id == id);
        tracing::debug!(%id, found = found.is_some(), "looked up verification");
        Ok(found)
    }

    /// Every record owned by `account_id`, most recent first.
    ///
    /// Records with equal timestamps keep their insertion order.
    pub fn list_for_account(
        &self,
        account_id: &AccountId,
    ) -> Result<Vec<VerificationRecord>, VerificationError> {
        let mut records: Vec<_> = VERIFICATIONS
            .load(&self.kv)?
            .into_iter()
            .filter(|r| &r.account_id == account_id)
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        tracing::debug!(account = %account_id, count = records.len(), "listed verifications");
        Ok(records)
    }
}

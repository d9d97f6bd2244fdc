//! The persisted result of one news verification.

use crate::{AccountId, Timestamp, Verdict, VerificationId};
use serde::{Deserialize, Serialize};

/// A single verification, immutable once created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRecord {
    pub id: VerificationId,
    /// Owning account. Not checked against the account table.
    pub account_id: AccountId,
    pub news_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub news_url: Option<String>,
    pub result: Verdict,
    /// Percentage-like score in [0, 100].
    pub confidence: f64,
    /// Drawn from the explanation pool of `result`.
    pub explanation: String,
    pub created_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(url: Option<&str>) -> VerificationRecord {
        VerificationRecord {
            id: VerificationId::new("v1"),
            account_id: AccountId::new("a1"),
            news_text: "some text".into(),
            news_url: url.map(str::to_string),
            result: Verdict::Real,
            confidence: 75.5,
            explanation: "because".into(),
            created_at: Timestamp::from_millis(1_700_000_000_000),
        }
    }

    #[test]
    fn json_uses_camel_case_fields() {
        let json = serde_json::to_string(&sample(Some("https://example.com"))).unwrap();
        assert!(json.contains("\"accountId\":\"a1\""));
        assert!(json.contains("\"newsUrl\":\"https://example.com\""));
        assert!(json.contains("\"createdAt\":1700000000000"));
        assert!(json.contains("\"result\":\"real\""));
    }

    #[test]
    fn absent_url_is_omitted() {
        let json = serde_json::to_string(&sample(None)).unwrap();
        assert!(!json.contains("newsUrl"));
        let back: VerificationRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.news_url, None);
    }
}

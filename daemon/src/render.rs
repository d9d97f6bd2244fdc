//! Plain-text rendering of accounts and verification records.

use newsguard_types::{Account, Timestamp, VerificationRecord};
use newsguard_utils::format_age;

/// Characters of news text shown per history line.
const PREVIEW_CHARS: usize = 100;

pub fn account(account: &Account) -> String {
    format!("{} <{}> ({})", account.name, account.email, account.id)
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let head: String = text.chars().take(max_chars).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

fn age(created_at: Timestamp, now: Timestamp) -> String {
    format_age(created_at.secs_elapsed_since(now))
}

/// Full view of one record.
pub fn record(record: &VerificationRecord, now: Timestamp) -> String {
    let mut out = format!(
        "Verification {}\n  Result:      {}\n  Confidence:  {:.1}%\n  Explanation: {}\n  Verified:    {}\n",
        record.id,
        record.result,
        record.confidence,
        record.explanation,
        age(record.created_at, now),
    );
    if let Some(url) = &record.news_url {
        out.push_str(&format!("  Source URL:  {url}\n"));
    }
    out.push_str(&format!("  Text:        {}\n", record.news_text));
    out
}

/// One line per record for history listings.
pub fn summary_line(record: &VerificationRecord, now: Timestamp) -> String {
    format!(
        "{}  {:<9} {:>5.1}%  {:>10}  {}",
        record.id,
        record.result,
        record.confidence,
        age(record.created_at, now),
        truncate(&record.news_text, PREVIEW_CHARS),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsguard_types::{AccountId, Verdict, VerificationId};

    fn sample() -> VerificationRecord {
        VerificationRecord {
            id: VerificationId::new("v-1"),
            account_id: AccountId::new("a-1"),
            news_text: "x".repeat(150),
            news_url: Some("https://example.com".into()),
            result: Verdict::Uncertain,
            confidence: 55.55,
            explanation: "Mixed signals.".into(),
            created_at: Timestamp::from_millis(0),
        }
    }

    #[test]
    fn truncates_long_text() {
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("abc", 3), "abc");
    }

    #[test]
    fn record_view_shows_one_decimal_and_url() {
        let out = record(&sample(), Timestamp::from_millis(303_000));
        assert!(out.contains("Confidence:  55.5%") || out.contains("Confidence:  55.6%"));
        assert!(out.contains("Source URL:  https://example.com"));
        assert!(out.contains("5m 3s ago"));
    }

    #[test]
    fn summary_line_is_truncated() {
        let line = summary_line(&sample(), Timestamp::from_millis(0));
        assert!(line.contains("uncertain"));
        assert!(line.ends_with(&format!("{}...", "x".repeat(100))));
    }
}

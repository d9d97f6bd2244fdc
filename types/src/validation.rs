//! Submission validation.
//!
//! The stores accept any text. These checks belong to whoever collects the
//! submission from a user (the CLI, or the service facade's `submit`).

use thiserror::Error;
use url::Url;

/// Minimum news text length accepted by the submission form.
pub const DEFAULT_MIN_TEXT_LEN: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("news content must be at least {min} characters (got {actual})")]
    TextTooShort { min: usize, actual: usize },

    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// A submission that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub text: String,
    pub url: Option<String>,
}

/// Check news text and an optional source URL.
///
/// Text is trimmed and counted in characters. An empty or whitespace-only
/// URL is treated as absent. A present URL must be absolute http(s).
pub fn validate_submission(
    text: &str,
    url: Option<&str>,
    min_len: usize,
) -> Result<Submission, ValidationError> {
    let text = text.trim();
    let actual = text.chars().count();
    if actual < min_len {
        return Err(ValidationError::TextTooShort {
            min: min_len,
            actual,
        });
    }

    let url = match url.map(str::trim).filter(|u| !u.is_empty()) {
        None => None,
        Some(raw) => {
            let parsed =
                Url::parse(raw).map_err(|e| ValidationError::InvalidUrl(format!("{raw}: {e}")))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(ValidationError::InvalidUrl(format!(
                    "{raw}: unsupported scheme '{}'",
                    parsed.scheme()
                )));
            }
            Some(raw.to_string())
        }
    };

    Ok(Submission {
        text: text.to_string(),
        url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG: &str = "Experts say the new bridge opens next week.";

    #[test]
    fn accepts_text_without_url() {
        let s = validate_submission(LONG, None, DEFAULT_MIN_TEXT_LEN).unwrap();
        assert_eq!(s.text, LONG);
        assert_eq!(s.url, None);
    }

    #[test]
    fn rejects_short_text() {
        let err = validate_submission("too short", None, DEFAULT_MIN_TEXT_LEN).unwrap_err();
        assert_eq!(err, ValidationError::TextTooShort { min: 20, actual: 9 });
    }

    #[test]
    fn surrounding_whitespace_does_not_count() {
        let padded = format!("   {}   ", "x".repeat(19));
        assert!(validate_submission(&padded, None, 20).is_err());
    }

    #[test]
    fn empty_url_is_absent() {
        let s = validate_submission(LONG, Some("  "), DEFAULT_MIN_TEXT_LEN).unwrap();
        assert_eq!(s.url, None);
    }

    #[test]
    fn accepts_https_url() {
        let s = validate_submission(LONG, Some("https://news.example.com/a?b=1"), 20).unwrap();
        assert_eq!(s.url.as_deref(), Some("https://news.example.com/a?b=1"));
    }

    #[test]
    fn rejects_relative_url() {
        let err = validate_submission(LONG, Some("not a url"), 20).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidUrl(_)));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = validate_submission(LONG, Some("ftp://example.com/file"), 20).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidUrl(_)));
    }
}

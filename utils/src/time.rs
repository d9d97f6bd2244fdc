//! Time formatting helpers.

/// Describe how long ago something happened, given the elapsed seconds.
///
/// Uses the two most significant units: `"42s ago"`, `"5m 3s ago"`,
/// `"2h 1m ago"`, `"3d 4h ago"`.
pub fn format_age(secs: u64) -> String {
    if secs == 0 {
        return "just now".to_string();
    }
    let span = match secs {
        0..=59 => format!("{secs}s"),
        60..=3_599 => format!("{}m {}s", secs / 60, secs % 60),
        3_600..=86_399 => format!("{}h {}m", secs / 3_600, (secs % 3_600) / 60),
        _ => format!("{}d {}h", secs / 86_400, (secs % 86_400) / 3_600),
    };
    format!("{span} ago")
}

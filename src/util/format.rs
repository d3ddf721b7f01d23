//! Display formatting for balances, costs, and server timestamps.
//!
//! Dates render in UTC as `Jan 5, 2025, 03:04 PM`.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

use crate::net::types::Timestamp;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short] [day padding:none], [year], [hour repr:12]:[minute] [period]");

/// Group digits with `,` every three places (`-1234567` → `-1,234,567`).
#[must_use]
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Estimated cost with three decimals; missing or zero cost is `$0.000`.
#[must_use]
pub fn format_cost(cost: Option<f64>) -> String {
    format!("${:.3}", cost.unwrap_or(0.0))
}

/// Human date for a server timestamp. Unparseable text is returned as-is.
#[must_use]
pub fn format_date(timestamp: &Timestamp) -> String {
    let parsed = match timestamp {
        Timestamp::Millis(ms) => OffsetDateTime::from_unix_timestamp_nanos(i128::from(*ms) * 1_000_000).ok(),
        Timestamp::Text(text) => OffsetDateTime::parse(text, &Rfc3339).ok(),
    };
    match (parsed.and_then(|dt| dt.format(DATE_FORMAT).ok()), timestamp) {
        (Some(formatted), _) => formatted,
        (None, Timestamp::Text(text)) => text.clone(),
        (None, Timestamp::Millis(ms)) => ms.to_string(),
    }
}

/// `format_date` for optional timestamps; absent renders as `N/A`.
#[must_use]
pub fn format_optional_date(timestamp: Option<&Timestamp>) -> String {
    timestamp.map_or_else(|| "N/A".to_owned(), format_date)
}

/// First `n` characters of `s`, respecting char boundaries.
#[must_use]
pub fn prefix_chars(s: &str, n: usize) -> &str {
    s.char_indices().nth(n).map_or(s, |(idx, _)| &s[..idx])
}

//! Request DTOs for the drug API
//!
//! Defines the structure of incoming query parameters and path segments.

use serde::Deserialize;

use crate::records::MAX_NEEDLE_LENGTH;

/// Query parameters for the listing endpoint (GET /drugs)
///
/// Values are kept as raw strings so that malformed input falls back to the
/// defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    /// 1-based page number
    #[serde(default)]
    pub page: Option<String>,
    /// Page size
    #[serde(default)]
    pub limit: Option<String>,
}

impl PageQuery {
    /// Resolves the page number and page size.
    ///
    /// Missing or non-numeric values take the defaults (page 1, `default_limit`).
    /// Integers too large for `i64` saturate. The results are then clamped to
    /// at least 1.
    pub fn resolve(&self, default_limit: usize) -> (usize, usize) {
        let default_limit = i64::try_from(default_limit).unwrap_or(i64::MAX);
        let page = parse_lenient(self.page.as_deref()).unwrap_or(1);
        let limit = parse_lenient(self.limit.as_deref()).unwrap_or(default_limit);
        (clamp_positive(page), clamp_positive(limit))
    }
}

fn parse_lenient(raw: Option<&str>) -> Option<i64> {
    let raw = raw?.trim();
    if let Ok(value) = raw.parse::<i64>() {
        return Some(value);
    }

    // Well-formed integers that overflow saturate instead of falling back
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(if negative { i64::MIN } else { i64::MAX })
}

fn clamp_positive(value: i64) -> usize {
    usize::try_from(value.max(1)).unwrap_or(usize::MAX)
}

/// Validates a search needle taken from the path.
///
/// Returns an error message if validation fails, None if valid.
pub fn validate_needle(needle: &str) -> Option<String> {
    if needle.trim().is_empty() {
        return Some("Search term cannot be empty".to_string());
    }
    if needle.len() > MAX_NEEDLE_LENGTH {
        return Some(format!(
            "Search term exceeds maximum length of {} bytes",
            MAX_NEEDLE_LENGTH
        ));
    }
    None
}

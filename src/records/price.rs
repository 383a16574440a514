//! Price Normalization
//!
//! Label prices in the catalogue use locale-dependent separators
//! (`1.234,56`, `12,50`, `12.50`). This module resolves them to a plain `f64`.

// == Normalize Price ==
/// Converts a raw label price into a number.
///
/// - Both `.` and `,` present: `.` is the thousands separator, `,` the decimal one.
/// - Only `,` present: `,` is the decimal separator.
/// - Otherwise the string is taken as-is.
///
/// Anything that is not a digit or `.` is then dropped. Missing, empty or
/// unparseable input yields `0.0`; this function never fails.
pub fn normalize_price(raw: Option<&str>) -> f64 {
    let raw = match raw.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return 0.0,
    };

    let swapped = if raw.contains('.') && raw.contains(',') {
        raw.replace('.', "").replace(',', ".")
    } else if raw.contains(',') {
        raw.replace(',', ".")
    } else {
        raw.to_string()
    };

    let cleaned: String = swapped
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

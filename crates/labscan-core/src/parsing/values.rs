use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse the leading decimal number of an OCR capture.
///
/// Accepts digits with at most one `.`; anything after the numeric prefix is
/// ignored, so `"1.2.3"` yields `1.2`. The result is normalized so that its
/// string form carries no trailing zeros.
///
/// Handles formats like:
/// - "13.5" -> 13.5
/// - "13.50" -> 13.5
/// - ".5" -> 0.5
/// - "7." -> 7
/// - "." -> None
pub fn parse_leading_decimal(s: &str) -> Option<Decimal> {
    let s = s.trim();

    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;
    for (i, c) in s.char_indices() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }

    if !seen_digit {
        return None;
    }

    let prefix = s[..end].trim_end_matches('.');
    let candidate = if prefix.starts_with('.') {
        format!("0{prefix}")
    } else {
        prefix.to_string()
    };

    Decimal::from_str(&candidate).ok().map(|d| d.normalize())
}

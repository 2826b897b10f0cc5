/// Normalize a loosely captured label for display.
///
/// OCR labels may span line breaks or carry padded columns, so surrounding
/// whitespace is trimmed and internal runs collapse to a single space.
pub fn normalize_label(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether two parameter names overlap case-insensitively, in either direction.
///
/// "HDL Cholesterol" and "cholesterol" overlap; "ALT" and "AST" do not.
pub fn names_overlap(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

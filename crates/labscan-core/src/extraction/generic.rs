use crate::extraction::ExtractOptions;
use crate::model::{LabResult, ReferenceRange, Status};
use crate::parsing::{names_overlap, normalize_label, parse_leading_decimal};
use regex::Regex;
use std::sync::LazyLock;

/// `<label> [:] <number> <unit>` anywhere in the text, including across line breaks.
static GENERIC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<label>[A-Za-z\s]+)\s*:?\s*(?P<value>[0-9.]+)\s*(?P<unit>[a-zA-Z/μµ%]+)")
        .expect("generic pattern is valid")
});

/// Best-effort capture of label/value/unit fragments no registry rule recognized.
///
/// `already_found` holds the names emitted by earlier passes. A fragment is
/// skipped when its label overlaps any name collected so far, including names
/// accepted earlier in this pass. Scanning stops once the combined count
/// reaches `options.max_results`.
///
/// Accepted fragments are placeholders: they always carry the `{0, 999999}`
/// range and `Normal` status.
pub fn extract_generic(
    text: &str,
    already_found: &[String],
    options: &ExtractOptions,
) -> Vec<LabResult> {
    let mut results = Vec::new();
    if already_found.len() >= options.max_results {
        return results;
    }

    let mut seen: Vec<String> = already_found.to_vec();

    for caps in GENERIC_PATTERN.captures_iter(text) {
        let label = normalize_label(&caps["label"]);

        if label.chars().count() < options.min_label_len {
            tracing::trace!(label = %label, "generic label too short, skipping");
            continue;
        }

        if let Some(existing) = seen.iter().find(|name| names_overlap(name, &label)) {
            tracing::debug!(label = %label, existing = %existing, "generic label overlaps known result, skipping");
            continue;
        }

        let Some(value) = parse_leading_decimal(&caps["value"]) else {
            continue;
        };

        tracing::debug!(parameter = %label, %value, unit = &caps["unit"], "generic fragment accepted");
        seen.push(label.clone());
        results.push(LabResult {
            parameter: label,
            value,
            unit: caps["unit"].to_string(),
            range: ReferenceRange::placeholder(),
            status: Status::Normal,
        });

        if already_found.len() + results.len() >= options.max_results {
            tracing::debug!(limit = options.max_results, "result limit reached, stopping generic scan");
            break;
        }
    }

    results
}

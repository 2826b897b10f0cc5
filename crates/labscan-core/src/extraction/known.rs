use crate::classify::classify;
use crate::model::LabResult;
use crate::parsing::parse_leading_decimal;
use crate::registry::{ParameterRule, Registry};

/// Extract results for every registry parameter mentioned in the text.
///
/// Rules are tried in registry order and each rule scans lines in text
/// order. The first line that matches with a parseable value wins; later
/// mentions of the same parameter are ignored. Output follows registry order.
pub fn extract_known(text: &str, registry: &Registry) -> Vec<LabResult> {
    let lines: Vec<&str> = text.split('\n').collect();

    registry
        .rules()
        .iter()
        .filter_map(|rule| lines.iter().find_map(|line| match_line(rule, line)))
        .collect()
}

/// Try a single rule against a single line.
fn match_line(rule: &ParameterRule, line: &str) -> Option<LabResult> {
    let caps = rule.pattern.captures(line)?;

    // A participating `skip` group marks a line that belongs to another rule.
    if let Some(skipped) = caps.name("skip") {
        tracing::trace!(
            parameter = %rule.name,
            skipped = skipped.as_str(),
            "line excluded by skip group, continuing"
        );
        return None;
    }

    let raw_value = caps.name("value")?.as_str();

    let Some(value) = parse_leading_decimal(raw_value) else {
        tracing::trace!(
            parameter = %rule.name,
            raw_value,
            "matched line has no parseable value, continuing"
        );
        return None;
    };

    let unit = caps
        .name("unit")
        .map(|m| m.as_str())
        .filter(|u| !u.is_empty())
        .unwrap_or(&rule.default_unit)
        .to_string();

    let status = classify(value, &rule.default_range);
    tracing::debug!(parameter = %rule.name, %value, %unit, %status, "known parameter matched");

    Some(LabResult {
        parameter: rule.name.clone(),
        value,
        unit,
        range: rule.default_range,
        status,
    })
}

use labscan_core::error::LabscanError;
use labscan_core::registry::{builtin, load_registry, Registry};
use std::path::Path;

pub fn list() -> Result<(), LabscanError> {
    println!("Available predefined registries:\n");
    for name in builtin::PRESETS {
        let registry = builtin::load_preset(name)?;
        println!(
            "  {:<10} {} (v{}), {} parameters",
            name,
            registry.name,
            registry.version,
            registry.rules().len()
        );
        if let Some(ref desc) = registry.description {
            println!("             {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn explain(preset: &str) -> Result<(), LabscanError> {
    let registry = builtin::load_preset(preset)?;

    println!("{} (version {})\n", registry.name, registry.version);
    if let Some(ref desc) = registry.description {
        println!("{}\n", desc);
    }

    println!("Recognized parameters, in reporting order:\n");
    println!("{}", format_parameters(registry));

    println!("Values outside the reference range are reported as Low or High.");
    println!("Other 'label: value unit' fragments are reported with a 0 - 999999");
    println!("placeholder range and are never flagged.\n");

    Ok(())
}

/// Render the parameter table for `explain`, with any rule notes beneath it.
fn format_parameters(registry: &Registry) -> String {
    let max_name_len = registry
        .rules()
        .iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or(20);

    let mut out = format!(
        "  {:<width$}  {:<20}  Unit\n",
        "Parameter",
        "Range",
        width = max_name_len
    );
    out.push_str(&format!("  {}\n", "-".repeat(max_name_len + 34)));

    for rule in registry.rules() {
        out.push_str(&format!(
            "  {:<width$}  {:<20}  {}\n",
            rule.name,
            rule.default_range.to_string(),
            rule.default_unit,
            width = max_name_len
        ));
    }

    let notes: Vec<_> = registry
        .rules()
        .iter()
        .filter_map(|r| r.note.as_deref().map(|n| (&r.name, n)))
        .collect();
    if !notes.is_empty() {
        out.push_str("\nNotes:\n");
        for (name, note) in notes {
            out.push_str(&format!("  {}: {}\n", name, note));
        }
    }
    out
}

pub fn validate(file: &Path) -> Result<(), LabscanError> {
    let registry = load_registry(file)?;

    println!(
        "Registry '{}' (v{}) is valid.",
        registry.name, registry.version
    );
    println!("  Parameters: {}", registry.rules().len());

    // Check for potential issues (warnings, not errors)
    let mut warnings = Vec::new();
    for rule in registry.rules() {
        if !rule.captures_unit() {
            warnings.push(format!(
                "parameter '{}' has no 'unit' capture group; '{}' is always reported",
                rule.name, rule.default_unit
            ));
        }
        if rule.baseline.is_none() {
            warnings.push(format!(
                "parameter '{}' has no baseline; trends use the default",
                rule.name
            ));
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}

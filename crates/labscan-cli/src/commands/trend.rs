use labscan_core::error::LabscanError;
use labscan_core::trend::synthesize_trend;
use std::path::PathBuf;

use crate::output;

pub fn run(
    parameter: &str,
    registry_file: Option<PathBuf>,
    preset: &str,
    output_format: &str,
) -> Result<(), LabscanError> {
    let registry = super::resolve_registry(registry_file.as_deref(), preset)?;

    if registry.get(parameter).is_none() {
        tracing::info!(parameter, "parameter not in registry, using default baseline");
    }

    let points = synthesize_trend(&registry, parameter);

    match output_format {
        "json" => output::json::print(&points)?,
        _ => output::table::print_trend(parameter, &points),
    }

    Ok(())
}

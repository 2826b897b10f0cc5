use labscan_core::analysis::{analyze, EnhancedAnalyzer, ResponseFileAnalyzer};
use labscan_core::error::LabscanError;
use labscan_core::ExtractOptions;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::output;

pub fn run(
    input_file: PathBuf,
    registry_file: Option<PathBuf>,
    preset: &str,
    output_format: &str,
    output_file: Option<PathBuf>,
    options: &ExtractOptions,
    enhanced_response: Option<PathBuf>,
) -> Result<(), LabscanError> {
    let registry = super::resolve_registry(registry_file.as_deref(), preset)?;
    let text = read_input(&input_file)?;

    if text.trim().is_empty() {
        tracing::warn!(input = %input_file.display(), "input contains no text");
    }

    let analyzer = enhanced_response.map(ResponseFileAnalyzer::new);
    let analysis = analyze(
        &text,
        &registry,
        analyzer.as_ref().map(|a| a as &dyn EnhancedAnalyzer),
        options,
    );

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&analysis)?;
            std::fs::write(&path, json)?;
            eprintln!("{}, written to {}", analysis.message, path.display());
        }
        None => match output_format {
            "json" => output::json::print(&analysis)?,
            _ => output::table::print_analysis(&analysis),
        },
    }

    Ok(())
}

/// Read the whole input, from stdin when the path is "-".
fn read_input(path: &Path) -> Result<String, LabscanError> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

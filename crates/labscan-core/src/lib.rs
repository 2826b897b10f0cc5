pub mod analysis;
pub mod classify;
pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod registry;
pub mod trend;

pub use analysis::{analyze, Analysis, AnalysisMethod, EnhancedAnalyzer};
pub use extraction::ExtractOptions;
pub use model::{LabResult, ReferenceRange, Status, TrendPoint};

use registry::builtin;

/// Main API entry point: extract lab results from OCR text with the built-in
/// registry and default options.
///
/// Recognized parameters come first, in registry order, followed by loosely
/// matched `label: value unit` fragments. Text with nothing recognizable
/// yields an empty list.
pub fn extract_lab_results(text: &str) -> Vec<LabResult> {
    extraction::extract(text, builtin::standard(), &ExtractOptions::default())
}

/// Synthesize a six-month illustrative series for a parameter of the
/// built-in registry.
pub fn historical_trend(parameter: &str) -> Vec<TrendPoint> {
    trend::synthesize_trend(builtin::standard(), parameter)
}

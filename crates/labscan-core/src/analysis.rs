use crate::error::LabscanError;
use crate::extraction::{extract, ExtractOptions};
use crate::model::LabResult;
use crate::registry::Registry;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// An external classification source that can analyze report text on its own.
///
/// Implementations typically wrap a hosted model. When one is unavailable or
/// fails, `analyze` falls back to the built-in extraction pipeline.
pub trait EnhancedAnalyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Result<Vec<LabResult>, LabscanError>;

    /// Name of this backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Which path produced a set of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMethod {
    Enhanced,
    Basic,
    BasicFallback,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub method: AnalysisMethod,
    pub message: String,
    pub results: Vec<LabResult>,
}

/// Analyze report text, preferring the enhanced analyzer when one is given.
pub fn analyze(
    text: &str,
    registry: &Registry,
    enhanced: Option<&dyn EnhancedAnalyzer>,
    options: &ExtractOptions,
) -> Analysis {
    let (method, results) = match enhanced {
        None => {
            tracing::info!("no enhanced analyzer configured, using basic extraction");
            (AnalysisMethod::Basic, extract(text, registry, options))
        }
        Some(analyzer) => match analyzer.analyze(text) {
            Ok(results) => (AnalysisMethod::Enhanced, results),
            Err(e) => {
                tracing::warn!(
                    backend = analyzer.backend_name(),
                    error = %e,
                    "enhanced analysis failed, falling back to basic extraction"
                );
                (AnalysisMethod::BasicFallback, extract(text, registry, options))
            }
        },
    };

    let message = if results.is_empty() {
        "No lab parameters found in the uploaded file.".to_string()
    } else {
        let via = match method {
            AnalysisMethod::Enhanced => "AI analysis",
            AnalysisMethod::Basic | AnalysisMethod::BasicFallback => "basic parsing",
        };
        format!(
            "Successfully extracted {} lab parameters using {}",
            results.len(),
            via
        )
    };

    Analysis {
        method,
        message,
        results,
    }
}

/// Parse the JSON array of lab results returned by an external model.
///
/// Tolerates markdown code fences and prose around the array. Statuses are
/// taken as given, including `Needs Attention`. Entries that do not describe
/// a lab result are skipped; the response is rejected only when none of a
/// non-empty array survive.
pub fn parse_enhanced_response(response: &str) -> Result<Vec<LabResult>, LabscanError> {
    let cleaned = strip_code_fences(response.trim());

    let start = cleaned.find('[');
    let end = cleaned.rfind(']');
    let body = match (start, end) {
        (Some(s), Some(e)) if s < e => &cleaned[s..=e],
        _ => {
            return Err(LabscanError::EnhancedAnalysis(
                "response contains no JSON array".into(),
            ))
        }
    };

    let entries: Vec<serde_json::Value> = serde_json::from_str(body).map_err(|e| {
        LabscanError::EnhancedAnalysis(format!("response array is not valid JSON: {e}"))
    })?;
    let total = entries.len();

    let results: Vec<LabResult> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(result) => Some(result),
            Err(e) => {
                tracing::debug!(index, error = %e, "skipping malformed response entry");
                None
            }
        })
        .collect();

    if total > 0 && results.is_empty() {
        return Err(LabscanError::EnhancedAnalysis(format!(
            "none of the {total} response entries is a lab result"
        )));
    }
    Ok(results)
}

fn strip_code_fences(s: &str) -> String {
    s.replace("```json", "").replace("```", "")
}

/// Replays a previously saved enhanced-analysis response from disk.
pub struct ResponseFileAnalyzer {
    path: PathBuf,
}

impl ResponseFileAnalyzer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl EnhancedAnalyzer for ResponseFileAnalyzer {
    fn analyze(&self, _text: &str) -> Result<Vec<LabResult>, LabscanError> {
        let response = std::fs::read_to_string(&self.path).map_err(|e| {
            LabscanError::EnhancedAnalysis(format!("{}: {}", self.path.display(), e))
        })?;
        parse_enhanced_response(&response)
    }

    fn backend_name(&self) -> &str {
        "response-file"
    }
}

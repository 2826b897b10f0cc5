pub mod generic;
pub mod known;

use crate::model::LabResult;
use crate::registry::Registry;

pub use generic::extract_generic;
pub use known::extract_known;

/// Default upper bound on the combined number of results per call.
pub const DEFAULT_MAX_RESULTS: usize = 20;

/// Default minimum length of a label accepted by the generic pass.
pub const DEFAULT_MIN_LABEL_LEN: usize = 3;

/// Options controlling a single extraction call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Generic results stop being collected once the combined count reaches this.
    pub max_results: usize,
    pub min_label_len: usize,
    /// Run the generic fallback pass after the known-parameter pass.
    pub generic: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            min_label_len: DEFAULT_MIN_LABEL_LEN,
            generic: true,
        }
    }
}

/// Run the known-parameter pass, then the generic pass over the same text.
///
/// Known results come first in registry order, followed by generic results in
/// text order. Never fails; text with nothing recognizable yields an empty list.
pub fn extract(text: &str, registry: &Registry, options: &ExtractOptions) -> Vec<LabResult> {
    let mut results = extract_known(text, registry);

    if options.generic {
        let found: Vec<String> = results.iter().map(|r| r.parameter.clone()).collect();
        results.extend(extract_generic(text, &found, options));
    }

    tracing::debug!(count = results.len(), registry = %registry.name, "extraction finished");
    results
}

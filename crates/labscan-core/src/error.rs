use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LabscanError {
    #[error("failed to load registry from {path}: {reason}")]
    RegistryLoad { path: PathBuf, reason: String },

    #[error("invalid registry: {0}")]
    RegistryInvalid(String),

    #[error("parameter '{name}' has an invalid recognition pattern: {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("unknown preset '{0}'")]
    UnknownPreset(String),

    #[error("enhanced analysis failed: {0}")]
    EnhancedAnalysis(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

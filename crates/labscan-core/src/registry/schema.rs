use crate::model::ReferenceRange;
use serde::{Deserialize, Serialize};

/// A registry of known lab parameters, as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Declaration order is the order results are reported in.
    pub parameters: Vec<ParameterDef>,
}

/// A single known parameter within a registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterDef {
    pub name: String,
    /// Case-insensitive regex with a `value` group and an optional `unit` group.
    /// A line where an optional `skip` group takes part is not a match.
    pub pattern: String,
    /// Unit reported when the pattern does not capture one.
    pub unit: String,
    pub range: ReferenceRange,
    /// Typical value used when synthesizing a trend series.
    #[serde(default)]
    pub baseline: Option<f64>,
    /// Shown next to the parameter by `registry explain`.
    #[serde(default)]
    pub note: Option<String>,
}

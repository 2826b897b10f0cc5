pub mod builtin;
pub mod schema;

use crate::error::LabscanError;
use crate::model::ReferenceRange;
use regex::{Regex, RegexBuilder};
use schema::RegistryDef;
use std::collections::HashSet;
use std::path::Path;

/// A compiled known-parameter rule.
#[derive(Debug, Clone)]
pub struct ParameterRule {
    pub name: String,
    pub pattern: Regex,
    pub default_unit: String,
    pub default_range: ReferenceRange,
    pub baseline: Option<f64>,
    pub note: Option<String>,
}

impl ParameterRule {
    /// Whether the pattern captures the unit from the text.
    pub fn captures_unit(&self) -> bool {
        self.pattern.capture_names().any(|n| n == Some("unit"))
    }
}

/// An ordered, validated set of parameter rules.
///
/// Read-only once built; safe to share across threads.
#[derive(Debug, Clone)]
pub struct Registry {
    pub name: String,
    pub description: Option<String>,
    pub version: String,
    rules: Vec<ParameterRule>,
}

impl Registry {
    pub fn rules(&self) -> &[ParameterRule] {
        &self.rules
    }

    pub fn get(&self, name: &str) -> Option<&ParameterRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    pub fn baseline_for(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(|r| r.baseline)
    }
}

/// Load a registry from a JSON file.
pub fn load_registry(path: &Path) -> Result<Registry, LabscanError> {
    let content = std::fs::read_to_string(path).map_err(|e| LabscanError::RegistryLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_registry(&content, path)
}

/// Parse a registry from a JSON string.
pub fn parse_registry(json: &str, source: &Path) -> Result<Registry, LabscanError> {
    let def: RegistryDef = serde_json::from_str(json).map_err(|e| LabscanError::RegistryLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    compile_registry(def)
}

/// Parse a registry from a JSON string (no file path context).
pub fn parse_registry_str(json: &str) -> Result<Registry, LabscanError> {
    let def: RegistryDef = serde_json::from_str(json).map_err(LabscanError::Json)?;
    compile_registry(def)
}

/// Validate a registry definition and compile its patterns.
pub fn compile_registry(def: RegistryDef) -> Result<Registry, LabscanError> {
    if def.parameters.is_empty() {
        return Err(LabscanError::RegistryInvalid(
            "parameters must not be empty".into(),
        ));
    }

    let mut seen = HashSet::new();
    let mut rules = Vec::with_capacity(def.parameters.len());

    for param in def.parameters {
        let name = param.name.trim().to_string();
        if name.is_empty() {
            return Err(LabscanError::RegistryInvalid(
                "parameter name must not be empty".into(),
            ));
        }

        if !seen.insert(name.to_lowercase()) {
            return Err(LabscanError::RegistryInvalid(format!(
                "parameter '{}' is declared more than once",
                name
            )));
        }

        if param.range.low > param.range.high {
            return Err(LabscanError::RegistryInvalid(format!(
                "parameter '{}' has low bound {} above high bound {}",
                name, param.range.low, param.range.high
            )));
        }

        let pattern = RegexBuilder::new(&param.pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| LabscanError::InvalidPattern {
                name: name.clone(),
                source,
            })?;

        if !pattern.capture_names().any(|n| n == Some("value")) {
            return Err(LabscanError::RegistryInvalid(format!(
                "parameter '{}' pattern has no 'value' capture group",
                name
            )));
        }

        rules.push(ParameterRule {
            name,
            pattern,
            default_unit: param.unit,
            default_range: param.range,
            baseline: param.baseline,
            note: param.note.filter(|n| !n.trim().is_empty()),
        });
    }

    Ok(Registry {
        name: def.name,
        description: def.description,
        version: def.version,
        rules,
    })
}

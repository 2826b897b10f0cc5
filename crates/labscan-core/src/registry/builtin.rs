use crate::error::LabscanError;
use crate::registry::{parse_registry_str, Registry};
use std::sync::LazyLock;

const STANDARD_PANEL_JSON: &str = include_str!("../../../../registry/standard-panel.json");

/// Available predefined registries.
pub const PRESETS: &[&str] = &["standard"];

pub const DEFAULT_PRESET: &str = "standard";

static STANDARD_PANEL: LazyLock<Registry> = LazyLock::new(|| {
    parse_registry_str(STANDARD_PANEL_JSON).expect("embedded standard panel registry is valid")
});

/// The built-in registry used when no custom registry is given.
pub fn standard() -> &'static Registry {
    &STANDARD_PANEL
}

/// Load a predefined registry by name.
pub fn load_preset(name: &str) -> Result<&'static Registry, LabscanError> {
    match name {
        "standard" => Ok(standard()),
        _ => Err(LabscanError::UnknownPreset(format!(
            "{}. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}

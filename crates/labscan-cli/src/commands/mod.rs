pub mod extract;
pub mod registry;
pub mod trend;

use labscan_core::error::LabscanError;
use labscan_core::registry::{builtin, load_registry, Registry};
use std::path::Path;

/// Pick the registry for a command: a custom file wins over a preset.
pub fn resolve_registry(custom: Option<&Path>, preset: &str) -> Result<Registry, LabscanError> {
    match custom {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading custom registry");
            load_registry(path)
        }
        None => builtin::load_preset(preset).cloned(),
    }
}

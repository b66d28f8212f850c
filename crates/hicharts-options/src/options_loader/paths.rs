//! Options path resolution and default file creation.

use hicharts_common::OptionsError;
use std::path::{Path, PathBuf};
use tracing::info;

use super::template::default_options_toml;

/// Get the platform-specific default options file path.
pub fn default_options_path() -> Result<PathBuf, OptionsError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| OptionsError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("hicharts").join("options.toml"))
}

/// Create a default TOML options file with documentation comments.
pub fn create_default_options(path: &Path) -> Result<(), OptionsError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            OptionsError::WriteError(format!(
                "failed to create options directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_options_toml()).map_err(|e| {
        OptionsError::WriteError(format!(
            "failed to write default options to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default options at {}", path.display());
    Ok(())
}

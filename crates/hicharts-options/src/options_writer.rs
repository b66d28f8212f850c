//! Write chart options to disk.
//!
//! Writes are atomic (write to `.tmp`, then rename) so a crash mid-write
//! never leaves a truncated options file behind.

use std::path::{Path, PathBuf};

use hicharts_common::OptionsError;

use crate::options_loader::OptionsFormat;
use crate::schema::ChartOptions;

/// Write options to a specific path, as JSON for `.json` files and TOML
/// otherwise.
///
/// Creates parent directories if they don't exist.
pub fn save_options_to_path(options: &ChartOptions, path: &Path) -> Result<(), OptionsError> {
    let content = match OptionsFormat::from_path(path) {
        OptionsFormat::Toml => toml::to_string_pretty(options).map_err(|e| {
            OptionsError::WriteError(format!("failed to serialize options to TOML: {e}"))
        })?,
        OptionsFormat::Json => serde_json::to_string_pretty(options).map_err(|e| {
            OptionsError::WriteError(format!("failed to serialize options to JSON: {e}"))
        })?,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            OptionsError::WriteError(format!(
                "failed to create options directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let tmp_path = tmp_path_for(path);
    std::fs::write(&tmp_path, &content).map_err(|e| {
        OptionsError::WriteError(format!(
            "failed to write options to {}: {e}",
            tmp_path.display()
        ))
    })?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        tracing::warn!("atomic rename failed ({e}), falling back to direct write");
        let _ = std::fs::remove_file(&tmp_path);
        std::fs::write(path, &content).map_err(|e2| {
            OptionsError::WriteError(format!(
                "failed to write options to {}: {e2}",
                path.display()
            ))
        })?;
    }

    tracing::debug!(path = %path.display(), "options saved to disk");
    Ok(())
}

/// Sibling temp file: the full file name with `.tmp` appended, so
/// `options.toml` and `options.json` never share one.
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

// =============================================================================
// TESTS
// =============================================================================

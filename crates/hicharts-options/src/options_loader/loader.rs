//! Core options loading: read from a path or the platform default.

use crate::schema::ChartOptions;
use crate::validation;
use hicharts_common::OptionsError;
use std::path::Path;
use tracing::{debug, info, warn};

use super::paths::{create_default_options, default_options_path};

/// On-disk encoding of an options file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsFormat {
    Toml,
    Json,
}

impl OptionsFormat {
    /// `.json` files are read as JSON, everything else as TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Parse options text in the given format.
pub fn parse_options(content: &str, format: OptionsFormat) -> Result<ChartOptions, OptionsError> {
    match format {
        OptionsFormat::Toml => toml::from_str(content)
            .map_err(|e| OptionsError::ParseError(format!("failed to parse TOML: {e}"))),
        OptionsFormat::Json => serde_json::from_str(content)
            .map_err(|e| OptionsError::ParseError(format!("failed to parse JSON: {e}"))),
    }
}

/// Load options from a specific file path.
///
/// Missing fields stay unset. After loading, the color lint runs; if it
/// finds problems a warning is logged and the parsed options are returned
/// as-is, leaving malformed values for the engine to reject.
pub fn load_from_path(path: &Path) -> Result<ChartOptions, OptionsError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            OptionsError::FileNotFound(path.to_path_buf())
        } else {
            OptionsError::ParseError(format!("failed to read {}: {e}", path.display()))
        }
    })?;

    let format = OptionsFormat::from_path(path);
    debug!(?format, path = %path.display(), "parsing options file");
    let options = parse_options(&content, format)?;

    if let Err(e) = validation::validate(&options) {
        warn!("options validation warning: {e}");
    }

    info!("loaded options from {}", path.display());
    Ok(options)
}

/// Load options from the platform-specific default path.
///
/// On Linux: `~/.config/hicharts/options.toml`
///
/// If the file does not exist, creates a default options file and returns
/// empty options.
pub fn load_default() -> Result<ChartOptions, OptionsError> {
    let path = default_options_path()?;

    match load_from_path(&path) {
        Ok(options) => Ok(options),
        Err(OptionsError::FileNotFound(_)) => {
            info!("no options found at {}, creating default", path.display());
            create_default_options(&path)?;
            Ok(ChartOptions::default())
        }
        Err(e) => Err(e),
    }
}

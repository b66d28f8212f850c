use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("options file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("options parse error: {0}")]
    ParseError(String),

    #[error("options write error: {0}")]
    WriteError(String),

    #[error("options validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum HichartsError {
    #[error(transparent)]
    Options(#[from] OptionsError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

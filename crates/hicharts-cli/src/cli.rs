use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Print the chart engine payload for an options file.
#[derive(Parser, Debug)]
#[command(name = "hicharts-options", version, about)]
pub struct Args {
    /// Options file (TOML, or JSON with a `.json` extension).
    /// Defaults to the platform options path.
    #[arg(long)]
    pub options: Option<PathBuf>,

    /// Fill unset hover properties from the legend item style first.
    #[arg(long)]
    pub resolve: bool,

    /// Run the color lint and exit with an error if it finds problems.
    #[arg(long)]
    pub check: bool,

    /// Rewrite every assigned color in this notation.
    #[arg(long, value_enum)]
    pub normalize_colors: Option<Notation>,

    /// Save the processed options to this file (TOML, or JSON with a
    /// `.json` extension) in addition to printing the payload.
    #[arg(long)]
    pub write: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notation {
    Hex,
    Rgba,
}

pub fn parse() -> Args {
    Args::parse()
}

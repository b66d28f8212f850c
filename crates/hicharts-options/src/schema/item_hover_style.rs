//! Legend item styling while hovered.

use serde::{Deserialize, Serialize};

use super::ItemStyle;
use crate::params::JsonParams;

/// Color the engine applies to hovered legend items when none is assigned.
pub const DEFAULT_HOVER_COLOR: &str = "#000000";

/// CSS styles for each legend item in hover mode.
///
/// Only a subset of CSS is supported, notably the text related options.
/// Properties the engine does not find here are inherited from the
/// legend's [`ItemStyle`]. The value is passed through untouched: any
/// string is accepted and a malformed color is left for the renderer to
/// reject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemHoverStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<String>,
}

impl ItemHoverStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.set_color(color);
        self
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = Some(color.into());
    }

    pub fn clear_color(&mut self) {
        self.color = None;
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// The assigned color, or [`DEFAULT_HOVER_COLOR`] when unset.
    pub fn effective_color(&self) -> &str {
        self.color().unwrap_or(DEFAULT_HOVER_COLOR)
    }

    /// Copy of this style with unset properties taken from `base`.
    ///
    /// An assigned hover color always wins over the base color.
    pub fn inherit_from(&self, base: &ItemStyle) -> Self {
        Self {
            color: self
                .color
                .clone()
                .or_else(|| base.color().map(str::to_owned)),
        }
    }
}

impl JsonParams for ItemHoverStyle {}

// =============================================================================
// Tests
// =============================================================================

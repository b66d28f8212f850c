//! Legend item styling in the normal state.

use serde::{Deserialize, Serialize};

use crate::params::JsonParams;

/// CSS styles for each legend item.
///
/// Unset properties fall back to the engine defaults:
/// `{"color": "#333333", "cursor": "pointer", "fontSize": "12px",
/// "fontWeight": "bold", "textOverflow": "ellipsis"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    /// CSS font size, e.g. `12px` or `0.8em`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_overflow: Option<String>,
}

impl ItemStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }
}

impl JsonParams for ItemStyle {}

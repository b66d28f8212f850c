//! Legend options node.

use serde::{Deserialize, Serialize};

use super::{ItemHoverStyle, ItemStyle};
use crate::params::JsonParams;

/// The legend of a chart.
///
/// Owns the item styles; each child node is omitted from the params
/// until it is assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Legend {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ItemStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_hover_style: Option<ItemHoverStyle>,
}

impl Legend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutable access to the hover style, creating it on first use.
    pub fn item_hover_style_mut(&mut self) -> &mut ItemHoverStyle {
        self.item_hover_style.get_or_insert_with(ItemHoverStyle::default)
    }

    pub fn item_style_mut(&mut self) -> &mut ItemStyle {
        self.item_style.get_or_insert_with(ItemStyle::default)
    }

    /// Hover style with properties inherited from the item style applied.
    pub fn resolved_hover_style(&self) -> ItemHoverStyle {
        let hover = self.item_hover_style.clone().unwrap_or_default();
        match &self.item_style {
            Some(base) => hover.inherit_from(base),
            None => hover,
        }
    }

    /// Replace the hover style with its resolved form.
    pub fn resolve_inheritance(&mut self) {
        let resolved = self.resolved_hover_style();
        if !resolved.is_empty_params() {
            self.item_hover_style = Some(resolved);
        }
    }
}

impl JsonParams for Legend {}

//! Chart options schema types.
//!
//! Every field is optional and left out of the serialized params until it
//! is assigned, so the engine applies its own defaults for anything the
//! caller did not set.

mod item_hover_style;
mod item_style;
mod legend;

pub use item_hover_style::*;
pub use item_style::*;
pub use legend::*;

use serde::{Deserialize, Serialize};

use crate::params::JsonParams;

/// Root of the options tree handed to the chart engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
}

impl ChartOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn legend_mut(&mut self) -> &mut Legend {
        self.legend.get_or_insert_with(Legend::default)
    }

    /// Apply hover style inheritance throughout the tree.
    pub fn resolve_inheritance(&mut self) {
        if let Some(legend) = self.legend.as_mut() {
            legend.resolve_inheritance();
        }
    }

    /// Engine payload as a pretty-printed JSON string.
    pub fn try_to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.params())
    }

    /// Like [`ChartOptions::try_to_json`], but reports a serializer failure
    /// inside the returned document.
    pub fn to_json(&self) -> String {
        self.try_to_json()
            .unwrap_or_else(|e| error_document(&format!("failed to serialize options: {e}")))
    }
}

impl JsonParams for ChartOptions {}

fn error_document(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_options_are_empty() {
        let options = ChartOptions::default();
        assert!(options.params().is_empty());
        assert_eq!(options.to_json(), "{}");
    }

    #[test]
    fn payload_nests_hover_color() {
        let mut options = ChartOptions::new();
        options
            .legend_mut()
            .item_hover_style_mut()
            .set_color("#FF0000");
        let payload: serde_json::Value = serde_json::from_str(&options.to_json()).unwrap();
        assert_eq!(
            payload,
            json!({ "legend": { "itemHoverStyle": { "color": "#FF0000" } } })
        );
    }

    #[test]
    fn payload_never_contains_null() {
        let mut options = ChartOptions::new();
        options.legend_mut().enabled = Some(true);
        let json = options.to_json();
        assert!(!json.contains("null"));
        assert!(!json.contains("itemHoverStyle"));
    }

    #[test]
    fn options_round_trip_through_json() {
        let mut options = ChartOptions::new();
        options.legend_mut().item_hover_style_mut().set_color("#abcdef");
        options.legend_mut().item_style_mut().font_size = Some("12px".into());
        let parsed: ChartOptions = serde_json::from_str(&options.to_json()).unwrap();
        assert_eq!(parsed, options);
    }

    #[test]
    fn error_document_escapes_message() {
        let doc = error_document(r#"bad "quote" and \ backslash"#);
        let parsed: serde_json::Value = serde_json::from_str(&doc).unwrap();
        assert_eq!(parsed, json!({ "error": r#"bad "quote" and \ backslash"# }));
    }

    #[test]
    fn resolve_inheritance_without_legend_is_noop() {
        let mut options = ChartOptions::new();
        options.resolve_inheritance();
        assert_eq!(options, ChartOptions::new());
    }
}

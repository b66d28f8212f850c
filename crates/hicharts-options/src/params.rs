//! Serialization of options nodes into the key/value mapping the chart
//! engine consumes.

use serde::Serialize;
use serde_json::{Map, Value};

/// Key/value mapping produced by an options node.
pub type Params = Map<String, Value>;

/// Implemented by every node of the options tree.
///
/// The default `params` goes through serde, so a node only has to mark its
/// optional fields with `skip_serializing_if = "Option::is_none"` to keep
/// unset attributes out of the mapping.
pub trait JsonParams: Serialize {
    fn params(&self) -> Params {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                tracing::warn!("options node serialized to a non-object value: {other}");
                Params::new()
            }
            Err(e) => {
                tracing::warn!("failed to serialize options node: {e}");
                Params::new()
            }
        }
    }

    /// True when no attribute of the node has been assigned.
    fn is_empty_params(&self) -> bool {
        self.params().is_empty()
    }
}

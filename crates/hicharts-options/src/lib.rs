//! Chart options for the legend hover state.
//!
//! Options nodes hold optional, unvalidated attributes and turn themselves
//! into the key/value params a JavaScript chart engine consumes. Unset
//! attributes never reach the params, so the engine keeps its defaults.
//!
//! # Quick Start
//!
//! ```rust
//! use hicharts_options::{ChartOptions, JsonParams};
//!
//! let mut options = ChartOptions::new();
//! options.legend_mut().item_hover_style_mut().set_color("#FF0000");
//! assert_eq!(
//!     options.params()["legend"]["itemHoverStyle"]["color"],
//!     "#FF0000"
//! );
//! ```

pub mod colors;
pub mod options_loader;
pub mod options_writer;
pub mod params;
pub mod schema;
pub mod validation;

// Re-export core types for convenience
pub use options_loader::{load_default, load_from_path};
pub use options_writer::save_options_to_path;
pub use params::{JsonParams, Params};
pub use schema::{ChartOptions, ItemHoverStyle, ItemStyle, Legend, DEFAULT_HOVER_COLOR};

//! Options file loading and creation.

mod loader;
mod paths;
mod template;


pub use loader::{load_default, load_from_path, parse_options, OptionsFormat};
pub use paths::{create_default_options, default_options_path};

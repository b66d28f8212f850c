pub mod errors;
pub mod types;

pub use errors::{HichartsError, OptionsError};
pub use types::Color;

pub type Result<T> = std::result::Result<T, HichartsError>;

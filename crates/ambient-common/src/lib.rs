pub mod errors;
pub mod types;

pub use errors::{AmbientError, ConfigError};
pub use types::Color;

pub type Result<T> = std::result::Result<T, AmbientError>;

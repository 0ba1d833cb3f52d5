pub mod errors;
pub mod types;

pub use errors::{ConfigError, IcosaError};
pub use types::{Color, PixelSize};

pub type Result<T> = std::result::Result<T, IcosaError>;

//! Common types shared across the raster-viz crates.

pub mod color;
pub mod error;

pub use color::Color;
pub use error::{CodecError, ConfigError, ConfigResult};

//! Rendering engine for gridded raster data.
//!
//! Maps numeric arrays to RGBA images through a configured renderer:
//! - Stretched: continuous piecewise-linear color ramps (RGB or HSV
//!   interpolation)
//! - Classified: discrete right-open value bins
//! - Unique: exact-value lookup
//!
//! Renderers are validated once at construction and immutable afterwards;
//! applying one is a pure function, safe to call from any number of threads.

pub mod classified;
pub mod codec;
pub mod colormap;
pub mod legend;
pub mod palette;
pub mod raster;
pub mod stretched;
pub mod unique;

pub use classified::ClassifiedRenderer;
pub use colormap::{ColorMap, ColorStop};
pub use legend::{LegendElement, LegendOptions};
pub use palette::StretchRange;
pub use raster::Renderer;
pub use stretched::{ColorSpace, StretchedRenderer};
pub use unique::UniqueValuesRenderer;

//! Discrete value-to-color mapping over right-open bins.

use raster_common::Color;

use crate::colormap::{is_nodata, ColorMap};

/// Maps class breaks to colors.
///
/// Each stop opens a bin: a value takes the color of the greatest stop whose
/// value is `<= x`. Values below the first stop clamp to the first stop's
/// color; the last stop's bin is unbounded above. NaN inputs and the
/// configured fill value render fully transparent (fill comparison as for
/// [`crate::StretchedRenderer`]).
#[derive(Debug, Clone)]
pub struct ClassifiedRenderer {
    colormap: ColorMap,
    fill: Option<f64>,
}

impl ClassifiedRenderer {
    /// A classified renderer needs at least one stop, which [`ColorMap`]
    /// construction already guarantees.
    pub fn new(colormap: ColorMap, fill: Option<f64>) -> Self {
        Self { colormap, fill }
    }

    pub fn colormap(&self) -> &ColorMap {
        &self.colormap
    }

    pub fn fill(&self) -> Option<f64> {
        self.fill
    }

    pub fn apply(&self, x: f64) -> Color {
        if x.is_nan() || is_nodata(self.fill, x) {
            return Color::transparent();
        }

        self.colormap.stops()[self.colormap.bin(x)].color
    }
}

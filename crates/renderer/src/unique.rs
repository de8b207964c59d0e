//! Exact-value color lookup.

use raster_common::{Color, ConfigError};

use crate::colormap::{is_nodata, ColorMap};

/// Maps individual values to colors; anything not in the table renders
/// transparent.
///
/// Optional labels (one per stop, in stop order) are carried for legend
/// output.
#[derive(Debug, Clone)]
pub struct UniqueValuesRenderer {
    colormap: ColorMap,
    labels: Option<Vec<String>>,
    fill: Option<f64>,
}

impl UniqueValuesRenderer {
    pub fn new(
        colormap: ColorMap,
        labels: Option<Vec<String>>,
        fill: Option<f64>,
    ) -> Result<Self, ConfigError> {
        if let Some(labels) = &labels {
            if labels.len() != colormap.len() {
                return Err(ConfigError::LabelCountMismatch {
                    stops: colormap.len(),
                    labels: labels.len(),
                });
            }
        }

        Ok(Self {
            colormap,
            labels,
            fill,
        })
    }

    pub fn colormap(&self) -> &ColorMap {
        &self.colormap
    }

    pub fn labels(&self) -> Option<&[String]> {
        self.labels.as_deref()
    }

    pub fn fill(&self) -> Option<f64> {
        self.fill
    }

    pub fn apply(&self, x: f64) -> Color {
        if x.is_nan() || is_nodata(self.fill, x) {
            return Color::transparent();
        }

        let stops = self.colormap.stops();
        match stops.binary_search_by(|stop| stop.value.total_cmp(&x)) {
            Ok(index) => stops[index].color,
            Err(_) => Color::transparent(),
        }
    }
}

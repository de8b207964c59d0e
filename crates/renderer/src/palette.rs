//! Named color palettes and stretch ranges.
//!
//! A static registry keyed by dotted, palettable-style identifiers
//! (`colorbrewer.sequential.Blues_9`) stands in for a runtime palette
//! library: the external string interface is unchanged, the lookup is a
//! compile-time table.

use raster_common::{Color, ConfigError};

use crate::colormap::{is_nodata, ColorMap, ColorStop};
use crate::stretched::{ColorSpace, StretchedRenderer};

// ============================================================================
// Palette tables
// ============================================================================

const BLUES_9: &[&str] = &[
    "#F7FBFF", "#DEEBF7", "#C6DBEF", "#9ECAE1", "#6BAED6", "#4292C6", "#2171B5", "#08519C",
    "#08306B",
];

const GREENS_9: &[&str] = &[
    "#F7FCF5", "#E5F5E0", "#C7E9C0", "#A1D99B", "#74C476", "#41AB5D", "#238B45", "#006D2C",
    "#00441B",
];

const ORANGES_9: &[&str] = &[
    "#FFF5EB", "#FEE6CE", "#FDD0A2", "#FDAE6B", "#FD8D3C", "#F16913", "#D94801", "#A63603",
    "#7F2704",
];

const REDS_9: &[&str] = &[
    "#FFF5F0", "#FEE0D2", "#FCBBA1", "#FC9272", "#FB6A4A", "#EF3B2C", "#CB181D", "#A50F15",
    "#67000D",
];

const PURPLES_9: &[&str] = &[
    "#FCFBFD", "#EFEDF5", "#DADAEB", "#BCBDDC", "#9E9AC8", "#807DBA", "#6A51A3", "#54278F",
    "#3F007D",
];

const YLORRD_5: &[&str] = &["#FFFFB2", "#FECC5C", "#FD8D3C", "#F03B20", "#BD0026"];

const RDYLGN_5: &[&str] = &["#D7191C", "#FDAE61", "#FFFFBF", "#A6D96A", "#1A9641"];

const RDBU_11: &[&str] = &[
    "#67001F", "#B2182B", "#D6604D", "#F4A582", "#FDDBC7", "#F7F7F7", "#D1E5F0", "#92C5DE",
    "#4393C3", "#2166AC", "#053061",
];

const RDYLBU_11: &[&str] = &[
    "#A50026", "#D73027", "#F46D43", "#FDAE61", "#FEE090", "#FFFFBF", "#E0F3F8", "#ABD9E9",
    "#74ADD1", "#4575B4", "#313695",
];

const RDYLGN_11: &[&str] = &[
    "#A50026", "#D73027", "#F46D43", "#FDAE61", "#FEE08B", "#FFFFBF", "#D9EF8B", "#A6D96A",
    "#66BD63", "#1A9850", "#006837",
];

const SPECTRAL_11: &[&str] = &[
    "#9E0142", "#D53E4F", "#F46D43", "#FDAE61", "#FEE08B", "#FFFFBF", "#E6F598", "#ABDDA4",
    "#66C2A5", "#3288BD", "#5E4FA2",
];

const BRBG_11: &[&str] = &[
    "#543005", "#8C510A", "#BF812D", "#DFC27D", "#F6E8C3", "#F5F5F5", "#C7EAE5", "#80CDC1",
    "#35978F", "#01665E", "#003C30",
];

const PIYG_11: &[&str] = &[
    "#8E0152", "#C51B7D", "#DE77AE", "#F1B6DA", "#FDE0EF", "#F7F7F7", "#E6F5D0", "#B8E186",
    "#7FBC41", "#4D9221", "#276419",
];

const VIRIDIS_10: &[&str] = &[
    "#440154", "#482878", "#3E4A89", "#31688E", "#26828E", "#1F9E89", "#35B779", "#6ECE58",
    "#B5DE2B", "#FDE725",
];

const PLASMA_10: &[&str] = &[
    "#0D0887", "#46039F", "#7201A8", "#9C179E", "#BD3786", "#D8576B", "#ED7953", "#FB9F3A",
    "#FDCA26", "#F0F921",
];

const MAGMA_10: &[&str] = &[
    "#000004", "#180F3D", "#440F76", "#721F81", "#9E2F7F", "#CD4071", "#F1605D", "#FD9668",
    "#FECA8D", "#FCFDBF",
];

const INFERNO_10: &[&str] = &[
    "#000004", "#1B0C41", "#4A0C6B", "#781C6D", "#A52C60", "#CF4446", "#ED6925", "#FB9B06",
    "#F7D13D", "#FCFFA4",
];

/// Identifiers accepted by [`palette_colors`].
pub const AVAILABLE_PALETTES: &[&str] = &[
    "colorbrewer.sequential.Blues_9",
    "colorbrewer.sequential.Greens_9",
    "colorbrewer.sequential.Oranges_9",
    "colorbrewer.sequential.Reds_9",
    "colorbrewer.sequential.Purples_9",
    "colorbrewer.sequential.YlOrRd_5",
    "colorbrewer.diverging.RdYlGn_5",
    "colorbrewer.diverging.RdBu_11",
    "colorbrewer.diverging.RdYlBu_11",
    "colorbrewer.diverging.RdYlGn_11",
    "colorbrewer.diverging.Spectral_11",
    "colorbrewer.diverging.BrBG_11",
    "colorbrewer.diverging.PiYG_11",
    "matplotlib.Viridis_10",
    "matplotlib.Plasma_10",
    "matplotlib.Magma_10",
    "matplotlib.Inferno_10",
];

/// Resolve a dotted palette identifier to its ordered hex color list.
pub fn palette_colors(name: &str) -> Option<&'static [&'static str]> {
    let colors = match name {
        "colorbrewer.sequential.Blues_9" => BLUES_9,
        "colorbrewer.sequential.Greens_9" => GREENS_9,
        "colorbrewer.sequential.Oranges_9" => ORANGES_9,
        "colorbrewer.sequential.Reds_9" => REDS_9,
        "colorbrewer.sequential.Purples_9" => PURPLES_9,
        "colorbrewer.sequential.YlOrRd_5" => YLORRD_5,
        "colorbrewer.diverging.RdYlGn_5" => RDYLGN_5,
        "colorbrewer.diverging.RdBu_11" => RDBU_11,
        "colorbrewer.diverging.RdYlBu_11" => RDYLBU_11,
        "colorbrewer.diverging.RdYlGn_11" => RDYLGN_11,
        "colorbrewer.diverging.Spectral_11" => SPECTRAL_11,
        "colorbrewer.diverging.BrBG_11" => BRBG_11,
        "colorbrewer.diverging.PiYG_11" => PIYG_11,
        "matplotlib.Viridis_10" => VIRIDIS_10,
        "matplotlib.Plasma_10" => PLASMA_10,
        "matplotlib.Magma_10" => MAGMA_10,
        "matplotlib.Inferno_10" => INFERNO_10,
        _ => return None,
    };
    Some(colors)
}

// ============================================================================
// Stop synthesis
// ============================================================================

/// Build evenly spaced color stops spanning `[lo, hi]` from a named palette.
///
/// A palette of N colors yields N stops at `lo + i * (hi - lo) / (N - 1)`.
pub fn stops_from_palette(name: &str, lo: f64, hi: f64) -> Result<ColorMap, ConfigError> {
    let colors =
        palette_colors(name).ok_or_else(|| ConfigError::UnknownPalette(name.to_string()))?;

    if !lo.is_finite() || !hi.is_finite() || lo >= hi {
        return Err(ConfigError::DegenerateRange { lo, hi });
    }

    tracing::debug!(palette = name, lo, hi, "Resolved named palette");

    let count = colors.len();
    let step = (hi - lo) / (count - 1) as f64;

    let stops = colors
        .iter()
        .enumerate()
        .map(|(i, hex)| {
            // Pin the endpoint exactly; accumulated steps can drift.
            let value = if i == count - 1 { hi } else { lo + i as f64 * step };
            Ok(ColorStop::new(value, Color::from_hex(hex)?))
        })
        .collect::<Result<Vec<_>, ConfigError>>()?;

    ColorMap::new(stops)
}

/// Build a stretched renderer from a named palette over `[lo, hi]`.
///
/// Palette color lists are RGB ramps, so interpolation uses the RGB
/// colorspace.
pub fn palette_to_stretched(
    name: &str,
    lo: f64,
    hi: f64,
    fill: Option<f64>,
) -> Result<StretchedRenderer, ConfigError> {
    let colormap = stops_from_palette(name, lo, hi)?;
    StretchedRenderer::new(colormap, ColorSpace::Rgb, fill)
}

// ============================================================================
// Stretch ranges
// ============================================================================

/// The value range over which a named palette is stretched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StretchRange {
    /// Derive the range from the data's actual extrema at render time.
    Data,
    Explicit { lo: f64, hi: f64 },
}

impl StretchRange {
    /// Parse a `"min,max"` range literal: either two numbers, or the bare
    /// tokens `min` and `max` meaning "use the data extrema".
    pub fn parse(literal: &str) -> Result<Self, ConfigError> {
        let malformed = || ConfigError::MalformedStretchRange(literal.to_string());

        let (lo, hi) = literal.split_once(',').ok_or_else(malformed)?;
        let (lo, hi) = (lo.trim(), hi.trim());

        if lo == "min" && hi == "max" {
            return Ok(StretchRange::Data);
        }

        let lo: f64 = lo.parse().map_err(|_| malformed())?;
        let hi: f64 = hi.parse().map_err(|_| malformed())?;
        if !lo.is_finite() || !hi.is_finite() {
            return Err(malformed());
        }
        if lo >= hi {
            return Err(ConfigError::DegenerateRange { lo, hi });
        }

        Ok(StretchRange::Explicit { lo, hi })
    }

    /// Resolve to concrete bounds, scanning `data` when needed.
    ///
    /// NaN values and the configured fill value are skipped during the scan.
    pub fn resolve(&self, data: &[f64], fill: Option<f64>) -> Result<(f64, f64), ConfigError> {
        match *self {
            StretchRange::Explicit { lo, hi } => Ok((lo, hi)),
            StretchRange::Data => {
                let mut lo = f64::INFINITY;
                let mut hi = f64::NEG_INFINITY;

                for &value in data {
                    if value.is_nan() || is_nodata(fill, value) {
                        continue;
                    }
                    lo = lo.min(value);
                    hi = hi.max(value);
                }

                if !lo.is_finite() || !hi.is_finite() || lo >= hi {
                    return Err(ConfigError::DegenerateRange { lo, hi });
                }

                Ok((lo, hi))
            }
        }
    }
}

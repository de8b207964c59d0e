//! Continuous value-to-color mapping via piecewise-linear interpolation.

use raster_common::{Color, ConfigError};

use crate::colormap::{is_nodata, ColorMap};

/// The colorspace used to interpolate between two adjacent color stops.
///
/// HSV interpolates hue along the shorter arc of the color circle, which
/// produces smoother ramps for diverging and sequential schemes than
/// channel-wise RGB interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    Rgb,
    Hsv,
}

impl ColorSpace {
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rgb" => Ok(ColorSpace::Rgb),
            "hsv" => Ok(ColorSpace::Hsv),
            _ => Err(ConfigError::InvalidColorspace(s.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorSpace::Rgb => "rgb",
            ColorSpace::Hsv => "hsv",
        }
    }
}

/// Maps a continuous color ramp across the stop table's value range.
///
/// Values at or below the first stop take the first stop's color; values at
/// or above the last stop take the last stop's color. Values in between are
/// interpolated within their segment. NaN inputs and the configured fill
/// value render fully transparent; fill comparison is exact floating-point
/// equality (a NaN fill matches NaN inputs).
#[derive(Debug, Clone)]
pub struct StretchedRenderer {
    colormap: ColorMap,
    colorspace: ColorSpace,
    fill: Option<f64>,
}

impl StretchedRenderer {
    pub fn new(
        colormap: ColorMap,
        colorspace: ColorSpace,
        fill: Option<f64>,
    ) -> Result<Self, ConfigError> {
        if colormap.len() < 2 {
            return Err(ConfigError::InsufficientStops {
                kind: "Stretched renderer",
                required: 2,
                actual: colormap.len(),
            });
        }

        Ok(Self {
            colormap,
            colorspace,
            fill,
        })
    }

    pub fn colormap(&self) -> &ColorMap {
        &self.colormap
    }

    pub fn colorspace(&self) -> ColorSpace {
        self.colorspace
    }

    pub fn fill(&self) -> Option<f64> {
        self.fill
    }

    pub fn apply(&self, x: f64) -> Color {
        if x.is_nan() || is_nodata(self.fill, x) {
            return Color::transparent();
        }

        let stops = self.colormap.stops();
        if x <= stops[0].value {
            return stops[0].color;
        }
        if x >= stops[stops.len() - 1].value {
            return stops[stops.len() - 1].color;
        }

        let (index, t) = self.colormap.segment(x);
        let from = stops[index].color;
        let to = stops[index + 1].color;
        if t == 0.0 || from == to {
            return from;
        }

        match self.colorspace {
            ColorSpace::Rgb => interpolate_rgb(from, to, t),
            ColorSpace::Hsv => interpolate_hsv(from, to, t),
        }
    }
}

fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 * (1.0 - t) + b as f64 * t).round() as u8
}

fn interpolate_rgb(from: Color, to: Color, t: f64) -> Color {
    Color::new(
        lerp_channel(from.r, to.r, t),
        lerp_channel(from.g, to.g, t),
        lerp_channel(from.b, to.b, t),
        lerp_channel(from.a, to.a, t),
    )
}

/// Signed angular distance from `h0` to `h1` along the shorter arc, degrees.
fn shortest_hue_delta(h0: f64, h1: f64) -> f64 {
    (h1 - h0 + 540.0).rem_euclid(360.0) - 180.0
}

fn interpolate_hsv(from: Color, to: Color, t: f64) -> Color {
    let (mut h0, s0, v0) = from.to_hsv();
    let (mut h1, s1, v1) = to.to_hsv();

    // Hue is meaningless at zero saturation; pin a grey endpoint's hue to the
    // other endpoint so ramps to or from grey hold a single hue.
    if s0 == 0.0 {
        h0 = h1;
    } else if s1 == 0.0 {
        h1 = h0;
    }

    let h = (h0 + shortest_hue_delta(h0, h1) * t).rem_euclid(360.0);
    let s = s0 * (1.0 - t) + s1 * t;
    let v = v0 * (1.0 - t) + v1 * t;

    Color::from_hsv(h, s, v, lerp_channel(from.a, to.a, t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortest_hue_delta_wraps() {
        assert_eq!(shortest_hue_delta(350.0, 10.0), 20.0);
        assert_eq!(shortest_hue_delta(10.0, 350.0), -20.0);
        assert_eq!(shortest_hue_delta(0.0, 90.0), 90.0);
        assert_eq!(shortest_hue_delta(90.0, 0.0), -90.0);
    }

    #[test]
    fn test_lerp_channel_rounds() {
        assert_eq!(lerp_channel(0, 255, 0.5), 128);
        assert_eq!(lerp_channel(0, 255, 0.0), 0);
        assert_eq!(lerp_channel(0, 255, 1.0), 255);
    }
}

//! Legend image construction.
//!
//! A legend is built in two steps: [`build_legend`] turns a renderer into
//! [`LegendElement`]s (a color-key image plus normalized tick positions and
//! label strings), and [`composite_legend`] renders elements, tick lines,
//! and labels into a single image using a caller-supplied font.

use image::{imageops, Rgba, RgbaImage};
use imageproc::drawing::{draw_line_segment_mut, draw_text_mut};
use rusttype::{point, Font, Scale};

use raster_common::ConfigError;

use crate::colormap::ColorMap;
use crate::raster::Renderer;
use crate::stretched::StretchedRenderer;

const LABEL_FONT_SIZE: f32 = 14.0;
const LABEL_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);
const TICK_COLOR: Rgba<u8> = Rgba([150, 150, 150, 255]);
/// Horizontal gap between the color key and its labels.
const LABEL_X_PADDING: u32 = 10;

/// Legend layout options.
///
/// Explicit `ticks` take precedence over `breaks`; with neither set, a
/// stretched legend ticks at its stop values. Defaults match the CLI
/// defaults (20x150 px key, 2 decimal places).
#[derive(Debug, Clone)]
pub struct LegendOptions {
    /// Width of the color key in pixels.
    pub bar_width: u32,
    /// Height of the color key in pixels.
    pub bar_height: u32,
    /// Number of evenly spaced ticks from domain min to max, inclusive.
    pub breaks: Option<u32>,
    /// Explicit tick values; each must lie within the renderer domain.
    pub ticks: Option<Vec<f64>>,
    /// Per-stop labels for classified and unique legends.
    pub labels: Option<Vec<String>>,
    /// Decimal places for numeric labels.
    pub precision: usize,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            bar_width: 20,
            bar_height: 150,
            breaks: None,
            ticks: None,
            labels: None,
            precision: 2,
        }
    }
}

/// A single legend image plus its tick positions and labels.
///
/// Ticks are normalized offsets from the bottom (0.0) to the top (1.0) of
/// the image; labels correspond to ticks at the same index.
#[derive(Debug, Clone)]
pub struct LegendElement {
    pub image: RgbaImage,
    pub ticks: Vec<f64>,
    pub labels: Vec<String>,
}

/// Build legend elements for a renderer.
///
/// A stretched renderer yields one gradient element; classified and unique
/// renderers yield one solid block per stop, labeled center-aligned.
pub fn build_legend(
    renderer: &Renderer,
    options: &LegendOptions,
) -> Result<Vec<LegendElement>, ConfigError> {
    match renderer {
        Renderer::Stretched(r) => stretched_legend(r, options).map(|element| vec![element]),
        Renderer::Classified(r) => block_legend(r.colormap(), options.labels.as_deref(), options),
        Renderer::Unique(r) => block_legend(
            r.colormap(),
            options.labels.as_deref().or_else(|| r.labels()),
            options,
        ),
    }
}

fn format_label(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value)
}

fn stretched_legend(
    renderer: &StretchedRenderer,
    options: &LegendOptions,
) -> Result<LegendElement, ConfigError> {
    let lo = renderer.colormap().min_value();
    let hi = renderer.colormap().max_value();

    let tick_values = resolve_ticks(renderer.colormap(), options, lo, hi)?;
    let ticks = tick_values.iter().map(|v| (v - lo) / (hi - lo)).collect();
    let labels = tick_values
        .iter()
        .map(|v| format_label(*v, options.precision))
        .collect();

    // Sample the gradient top (max) to bottom (min).
    let width = options.bar_width.max(1);
    let height = options.bar_height.max(1);
    let mut image = RgbaImage::new(width, height);
    for y in 0..height {
        let frac = if height == 1 {
            0.0
        } else {
            y as f64 / (height - 1) as f64
        };
        let color = renderer.apply(hi - frac * (hi - lo));
        for x in 0..width {
            image.put_pixel(x, y, Rgba([color.r, color.g, color.b, color.a]));
        }
    }

    Ok(LegendElement {
        image,
        ticks,
        labels,
    })
}

fn resolve_ticks(
    colormap: &ColorMap,
    options: &LegendOptions,
    lo: f64,
    hi: f64,
) -> Result<Vec<f64>, ConfigError> {
    if let Some(ticks) = &options.ticks {
        for &value in ticks {
            if !(lo..=hi).contains(&value) {
                return Err(ConfigError::TickOutOfRange {
                    value,
                    min: lo,
                    max: hi,
                });
            }
        }
        let mut ticks = ticks.clone();
        ticks.sort_by(f64::total_cmp);
        Ok(ticks)
    } else if let Some(breaks) = options.breaks {
        Ok(linspace(lo, hi, breaks as usize))
    } else {
        Ok(colormap.stops().iter().map(|s| s.value).collect())
    }
}

fn linspace(lo: f64, hi: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![lo],
        _ => (0..count)
            .map(|i| lo + (hi - lo) * i as f64 / (count - 1) as f64)
            .collect(),
    }
}

fn block_legend(
    colormap: &ColorMap,
    labels: Option<&[String]>,
    options: &LegendOptions,
) -> Result<Vec<LegendElement>, ConfigError> {
    if let Some(labels) = labels {
        if labels.len() != colormap.len() {
            return Err(ConfigError::LabelCountMismatch {
                stops: colormap.len(),
                labels: labels.len(),
            });
        }
    }

    let width = options.bar_width.max(1);
    let block_height = (options.bar_height / colormap.len() as u32).max(1);

    Ok(colormap
        .stops()
        .iter()
        .enumerate()
        .map(|(index, stop)| {
            let label = match labels {
                Some(labels) => labels[index].clone(),
                None => format_label(stop.value, options.precision),
            };
            let color = Rgba([stop.color.r, stop.color.g, stop.color.b, stop.color.a]);

            LegendElement {
                image: RgbaImage::from_pixel(width, block_height, color),
                ticks: vec![0.5],
                labels: vec![label],
            }
        })
        .collect())
}

/// Render legend elements into a single image: color keys on the left,
/// tick lines and labels on the right, elements stacked top to bottom with
/// `padding` pixels between them.
pub fn composite_legend(elements: &[LegendElement], font: &Font<'_>, padding: u32) -> RgbaImage {
    let scale = Scale::uniform(LABEL_FONT_SIZE);
    let v_metrics = font.v_metrics(scale);
    let text_height = (v_metrics.ascent - v_metrics.descent).ceil() as u32;

    let key_width = elements.iter().map(|e| e.image.width()).max().unwrap_or(0);
    let label_width = elements
        .iter()
        .flat_map(|e| e.labels.iter())
        .map(|label| text_width(font, scale, label).ceil() as u32)
        .max()
        .unwrap_or(0);

    let width = key_width + 2 * LABEL_X_PADDING + label_width;
    let height: u32 = elements
        .iter()
        .map(|e| e.image.height() + 2 * text_height + padding)
        .sum::<u32>()
        .saturating_sub(padding);

    let mut canvas = RgbaImage::new(width.max(1), height.max(1));

    let mut offset = 0u32;
    for element in elements {
        // Text-height headroom above the key keeps the top label readable.
        let key_top = offset + text_height;
        imageops::replace(&mut canvas, &element.image, 0, key_top as i64);

        let key_height = element.image.height();
        for (tick, label) in element.ticks.iter().zip(&element.labels) {
            let tick_y =
                key_top as f32 + (1.0 - *tick as f32) * key_height.saturating_sub(1) as f32;

            draw_line_segment_mut(
                &mut canvas,
                (element.image.width() as f32 + 2.0, tick_y),
                (
                    (element.image.width() + LABEL_X_PADDING) as f32 - 4.0,
                    tick_y,
                ),
                TICK_COLOR,
            );

            let label_y = (tick_y - text_height as f32 / 2.0).round() as i32;
            draw_text_mut(
                &mut canvas,
                LABEL_COLOR,
                (key_width + LABEL_X_PADDING) as i32,
                label_y.max(0),
                scale,
                font,
                label,
            );
        }

        offset += key_height + 2 * text_height + padding;
    }

    canvas
}

fn text_width(font: &Font<'_>, scale: Scale, text: &str) -> f32 {
    font.layout(text, scale, point(0.0, 0.0))
        .last()
        .map(|glyph| glyph.position().x + glyph.unpositioned().h_metrics().advance_width)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_inclusive() {
        assert_eq!(linspace(0.0, 100.0, 5), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
        assert_eq!(linspace(0.0, 1.0, 2), vec![0.0, 1.0]);
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_format_label_fixed_precision() {
        assert_eq!(format_label(25.0, 2), "25.00");
        assert_eq!(format_label(0.5, 1), "0.5");
        assert_eq!(format_label(-3.0, 0), "-3");
    }
}

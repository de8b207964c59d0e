//! Renderer dispatch and whole-array rendering.

use image::RgbaImage;
use rayon::prelude::*;

use raster_common::Color;

use crate::classified::ClassifiedRenderer;
use crate::colormap::ColorMap;
use crate::stretched::StretchedRenderer;
use crate::unique::UniqueValuesRenderer;

/// Minimum pixels before per-row parallel rendering pays off.
const PARALLEL_THRESHOLD: usize = 4096; // 64x64 or larger

/// A fully-configured renderer, selected at construction time.
///
/// Immutable once built; [`Renderer::apply`] is a pure function and safe to
/// call concurrently from any number of threads.
#[derive(Debug, Clone)]
pub enum Renderer {
    Stretched(StretchedRenderer),
    Classified(ClassifiedRenderer),
    Unique(UniqueValuesRenderer),
}

impl Renderer {
    /// Map a single value to its RGBA color.
    pub fn apply(&self, x: f64) -> Color {
        match self {
            Renderer::Stretched(r) => r.apply(x),
            Renderer::Classified(r) => r.apply(x),
            Renderer::Unique(r) => r.apply(x),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Renderer::Stretched(_) => "stretched",
            Renderer::Classified(_) => "classified",
            Renderer::Unique(_) => "unique",
        }
    }

    pub fn colormap(&self) -> &ColorMap {
        match self {
            Renderer::Stretched(r) => r.colormap(),
            Renderer::Classified(r) => r.colormap(),
            Renderer::Unique(r) => r.colormap(),
        }
    }

    pub fn fill(&self) -> Option<f64> {
        match self {
            Renderer::Stretched(r) => r.fill(),
            Renderer::Classified(r) => r.fill(),
            Renderer::Unique(r) => r.fill(),
        }
    }
}

/// Render grid data element-wise into an RGBA8 pixel buffer.
///
/// # Arguments
/// - `data`: input grid values (row-major order)
/// - `width`: number of columns
/// - `height`: number of rows
///
/// # Returns
/// RGBA pixel data (4 bytes per pixel). If `data` is shorter than
/// `width * height`, trailing pixels stay transparent.
pub fn render_rgba(renderer: &Renderer, data: &[f64], width: usize, height: usize) -> Vec<u8> {
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let mut pixels = vec![0u8; width * height * 4];

    if width * height >= PARALLEL_THRESHOLD {
        pixels
            .par_chunks_mut(width * 4)
            .enumerate()
            .for_each(|(y, row)| render_row(renderer, data, width, y, row));
    } else {
        for (y, row) in pixels.chunks_mut(width * 4).enumerate() {
            render_row(renderer, data, width, y, row);
        }
    }

    pixels
}

fn render_row(renderer: &Renderer, data: &[f64], width: usize, y: usize, row: &mut [u8]) {
    for x in 0..width {
        let value = match data.get(y * width + x) {
            Some(&v) => v,
            None => break,
        };

        let color = renderer.apply(value);
        let pixel = &mut row[x * 4..x * 4 + 4];
        pixel[0] = color.r;
        pixel[1] = color.g;
        pixel[2] = color.b;
        pixel[3] = color.a;
    }
}

/// Force alpha to 0 wherever the mask is nonzero.
///
/// The mask must have one entry per pixel. On a size mismatch the mask is
/// ignored and a warning is logged; rendering itself never fails.
pub fn apply_mask(pixels: &mut [u8], mask: &[u8]) {
    if mask.len() * 4 != pixels.len() {
        tracing::warn!(
            mask_len = mask.len(),
            pixel_count = pixels.len() / 4,
            "Mask size does not match rendered array; ignoring mask"
        );
        return;
    }

    for (pixel, &masked) in pixels.chunks_exact_mut(4).zip(mask) {
        if masked != 0 {
            pixel[3] = 0;
        }
    }
}

/// Render grid data to an [`RgbaImage`], with optional mask and row flip.
///
/// `flip_y` mirrors the rows for sources stored bottom-up. The mask is
/// applied in data orientation, before any flip.
pub fn render_image(
    renderer: &Renderer,
    data: &[f64],
    width: usize,
    height: usize,
    mask: Option<&[u8]>,
    flip_y: bool,
) -> RgbaImage {
    let mut pixels = render_rgba(renderer, data, width, height);

    if let Some(mask) = mask {
        apply_mask(&mut pixels, mask);
    }
    if flip_y {
        flip_rows(&mut pixels, width, height);
    }

    let mut image = RgbaImage::new(width as u32, height as u32);
    image.copy_from_slice(&pixels);
    image
}

fn flip_rows(pixels: &mut [u8], width: usize, height: usize) {
    let stride = width * 4;
    for y in 0..height / 2 {
        let (head, tail) = pixels.split_at_mut((height - 1 - y) * stride);
        head[y * stride..(y + 1) * stride].swap_with_slice(&mut tail[..stride]);
    }
}

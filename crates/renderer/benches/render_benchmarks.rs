//! Benchmarks for array rendering.
//!
//! Run with: cargo bench --package renderer --bench render_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;

use renderer::raster::render_rgba;
use renderer::{ClassifiedRenderer, ColorMap, ColorSpace, Renderer, StretchedRenderer};

/// Generate a grid with a smooth ramp plus noise, spanning 0-100.
fn generate_grid(width: usize, height: usize) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    let mut data = vec![0.0f64; width * height];

    for y in 0..height {
        for x in 0..width {
            let base = (x + y) as f64 / (width + height) as f64 * 100.0;
            data[y * width + x] = base + rng.gen_range(-2.0..2.0);
        }
    }
    data
}

fn temperature_renderer(colorspace: ColorSpace) -> Renderer {
    let colormap =
        ColorMap::from_literal("0:#1E0082,25:#0096FF,50:#96FFC8,75:#FF9600,100:#960000").unwrap();
    Renderer::Stretched(StretchedRenderer::new(colormap, colorspace, None).unwrap())
}

fn bench_render_rgba(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_rgba");

    for size in [64usize, 256, 512] {
        let data = generate_grid(size, size);
        group.throughput(Throughput::Elements((size * size) as u64));

        let rgb = temperature_renderer(ColorSpace::Rgb);
        group.bench_with_input(BenchmarkId::new("stretched_rgb", size), &data, |b, data| {
            b.iter(|| render_rgba(black_box(&rgb), black_box(data), size, size));
        });

        let hsv = temperature_renderer(ColorSpace::Hsv);
        group.bench_with_input(BenchmarkId::new("stretched_hsv", size), &data, |b, data| {
            b.iter(|| render_rgba(black_box(&hsv), black_box(data), size, size));
        });

        let classified = Renderer::Classified(ClassifiedRenderer::new(
            ColorMap::from_literal("0:#1E0082,25:#0096FF,50:#96FFC8,75:#FF9600").unwrap(),
            None,
        ));
        group.bench_with_input(BenchmarkId::new("classified", size), &data, |b, data| {
            b.iter(|| render_rgba(black_box(&classified), black_box(data), size, size));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render_rgba);
criterion_main!(benches);

//! Tests for legend element construction.

use raster_common::ConfigError;
use renderer::legend::build_legend;
use renderer::{
    ClassifiedRenderer, ColorMap, ColorSpace, LegendOptions, Renderer, StretchedRenderer,
    UniqueValuesRenderer,
};

fn stretched(literal: &str) -> Renderer {
    Renderer::Stretched(
        StretchedRenderer::new(
            ColorMap::from_literal(literal).unwrap(),
            ColorSpace::Rgb,
            None,
        )
        .unwrap(),
    )
}

fn classified(literal: &str) -> Renderer {
    Renderer::Classified(ClassifiedRenderer::new(
        ColorMap::from_literal(literal).unwrap(),
        None,
    ))
}

// ============================================================================
// Stretched legends
// ============================================================================

#[test]
fn test_breaks_produce_evenly_spaced_ticks() {
    let renderer = stretched("0:#0000FF,100:#FF0000");
    let options = LegendOptions {
        breaks: Some(5),
        ..Default::default()
    };

    let elements = build_legend(&renderer, &options).unwrap();
    assert_eq!(elements.len(), 1);

    let element = &elements[0];
    assert_eq!(element.ticks, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    assert_eq!(element.labels, ["0.00", "25.00", "50.00", "75.00", "100.00"]);
}

#[test]
fn test_explicit_ticks_take_precedence_over_breaks() {
    let renderer = stretched("0:#0000FF,100:#FF0000");
    let options = LegendOptions {
        breaks: Some(5),
        ticks: Some(vec![80.0, 20.0]),
        precision: 1,
        ..Default::default()
    };

    let element = &build_legend(&renderer, &options).unwrap()[0];
    // Sorted ascending
    assert_eq!(element.ticks, vec![0.2, 0.8]);
    assert_eq!(element.labels, ["20.0", "80.0"]);
}

#[test]
fn test_default_ticks_are_the_stop_values() {
    let renderer = stretched("0:#0000FF,50:#00FF00,100:#FF0000");
    let element = &build_legend(&renderer, &LegendOptions::default()).unwrap()[0];

    assert_eq!(element.ticks, vec![0.0, 0.5, 1.0]);
    assert_eq!(element.labels, ["0.00", "50.00", "100.00"]);
}

#[test]
fn test_out_of_domain_tick_is_rejected() {
    let renderer = stretched("0:#0000FF,100:#FF0000");
    let options = LegendOptions {
        ticks: Some(vec![50.0, 120.0]),
        ..Default::default()
    };

    assert!(matches!(
        build_legend(&renderer, &options),
        Err(ConfigError::TickOutOfRange { value, .. }) if value == 120.0
    ));
}

#[test]
fn test_gradient_bar_samples_max_at_top() {
    let renderer = stretched("0:#0000FF,100:#FF0000");
    let options = LegendOptions {
        bar_width: 4,
        bar_height: 50,
        ..Default::default()
    };

    let element = &build_legend(&renderer, &options).unwrap()[0];
    assert_eq!(element.image.dimensions(), (4, 50));

    // Top row is the domain maximum (red), bottom row the minimum (blue)
    assert_eq!(element.image.get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(element.image.get_pixel(0, 49).0, [0, 0, 255, 255]);
}

#[test]
fn test_precision_formats_labels() {
    let renderer = stretched("0:#0000FF,1:#FF0000");
    let options = LegendOptions {
        breaks: Some(3),
        precision: 3,
        ..Default::default()
    };

    let element = &build_legend(&renderer, &options).unwrap()[0];
    assert_eq!(element.labels, ["0.000", "0.500", "1.000"]);
}

// ============================================================================
// Classified legends
// ============================================================================

#[test]
fn test_one_block_per_stop() {
    let renderer = classified("10:#FF0000,50:#00FF00,99:#0000FF");
    let options = LegendOptions {
        bar_width: 20,
        bar_height: 60,
        precision: 0,
        ..Default::default()
    };

    let elements = build_legend(&renderer, &options).unwrap();
    assert_eq!(elements.len(), 3);

    for element in &elements {
        assert_eq!(element.image.dimensions(), (20, 20));
        assert_eq!(element.ticks, vec![0.5]);
    }

    assert_eq!(elements[0].image.get_pixel(0, 0).0, [255, 0, 0, 255]);
    let labels: Vec<&str> = elements.iter().map(|e| e.labels[0].as_str()).collect();
    assert_eq!(labels, ["10", "50", "99"]);
}

#[test]
fn test_caller_labels_override_thresholds() {
    let renderer = classified("0:#FF0000,10:#00FF00");
    let options = LegendOptions {
        labels: Some(vec!["low".to_string(), "high".to_string()]),
        ..Default::default()
    };

    let elements = build_legend(&renderer, &options).unwrap();
    assert_eq!(elements[0].labels, ["low"]);
    assert_eq!(elements[1].labels, ["high"]);
}

#[test]
fn test_wrong_label_count_is_rejected() {
    let renderer = classified("0:#FF0000,10:#00FF00");
    let options = LegendOptions {
        labels: Some(vec!["only one".to_string()]),
        ..Default::default()
    };

    assert!(matches!(
        build_legend(&renderer, &options),
        Err(ConfigError::LabelCountMismatch { stops: 2, labels: 1 })
    ));
}

// ============================================================================
// Unique-value legends
// ============================================================================

#[test]
fn test_unique_legend_uses_stored_labels() {
    let colormap = ColorMap::from_literal("1:#FF0000,2:#00FF00").unwrap();
    let labels = Some(vec!["forest".to_string(), "water".to_string()]);
    let renderer =
        Renderer::Unique(UniqueValuesRenderer::new(colormap, labels, None).unwrap());

    let elements = build_legend(&renderer, &LegendOptions::default()).unwrap();
    assert_eq!(elements.len(), 2);
    assert_eq!(elements[0].labels, ["forest"]);
    assert_eq!(elements[1].labels, ["water"]);
}

#[test]
fn test_unique_legend_falls_back_to_values() {
    let colormap = ColorMap::from_literal("1:#FF0000,2:#00FF00").unwrap();
    let renderer = Renderer::Unique(UniqueValuesRenderer::new(colormap, None, None).unwrap());
    let options = LegendOptions {
        precision: 0,
        ..Default::default()
    };

    let elements = build_legend(&renderer, &options).unwrap();
    assert_eq!(elements[0].labels, ["1"]);
    assert_eq!(elements[1].labels, ["2"]);
}

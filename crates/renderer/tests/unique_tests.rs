//! Tests for the unique-values renderer.

use raster_common::{Color, ConfigError};
use renderer::{ColorMap, UniqueValuesRenderer};

fn unique(literal: &str, labels: Option<Vec<String>>) -> UniqueValuesRenderer {
    UniqueValuesRenderer::new(ColorMap::from_literal(literal).unwrap(), labels, None).unwrap()
}

#[test]
fn test_exact_match_lookup() {
    let renderer = unique("10:#FF0000,25:#FFFFFF,50:#00FF00", None);

    assert_eq!(renderer.apply(10.0), Color::opaque(255, 0, 0));
    assert_eq!(renderer.apply(25.0), Color::opaque(255, 255, 255));
    assert_eq!(renderer.apply(50.0), Color::opaque(0, 255, 0));
}

#[test]
fn test_near_misses_are_transparent() {
    let renderer = unique("10:#FF0000,25:#FFFFFF", None);

    assert_eq!(renderer.apply(10.0001).a, 0);
    assert_eq!(renderer.apply(24.9999).a, 0);
    assert_eq!(renderer.apply(0.0).a, 0);
}

#[test]
fn test_label_count_must_match_stops() {
    let colormap = ColorMap::from_literal("1:#FF0000,2:#00FF00").unwrap();
    let labels = Some(vec!["one".to_string()]);

    assert!(matches!(
        UniqueValuesRenderer::new(colormap, labels, None),
        Err(ConfigError::LabelCountMismatch {
            stops: 2,
            labels: 1
        })
    ));
}

#[test]
fn test_labels_follow_stop_order() {
    let labels = vec!["low".to_string(), "high".to_string()];
    let renderer = unique("1:#FF0000,2:#00FF00", Some(labels));

    assert_eq!(renderer.labels().unwrap(), ["low", "high"]);
}

#[test]
fn test_fill_is_transparent() {
    let colormap = ColorMap::from_literal("1:#FF0000,2:#00FF00").unwrap();
    let renderer = UniqueValuesRenderer::new(colormap, None, Some(2.0)).unwrap();

    // Fill wins even when the value is also a mapped stop
    assert_eq!(renderer.apply(2.0).a, 0);
    assert_eq!(renderer.apply(1.0).a, 255);
}

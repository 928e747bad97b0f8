#![cfg(test)]

use crate::dimension::PageSize;
use crate::font::{FontFamily, FontWeight};
use crate::stylesheet::{ColumnPolicy, Stylesheet};
use quire_types::Color;

#[test]
fn test_defaults_are_valid() {
    let stylesheet = Stylesheet::default();
    assert!(stylesheet.validate().is_ok());
    assert_eq!(stylesheet.page.width(), 595.0);
    assert_eq!(stylesheet.page.content_width(), 495.0);
}

#[test]
fn test_heading_sizes_step_down_per_level() {
    let stylesheet = Stylesheet::default();
    let h = &stylesheet.headings;
    assert_eq!(h.size_for_level(1), 24.0);
    assert_eq!(h.size_for_level(2), 21.0);
    assert_eq!(h.size_for_level(6), 9.0);
    // Out-of-range levels clamp rather than producing negative sizes.
    assert_eq!(h.size_for_level(0), 24.0);
    assert_eq!(h.size_for_level(9), 9.0);
}

#[test]
fn test_partial_json_keeps_defaults() {
    let json = r##"{
        "page": { "size": "Letter", "margin": "1in" },
        "body": { "font": { "family": "times", "size": 12 }, "lineHeight": 16 },
        "table": { "columnPolicy": "content", "headerFill": "#eee" },
        "showPageNumbers": true
    }"##;
    let stylesheet: Stylesheet = serde_json::from_str(json).unwrap();

    assert_eq!(stylesheet.page.size, PageSize::Letter);
    assert!((stylesheet.page.margin - 72.0).abs() < 0.01);
    assert_eq!(stylesheet.page.bottom_threshold, 72.0);
    assert_eq!(stylesheet.body.font.family, FontFamily::Times);
    assert_eq!(stylesheet.body.font.size, 12.0);
    assert_eq!(stylesheet.body.line_height, 16.0);
    assert_eq!(stylesheet.table.column_policy, ColumnPolicy::Content);
    assert_eq!(stylesheet.table.header_fill, Color::gray(0xee));
    assert_eq!(stylesheet.table.header_font.weight, FontWeight::Bold);
    assert!(stylesheet.show_page_numbers);
    assert_eq!(stylesheet.paragraph_gap, 10.0);
}

#[test]
fn test_custom_page_size_map() {
    let json = r#"{ "page": { "size": { "width": "100mm", "height": 400 } } }"#;
    let stylesheet: Stylesheet = serde_json::from_str(json).unwrap();
    let (width, height) = stylesheet.page.size.dimensions_pt();
    assert!((width - 283.5).abs() < 0.01);
    assert_eq!(height, 400.0);
}

#[test]
fn test_invalid_length_is_rejected() {
    let json = r#"{ "page": { "margin": "wide" } }"#;
    assert!(serde_json::from_str::<Stylesheet>(json).is_err());
}

#[test]
fn test_validate_rejects_margins_that_eat_the_page() {
    let mut stylesheet = Stylesheet::default();
    stylesheet.page.margin = 300.0;
    assert!(stylesheet.validate().is_err());

    let mut stylesheet = Stylesheet::default();
    stylesheet.code.line_height = 0.0;
    assert!(stylesheet.validate().is_err());
}

//! Standard-14 font resources.

use lopdf::{dictionary, Dictionary, Object};
use once_cell::sync::Lazy;
use quire_render_core::utils::{font_name_for, styled_font_name};
use quire_style::{FontFamily, FontSpec, FontStyle, FontWeight};
use std::collections::HashMap;

const FAMILIES: [FontFamily; 3] = [FontFamily::Helvetica, FontFamily::Times, FontFamily::Courier];
const WEIGHTS: [FontWeight; 2] = [FontWeight::Normal, FontWeight::Bold];
const STYLES: [FontStyle; 2] = [FontStyle::Normal, FontStyle::Italic];

/// PostScript name to resource name (`F1`..`F12`), in a fixed order.
static FONT_RESOURCES: Lazy<Vec<(&'static str, String)>> = Lazy::new(|| {
    FAMILIES
        .iter()
        .flat_map(|&family| {
            WEIGHTS.iter().flat_map(move |&weight| {
                STYLES
                    .iter()
                    .map(move |&style| styled_font_name(family, weight, style))
            })
        })
        .enumerate()
        .map(|(i, name)| (name, format!("F{}", i + 1)))
        .collect()
});

static RESOURCE_BY_FONT: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    FONT_RESOURCES
        .iter()
        .map(|(font, resource)| (*font, resource.as_str()))
        .collect()
});

/// The resource name a page content stream uses to select `font`.
pub fn resource_name(font: &FontSpec) -> &'static str {
    RESOURCE_BY_FONT
        .get(font_name_for(font))
        .copied()
        .unwrap_or("F1")
}

/// The `/Font` resource dictionary shared by every page.
pub fn font_dictionary() -> Dictionary {
    let mut fonts = Dictionary::new();
    for (base_font, resource) in FONT_RESOURCES.iter() {
        let font = dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => *base_font,
            "Encoding" => "WinAnsiEncoding",
        };
        fonts.set(resource.as_bytes(), Object::Dictionary(font));
    }
    fonts
}

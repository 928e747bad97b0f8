use quire_style::{FontFamily, FontSpec, FontStyle, FontWeight};

/// The standard-14 PostScript name for a family, weight and style.
pub fn styled_font_name(family: FontFamily, weight: FontWeight, style: FontStyle) -> &'static str {
    let bold = weight == FontWeight::Bold;
    let italic = style == FontStyle::Italic;
    match (family, bold, italic) {
        (FontFamily::Helvetica, false, false) => "Helvetica",
        (FontFamily::Helvetica, true, false) => "Helvetica-Bold",
        (FontFamily::Helvetica, false, true) => "Helvetica-Oblique",
        (FontFamily::Helvetica, true, true) => "Helvetica-BoldOblique",
        (FontFamily::Times, false, false) => "Times-Roman",
        (FontFamily::Times, true, false) => "Times-Bold",
        (FontFamily::Times, false, true) => "Times-Italic",
        (FontFamily::Times, true, true) => "Times-BoldItalic",
        (FontFamily::Courier, false, false) => "Courier",
        (FontFamily::Courier, true, false) => "Courier-Bold",
        (FontFamily::Courier, false, true) => "Courier-Oblique",
        (FontFamily::Courier, true, true) => "Courier-BoldOblique",
    }
}

pub fn font_name_for(font: &FontSpec) -> &'static str {
    styled_font_name(font.family, font.weight, font.style)
}

/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// Baseline of a line whose box starts at `top`, in layout coordinates.
///
/// The glyphs are centred vertically in the line box; the ascent is taken as
/// 80% of the font size.
pub fn baseline_y(top: f32, line_height: f32, font_size: f32) -> f32 {
    top + (line_height - font_size) / 2.0 + font_size * 0.8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styled_font_names() {
        assert_eq!(
            styled_font_name(FontFamily::Times, FontWeight::Normal, FontStyle::Normal),
            "Times-Roman"
        );
        assert_eq!(
            styled_font_name(FontFamily::Helvetica, FontWeight::Bold, FontStyle::Italic),
            "Helvetica-BoldOblique"
        );
        let code = FontSpec::new(FontFamily::Courier, 9.0).bold();
        assert_eq!(font_name_for(&code), "Courier-Bold");
    }

    #[test]
    fn test_coordinates() {
        assert_eq!(flip_y(50.0, 842.0), 792.0);
        assert!((baseline_y(100.0, 15.0, 11.0) - 110.8).abs() < 1e-4);
    }
}

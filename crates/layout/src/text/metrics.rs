//! Width estimation with a fixed average-advance model.
//!
//! Every character of a family advances by the same fraction of the font
//! size. That is enough for wrapping decisions and keeps widths monotonic in
//! the character count, which guarantees the line breaker terminates.

use quire_style::FontSpec;

/// Estimated advance width of `text` in points.
pub fn measure_text_width(text: &str, font: &FontSpec) -> f32 {
    text.chars().count() as f32 * char_advance(font)
}

/// Width of a single character in `font`.
pub fn char_advance(font: &FontSpec) -> f32 {
    font.family.average_char_width() * font.size
}

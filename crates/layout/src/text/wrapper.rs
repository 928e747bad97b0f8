use super::metrics::{char_advance, measure_text_width};
use quire_style::FontSpec;
use std::ops::Range;

/// One wrapped line: the byte ranges of its words in the source text.
///
/// Words on a line are rendered joined by a single space, whatever whitespace
/// separated them in the source.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineLayout {
    pub words: Vec<Range<usize>>,
    pub width: f32,
}

impl LineLayout {
    pub fn text(&self, source: &str) -> String {
        let mut out = String::new();
        for (i, range) in self.words.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&source[range.clone()]);
        }
        out
    }

    /// Byte offset of the first character on the line.
    pub fn start(&self) -> usize {
        self.words.first().map_or(0, |r| r.start)
    }
}

fn word_ranges(text: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut start = None;
    for (i, c) in text.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                ranges.push(s..i);
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        ranges.push(s..text.len());
    }
    ranges
}

/// Greedy line breaking over whitespace-separated words.
///
/// A line is closed as soon as the next word would push it past `max_width`.
/// A word wider than `max_width` on its own is never split; it gets a line to
/// itself and overflows.
pub fn break_lines(text: &str, font: &FontSpec, max_width: f32) -> Vec<LineLayout> {
    // Widths are tracked as character counts so a line's width is computed
    // exactly the way `measure_text_width` would compute it.
    let advance = char_advance(font);
    let mut lines = Vec::new();
    let mut current = LineLayout::default();
    let mut current_chars = 0usize;

    for range in word_ranges(text) {
        let word = &text[range.clone()];
        let word_chars = word.chars().count();

        if !current.words.is_empty()
            && (current_chars + 1 + word_chars) as f32 * advance > max_width
        {
            lines.push(std::mem::take(&mut current));
            current_chars = 0;
        }

        if current.words.is_empty() {
            let word_width = measure_text_width(word, font);
            if word_width > max_width {
                log::warn!(
                    "Word '{}' ({:.1}pt) is wider than the available {:.1}pt and will overflow.",
                    word,
                    word_width,
                    max_width
                );
            }
            current_chars = word_chars;
        } else {
            current_chars += 1 + word_chars;
        }
        current.width = current_chars as f32 * advance;
        current.words.push(range);
    }

    if !current.words.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wraps `text` into lines no wider than `max_width`, except for single
/// overlong words. Empty or whitespace-only input yields no lines.
pub fn wrap(text: &str, font: &FontSpec, max_width: f32) -> Vec<String> {
    break_lines(text, font, max_width)
        .iter()
        .map(|line| line.text(text))
        .collect()
}

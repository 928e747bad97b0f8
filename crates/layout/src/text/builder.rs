use super::metrics::{char_advance, measure_text_width};
use super::wrapper::LineLayout;
use quire_style::FontSpec;
use std::ops::Range;

/// A styled span of the flattened text buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan {
    pub range: Range<usize>,
    pub font: FontSpec,
    pub href: Option<String>,
}

/// A piece of one wrapped line that shares a single span's style.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    pub text: String,
    pub span_index: usize,
    /// Characters on the line before this segment, spaces included.
    pub char_offset: usize,
    /// Horizontal offset from the line start, measured with each preceding
    /// piece's own font.
    pub x_offset: f32,
}

/// Flattens styled runs into one buffer so wrapping can ignore style changes,
/// while remembering which byte range carries which style.
#[derive(Debug, Default)]
pub struct TextBuilder {
    content: String,
    spans: Vec<TextSpan>,
}

impl TextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: &str, font: FontSpec, href: Option<String>) {
        if text.is_empty() {
            return;
        }
        let start = self.content.len();
        self.content.push_str(text);
        self.spans.push(TextSpan {
            range: start..self.content.len(),
            font,
            href,
        });
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn spans(&self) -> &[TextSpan] {
        &self.spans
    }

    /// Splits a wrapped line at span boundaries.
    ///
    /// The single space between two words is attached to the preceding
    /// segment when both words continue the same span, so adjacent same-style
    /// words come out as one segment.
    pub fn segments_for_line(&self, line: &LineLayout) -> Vec<LineSegment> {
        let mut segments: Vec<LineSegment> = Vec::new();
        let mut line_chars = 0usize;
        let mut x = 0.0f32;
        let mut last_font: Option<&FontSpec> = None;

        for (word_index, word) in line.words.iter().enumerate() {
            let mut pending_space = word_index > 0;
            if pending_space {
                line_chars += 1;
                // The separating space takes the width of the font before it.
                x += last_font.map(char_advance).unwrap_or(0.0);
            }

            let first = self.spans.partition_point(|s| s.range.end <= word.start);
            for (span_index, span) in self.spans.iter().enumerate().skip(first) {
                if span.range.start >= word.end {
                    break;
                }
                let start = span.range.start.max(word.start);
                let end = span.range.end.min(word.end);
                let piece = &self.content[start..end];

                match segments.last_mut() {
                    Some(last) if last.span_index == span_index => {
                        if pending_space {
                            last.text.push(' ');
                        }
                        last.text.push_str(piece);
                    }
                    _ => segments.push(LineSegment {
                        text: piece.to_string(),
                        span_index,
                        char_offset: line_chars,
                        x_offset: x,
                    }),
                }
                pending_space = false;
                line_chars += piece.chars().count();
                x += measure_text_width(piece, &span.font);
                last_font = Some(&span.font);
            }
        }
        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::wrapper::break_lines;
    use quire_style::FontFamily;

    fn font() -> FontSpec {
        FontSpec::new(FontFamily::Courier, 10.0)
    }

    #[test]
    fn test_segments_follow_span_boundaries() {
        let mut builder = TextBuilder::new();
        builder.push("plain ", font(), None);
        builder.push("bold words", font().bold(), None);
        builder.push(" tail", font(), None);

        let lines = break_lines(builder.content(), &font(), 1000.0);
        assert_eq!(lines.len(), 1);
        let segments = builder.segments_for_line(&lines[0]);

        let texts: Vec<_> = segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["plain", "bold words", "tail"]);
        assert_eq!(segments[1].char_offset, 6);
        assert_eq!(segments[2].char_offset, 17);
        assert_eq!(segments[2].span_index, 2);
    }

    #[test]
    fn test_span_inside_a_word() {
        let mut builder = TextBuilder::new();
        builder.push("pre", font(), None);
        builder.push("fix", font().italic(), None);

        let lines = break_lines(builder.content(), &font(), 1000.0);
        let segments = builder.segments_for_line(&lines[0]);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1].text, "fix");
        assert_eq!(segments[1].char_offset, 3);
    }

    #[test]
    fn test_segments_per_wrapped_line() {
        let mut builder = TextBuilder::new();
        builder.push("aaaa bbbb ", font(), None);
        builder.push("cccc", font(), Some("https://example.com".into()));

        // Courier 10pt: 6pt per char, 60pt fits "aaaa bbbb" (9 chars = 54pt).
        let lines = break_lines(builder.content(), &font(), 60.0);
        assert_eq!(lines.len(), 2);
        let second = builder.segments_for_line(&lines[1]);
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].text, "cccc");
        assert_eq!(second[0].char_offset, 0);
        assert_eq!(second[0].span_index, 1);
    }

    #[test]
    fn test_offsets_use_each_piece_font() {
        let body = FontSpec::new(FontFamily::Helvetica, 10.0);
        let mut builder = TextBuilder::new();
        builder.push("run ", body.clone(), None);
        builder.push("cargo", font(), None);
        builder.push(" now", body.clone(), None);

        let lines = break_lines(builder.content(), &body, 1000.0);
        let segments = builder.segments_for_line(&lines[0]);
        assert_eq!(segments.len(), 3);

        let run_width = measure_text_width("run ", &body);
        assert!((segments[1].x_offset - run_width).abs() < 1e-3);

        // "cargo" is drawn in Courier, so the tail starts after its Courier width.
        let expected = run_width + measure_text_width("cargo ", &font());
        assert!((segments[2].x_offset - expected).abs() < 1e-3);
        assert!(segments[2].x_offset > segments[2].char_offset as f32 * char_advance(&body));
    }
}

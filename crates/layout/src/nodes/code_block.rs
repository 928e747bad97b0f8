use crate::elements::{PositionedText, Primitive};
use crate::engine::LayoutEngine;
use crate::interface::LayoutContext;
use crate::text::{measure_text_width, wrap};
use crate::LayoutError;
use quire_style::FontSpec;

const TAB: &str = "    ";

/// Splits one physical source line into the lines that will be drawn.
///
/// A line that fits is kept verbatim, spacing included. An over-wide line is
/// wrapped like prose and each piece keeps the original indentation.
fn physical_lines(line: &str, font: &FontSpec, width: f32) -> Vec<String> {
    if measure_text_width(line, font) <= width {
        return vec![line.to_string()];
    }
    let body = line.trim_start();
    let indent = &line[..line.len() - body.len()];
    let indent_width = measure_text_width(indent, font);
    let wrapped = wrap(body, font, (width - indent_width).max(0.0));
    if wrapped.is_empty() {
        return vec![String::new()];
    }
    wrapped
        .into_iter()
        .map(|piece| format!("{}{}", indent, piece))
        .collect()
}

/// Lays out preformatted text in the code font.
///
/// Every drawn line is checked against the page bottom before it is placed,
/// so a long block continues on the next page at the line that did not fit.
/// Blank lines take a line of height without drawing anything.
pub fn layout_code_block(
    ctx: &mut LayoutContext,
    engine: &LayoutEngine,
    text: &str,
) -> Result<(), LayoutError> {
    let stylesheet = engine.stylesheet();
    let code = &stylesheet.code;
    let config = *ctx.config();
    let expanded = text.replace('\t', TAB);

    for source_line in expanded.lines() {
        for line in physical_lines(source_line.trim_end(), &code.font, config.content_width()) {
            ctx.ensure_space(code.line_height)?;
            if !line.is_empty() {
                let y = ctx.cursor_y();
                ctx.push(Primitive::Text(PositionedText {
                    x: config.margin,
                    y,
                    text: line,
                    font: code.font.clone(),
                    line_height: code.line_height,
                    href: None,
                }))?;
            }
            ctx.advance_cursor(code.line_height);
        }
    }

    ctx.advance_gap(stylesheet.paragraph_gap);
    Ok(())
}

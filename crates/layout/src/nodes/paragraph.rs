use super::inline::layout_runs;
use crate::engine::LayoutEngine;
use crate::interface::LayoutContext;
use crate::LayoutError;
use quire_idf::InlineRun;

/// Lays out a paragraph at the full content width, then applies the paragraph
/// gap. An empty paragraph places no lines but still takes the gap.
pub fn layout_paragraph(
    ctx: &mut LayoutContext,
    engine: &LayoutEngine,
    runs: &[InlineRun],
) -> Result<(), LayoutError> {
    let stylesheet = engine.stylesheet();
    let config = *ctx.config();
    layout_runs(
        ctx,
        stylesheet,
        runs,
        &stylesheet.body.font,
        config.margin,
        config.content_width(),
        stylesheet.body.line_height,
    )?;
    ctx.advance_gap(stylesheet.paragraph_gap);
    Ok(())
}

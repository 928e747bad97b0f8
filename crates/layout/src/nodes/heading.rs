use super::inline::layout_runs;
use crate::engine::LayoutEngine;
use crate::interface::LayoutContext;
use crate::LayoutError;
use quire_idf::{plain_text, InlineRun};
use quire_style::FontSpec;
use quire_types::OutlineEntry;

/// Lays out a heading in bold at its level's size, registering an anchor at
/// its first line and an outline entry for bookmarks.
pub fn layout_heading(
    ctx: &mut LayoutContext,
    engine: &LayoutEngine,
    level: u8,
    runs: &[InlineRun],
) -> Result<(), LayoutError> {
    let stylesheet = engine.stylesheet();
    let headings = &stylesheet.headings;
    let font = FontSpec::new(headings.family, headings.size_for_level(level))
        .bold()
        .with_color(headings.color.clone());
    let config = *ctx.config();

    let text = plain_text(runs);
    let mut base = slug::slugify(&text);
    if base.is_empty() {
        base = "section".to_string();
    }
    let anchor = ctx.claim_anchor(&base);

    // The anchor must point at the page the first line lands on.
    ctx.ensure_space(headings.line_height)?;
    ctx.register_anchor(anchor.clone());
    ctx.push_outline(OutlineEntry {
        level: level.clamp(1, 6),
        text: text.trim().to_string(),
        anchor,
    });

    layout_runs(
        ctx,
        stylesheet,
        runs,
        &font,
        config.margin,
        config.content_width(),
        headings.line_height,
    )?;
    ctx.advance_gap(stylesheet.paragraph_gap);
    Ok(())
}

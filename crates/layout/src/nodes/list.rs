use super::inline::layout_runs;
use super::list_utils::{marker_text, ListCounters};
use crate::engine::LayoutEngine;
use crate::interface::LayoutContext;
use crate::text::measure_text_width;
use crate::LayoutError;
use quire_idf::{InlineRun, ListItem};

/// Lays out list items in order. Each item is prefixed with its marker and
/// wrapped at the content width less the indent for its depth. A continuation
/// item has no marker and lines up with the text of the item it resumes.
pub fn layout_list(
    ctx: &mut LayoutContext,
    engine: &LayoutEngine,
    ordered: bool,
    start: u64,
    items: &[ListItem],
) -> Result<(), LayoutError> {
    let stylesheet = engine.stylesheet();
    let config = *ctx.config();
    let mut counters = ListCounters::starting_at(start);
    // Marker width last used at each depth, for aligning continuations.
    let mut marker_widths: Vec<f32> = Vec::new();

    for item in items {
        let depth = usize::from(item.depth);
        let mut indent = stylesheet.list.indent * (f32::from(item.depth) + 1.0);
        let mut runs = Vec::with_capacity(item.runs.len() + 1);

        if item.continuation {
            counters.resume(item.depth);
            indent += marker_widths.get(depth).copied().unwrap_or(0.0);
        } else {
            let number = counters.next(item.depth);
            let marker = format!(
                "{} ",
                marker_text(item.ordered.unwrap_or(ordered), number, item.depth)
            );
            if marker_widths.len() <= depth {
                marker_widths.resize(depth + 1, 0.0);
            }
            marker_widths[depth] = measure_text_width(&marker, &stylesheet.body.font);
            runs.push(InlineRun::plain(marker));
        }
        runs.extend(item.runs.iter().cloned());

        layout_runs(
            ctx,
            stylesheet,
            &runs,
            &stylesheet.body.font,
            config.margin + indent,
            (config.content_width() - indent).max(0.0),
            stylesheet.body.line_height,
        )?;
        ctx.advance_gap(stylesheet.list.item_gap);
    }

    ctx.advance_gap(stylesheet.paragraph_gap);
    Ok(())
}

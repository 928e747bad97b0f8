use crate::elements::{LineDraw, Primitive};
use crate::engine::LayoutEngine;
use crate::interface::LayoutContext;
use crate::LayoutError;

/// Draws a separator across the content width, a fixed offset below the cursor.
pub fn layout_rule(ctx: &mut LayoutContext, engine: &LayoutEngine) -> Result<(), LayoutError> {
    let rule = &engine.stylesheet().rule;
    let config = *ctx.config();

    ctx.ensure_space(rule.height)?;
    let y = ctx.cursor_y() + rule.offset;
    ctx.push(Primitive::Line(LineDraw {
        x1: config.margin,
        y1: y,
        x2: config.width - config.margin,
        y2: y,
        thickness: rule.thickness,
        color: rule.color.clone(),
    }))?;
    ctx.advance_cursor(rule.height);
    Ok(())
}

//! Table placement.
//!
//! Cell wrapping and grid geometry belong to the page writer; this module
//! decides where each part of the grid goes. A table that does not fit below
//! the cursor is split at row boundaries and every continuation repeats the
//! header row.

use crate::algorithms::columns::column_widths;
use crate::algorithms::pagination::{check_fit, rows_that_fit};
use crate::elements::{Primitive, TableDraw};
use crate::engine::LayoutEngine;
use crate::interface::LayoutContext;
use crate::LayoutError;
use quire_idf::TableBlock;

pub fn layout_table(
    ctx: &mut LayoutContext,
    engine: &LayoutEngine,
    table: &TableBlock,
) -> Result<(), LayoutError> {
    if table.header.is_empty() {
        log::debug!("Skipping table without columns");
        return Ok(());
    }

    let stylesheet = engine.stylesheet();
    let config = *ctx.config();
    let style = engine.table_style();
    let widths = column_widths(&table.header, &table.rows, config.content_width(), style);

    // Keep the header from being stranded at the very bottom of a page.
    if ctx.available_height() < style.orphan_threshold && !ctx.is_at_page_top() {
        log::debug!(
            "Table would start {:.1}pt above the bottom margin; moving it to the next page",
            ctx.available_height()
        );
        ctx.page_break();
    }

    let writer = ctx.writer();
    let total_height = writer.measure_table_height(&table.header, &table.rows, &widths)?;

    if total_height <= ctx.available_height() {
        ctx.ensure_space(total_height)?;
        place(ctx, engine, table.header.clone(), table.rows.clone(), &widths, total_height, false)?;
        ctx.advance_gap(stylesheet.paragraph_gap);
        return Ok(());
    }

    let header_height = writer.measure_table_height(&table.header, &[], &widths)?;
    let row_heights = table
        .rows
        .iter()
        .map(|row| {
            writer
                .measure_table_height(&table.header, std::slice::from_ref(row), &widths)
                .map(|h| (h - header_height).max(0.0))
        })
        .collect::<Result<Vec<f32>, _>>()?;

    let mut next_row = 0;
    let mut continued = false;
    loop {
        let remaining = &row_heights[next_row..];
        let available = ctx.available_height();
        let mut count = rows_that_fit(header_height, remaining, available);
        let fits = match remaining.first() {
            Some(_) => count > 0,
            None => !check_fit(ctx.cursor_y(), header_height, config.content_bottom()).should_break,
        };

        if !fits {
            if !ctx.is_at_page_top() {
                ctx.page_break();
                continue;
            }
            log::warn!(
                "Table row {} is taller than a page and will overflow.",
                next_row
            );
            count = remaining.len().min(1);
        }

        let rows = table.rows[next_row..next_row + count].to_vec();
        let height = header_height + remaining[..count].iter().sum::<f32>();
        ctx.ensure_space(height.min(ctx.available_height()))?;
        place(ctx, engine, table.header.clone(), rows, &widths, height, continued)?;

        next_row += count;
        if next_row >= table.rows.len() {
            break;
        }
        log::debug!("Continuing table on a new page at row {}", next_row);
        ctx.page_break();
        continued = true;
    }

    ctx.advance_gap(stylesheet.paragraph_gap);
    Ok(())
}

fn place(
    ctx: &mut LayoutContext,
    engine: &LayoutEngine,
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    widths: &[f32],
    height: f32,
    continued: bool,
) -> Result<(), LayoutError> {
    let x = ctx.config().margin;
    let origin_y = ctx.cursor_y();
    ctx.push(Primitive::Table(TableDraw {
        x,
        origin_y,
        header,
        rows,
        column_widths: widths.to_vec(),
        style: engine.table_style_arc(),
        height,
        continued,
    }))?;
    ctx.advance_cursor(height);
    Ok(())
}

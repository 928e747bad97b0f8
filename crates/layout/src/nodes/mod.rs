//! Per-kind layout routines. Each one advances the shared cursor and pushes
//! primitives onto the current page.

pub mod code_block;
pub mod heading;
pub mod inline;
pub mod list;
pub mod list_utils;
pub mod paragraph;
pub mod rule;
pub mod table;

use crate::engine::LayoutEngine;
use crate::interface::LayoutContext;
use crate::LayoutError;
use quire_idf::Block;

pub fn layout_block(
    ctx: &mut LayoutContext,
    engine: &LayoutEngine,
    block: &Block,
) -> Result<(), LayoutError> {
    match block {
        Block::Heading { level, runs } => heading::layout_heading(ctx, engine, *level, runs),
        Block::Paragraph { runs } => paragraph::layout_paragraph(ctx, engine, runs),
        Block::List {
            ordered,
            start,
            items,
        } => list::layout_list(ctx, engine, *ordered, *start, items),
        Block::Table(table) => table::layout_table(ctx, engine, table),
        Block::CodeBlock { text, .. } => code_block::layout_code_block(ctx, engine, text),
        Block::Rule => rule::layout_rule(ctx, engine),
    }
}

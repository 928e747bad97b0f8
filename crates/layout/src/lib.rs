//! The block-to-layout engine: wraps text, advances a vertical cursor and
//! breaks pages while turning a block sequence into positioned primitives.

use quire_traits::WriterError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error(
        "Malformed table in block {block_index}: row {row} has {found} cells but the header defines {expected} columns."
    )]
    InputShape {
        block_index: usize,
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Render failure: {0}")]
    RenderFailure(#[from] WriterError),
}

pub mod algorithms;
pub mod config;
pub mod elements;
pub mod engine;
pub mod interface;
pub mod nodes;
pub mod text;

pub use self::config::PageConfig;
pub use self::elements::{LaidOutDocument, LineDraw, Page, PositionedText, Primitive, TableDraw};
pub use self::engine::LayoutEngine;
pub use self::interface::{AnchorLocation, LayoutContext};
pub use self::text::{break_lines, measure_text_width, wrap, LineLayout};

#[cfg(test)]
mod test_utils;

//! Converts Markdown source into the flat block sequence the layout engine
//! consumes.
//!
//! Parsing is delegated to `pulldown-cmark` with tables and strikethrough
//! enabled. This crate only reshapes its event stream: inline markup becomes
//! styled runs, nested lists are flattened with a depth, and table cells
//! become plain strings.

mod converter;

pub use converter::MarkdownConverter;

use pulldown_cmark::Options;
use quire_idf::Block;

/// The parser extensions every conversion uses.
pub fn default_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH
}

/// Parses `source` into blocks in document order.
pub fn parse(source: &str) -> Vec<Block> {
    MarkdownConverter::new().convert(source)
}

//! Drawing primitives produced by the layout engine.
//!
//! Coordinates are in points from the top-left corner of the page; the
//! writer converts them to its own coordinate system.

use crate::interface::AnchorLocation;
use quire_style::{FontSpec, TableStyle};
use quire_traits::PageHandle;
use quire_types::{AnchorId, Color, OutlineEntry};
use std::collections::HashMap;
use std::sync::Arc;

/// A run of text placed on a page. `y` is the top of the line box.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedText {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub font: FontSpec,
    pub line_height: f32,
    /// Link target: `#anchor` for in-document links, otherwise an external URI.
    pub href: Option<String>,
}

/// A table grid. The header row is repeated on every continuation.
#[derive(Debug, Clone, PartialEq)]
pub struct TableDraw {
    pub x: f32,
    pub origin_y: f32,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub column_widths: Vec<f32>,
    /// Header font, fill and body font used by the writer.
    pub style: Arc<TableStyle>,
    /// Height reported by the writer for this grid.
    pub height: f32,
    /// True for every part of a split table after the first.
    pub continued: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineDraw {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub thickness: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Text(PositionedText),
    Table(TableDraw),
    Line(LineDraw),
}

impl Primitive {
    pub fn as_text(&self) -> Option<&PositionedText> {
        match self {
            Primitive::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&TableDraw> {
        match self {
            Primitive::Table(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_line(&self) -> Option<&LineDraw> {
        match self {
            Primitive::Line(l) => Some(l),
            _ => None,
        }
    }
}

/// One laid-out page: its primitives in drawing order.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub index: usize,
    pub handle: PageHandle,
    pub primitives: Vec<Primitive>,
}

impl Page {
    pub fn new(index: usize, handle: PageHandle) -> Self {
        Self {
            index,
            handle,
            primitives: Vec::new(),
        }
    }

    pub fn texts(&self) -> impl Iterator<Item = &PositionedText> {
        self.primitives.iter().filter_map(Primitive::as_text)
    }

    pub fn tables(&self) -> impl Iterator<Item = &TableDraw> {
        self.primitives.iter().filter_map(Primitive::as_table)
    }

    pub fn lines(&self) -> impl Iterator<Item = &LineDraw> {
        self.primitives.iter().filter_map(Primitive::as_line)
    }
}

/// The complete result of laying out one document.
#[derive(Debug, Clone, Default)]
pub struct LaidOutDocument {
    pub pages: Vec<Page>,
    /// Headings in document order, for bookmarks.
    pub outline: Vec<OutlineEntry>,
    pub anchors: HashMap<AnchorId, AnchorLocation>,
}

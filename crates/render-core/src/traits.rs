use crate::context::{DocumentContext, DocumentMetadata};
use crate::error::RenderError;
use quire_layout::Page;
use quire_types::OutlineEntry;
use std::io::{Seek, Write};

/// A trait for document renderers, abstracting the PDF-writing primitives.
///
/// The expected call order is `begin_document`, one `render_page` per laid-out
/// page in order, an optional `set_outline`, then `finish`.
pub trait DocumentRenderer<W: Write + Seek + Send> {
    fn begin_document(&mut self, writer: W, metadata: &DocumentMetadata) -> Result<(), RenderError>;

    fn render_page(&mut self, page: &Page, context: &DocumentContext) -> Result<(), RenderError>;

    fn set_outline(
        &mut self,
        outline: &[OutlineEntry],
        context: &DocumentContext,
    ) -> Result<(), RenderError>;

    /// Writes the cross-reference table and trailer and hands the sink back.
    fn finish(self: Box<Self>) -> Result<W, RenderError>;
}

use crate::algorithms::pagination::is_near_bottom;
use crate::config::PageConfig;
use crate::elements::{LaidOutDocument, Page};
use crate::interface::LayoutContext;
use crate::nodes::layout_block;
use crate::LayoutError;
use quire_idf::Block;
use quire_style::{Stylesheet, TableStyle};
use quire_traits::PageWriter;
use std::sync::Arc;

/// The block renderer.
///
/// Walks a block sequence once, top to bottom, and turns it into pages of
/// positioned primitives. The engine holds only configuration; all per-render
/// state lives in a [`LayoutContext`] created for each call, so one engine can
/// serve concurrent renders.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    stylesheet: Arc<Stylesheet>,
    table_style: Arc<TableStyle>,
    config: PageConfig,
}

impl LayoutEngine {
    pub fn new(stylesheet: &Stylesheet) -> Self {
        Self {
            config: PageConfig::from(&stylesheet.page),
            table_style: Arc::new(stylesheet.table.clone()),
            stylesheet: Arc::new(stylesheet.clone()),
        }
    }

    /// Overrides the page geometry taken from the stylesheet.
    pub fn with_page_config(mut self, config: PageConfig) -> Self {
        self.config = config;
        self
    }

    pub fn stylesheet(&self) -> &Stylesheet {
        &self.stylesheet
    }

    pub fn page_config(&self) -> &PageConfig {
        &self.config
    }

    pub fn table_style(&self) -> &TableStyle {
        &self.table_style
    }

    pub(crate) fn table_style_arc(&self) -> Arc<TableStyle> {
        Arc::clone(&self.table_style)
    }

    /// Rejects structurally malformed input before any page is opened.
    pub fn validate(blocks: &[Block]) -> Result<(), LayoutError> {
        for (block_index, block) in blocks.iter().enumerate() {
            if let Block::Table(table) = block {
                if let Some((row, found)) = table.first_mismatched_row() {
                    return Err(LayoutError::InputShape {
                        block_index,
                        row,
                        expected: table.column_count(),
                        found,
                    });
                }
            }
        }
        Ok(())
    }

    /// Lays out `blocks`, asking `writer` for page handles and table heights.
    ///
    /// On error nothing is returned; the pages already handed out by the
    /// writer belong to a document the caller must discard.
    pub fn layout(
        &self,
        blocks: &[Block],
        writer: &mut dyn PageWriter,
    ) -> Result<LaidOutDocument, LayoutError> {
        Self::validate(blocks)?;

        let mut ctx = LayoutContext::new(writer, self.config);
        for (index, block) in blocks.iter().enumerate() {
            log::trace!(
                "Block {} ({:?}) at y={:.1} on page {}",
                index,
                block.kind(),
                ctx.cursor_y(),
                ctx.page_index() + 1
            );
            layout_block(&mut ctx, self, block)?;

            if is_near_bottom(ctx.cursor_y(), self.config.break_line()) {
                ctx.page_break();
            }
        }

        let document = ctx.finish()?;
        log::debug!(
            "Laid out {} blocks onto {} pages",
            blocks.len(),
            document.pages.len()
        );
        Ok(document)
    }

    /// Lays out `blocks` and returns only the pages.
    pub fn render(
        &self,
        blocks: &[Block],
        writer: &mut dyn PageWriter,
    ) -> Result<Vec<Page>, LayoutError> {
        self.layout(blocks, writer).map(|document| document.pages)
    }
}

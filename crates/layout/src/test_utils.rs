use crate::elements::{LaidOutDocument, Page, PositionedText};
use crate::engine::LayoutEngine;
use crate::LayoutError;
use quire_idf::Block;
use quire_style::{PageLayout, PageSize, Stylesheet};
use quire_traits::{PageHandle, PageWriter, WriterError};

/// A page writer that measures every table row at a fixed height and
/// records how many pages were requested.
#[derive(Debug)]
pub struct MockWriter {
    pub row_height: f32,
    pub pages_started: u32,
    /// When set, `start_new_page` fails once this many pages exist.
    pub page_limit: Option<u32>,
}

impl Default for MockWriter {
    fn default() -> Self {
        Self {
            row_height: 20.0,
            pages_started: 0,
            page_limit: None,
        }
    }
}

impl PageWriter for MockWriter {
    fn measure_table_height(
        &self,
        _header: &[String],
        rows: &[Vec<String>],
        _column_widths: &[f32],
    ) -> Result<f32, WriterError> {
        Ok((rows.len() + 1) as f32 * self.row_height)
    }

    fn start_new_page(&mut self) -> Result<PageHandle, WriterError> {
        if let Some(limit) = self.page_limit {
            if self.pages_started >= limit {
                return Err(WriterError::PageAllocation {
                    page: self.pages_started as usize,
                    message: "page limit reached".into(),
                });
            }
        }
        self.pages_started += 1;
        Ok(PageHandle(self.pages_started))
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A stylesheet with a custom page size and uniform margin.
pub fn stylesheet_with_page(width: f32, height: f32, margin: f32) -> Stylesheet {
    Stylesheet {
        page: PageLayout {
            size: PageSize::Custom { width, height },
            margin,
            bottom_threshold: margin,
        },
        ..Default::default()
    }
}

pub fn layout_with(
    stylesheet: &Stylesheet,
    blocks: &[Block],
    writer: &mut MockWriter,
) -> Result<LaidOutDocument, LayoutError> {
    init_logging();
    LayoutEngine::new(stylesheet).layout(blocks, writer)
}

pub fn layout_blocks(stylesheet: &Stylesheet, blocks: &[Block]) -> Result<LaidOutDocument, LayoutError> {
    layout_with(stylesheet, blocks, &mut MockWriter::default())
}

pub fn find_text<'a>(pages: &'a [Page], content: &str) -> Option<(usize, &'a PositionedText)> {
    pages.iter().enumerate().find_map(|(i, page)| {
        page.texts()
            .find(|t| t.text.contains(content))
            .map(|t| (i, t))
    })
}

/// Text of every line on a page, in drawing order, with segments of the same
/// line joined.
pub fn page_lines(page: &Page) -> Vec<String> {
    let mut lines: Vec<(f32, String)> = Vec::new();
    for text in page.texts() {
        match lines.last_mut() {
            Some((y, line)) if (*y - text.y).abs() < 0.01 => {
                line.push(' ');
                line.push_str(&text.text);
            }
            _ => lines.push((text.y, text.text.clone())),
        }
    }
    lines.into_iter().map(|(_, line)| line).collect()
}

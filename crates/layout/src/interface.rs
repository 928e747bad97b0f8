//! The mutable state threaded through one render call.

use crate::algorithms::pagination::check_fit;
use crate::config::PageConfig;
use crate::elements::{LaidOutDocument, Page, Primitive};
use crate::LayoutError;
use quire_traits::PageWriter;
use quire_types::{AnchorId, OutlineEntry};
use std::collections::HashMap;

/// Where an anchor landed: page index and the y of its first line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorLocation {
    pub page_index: usize,
    pub y_pos: f32,
}

/// Cursor, current page and sealed pages for a single document.
///
/// Pages are opened lazily: a page break only seals the current page, and the
/// next primitive that needs space opens its successor. A document therefore
/// never ends with an empty trailing page.
pub struct LayoutContext<'a> {
    writer: &'a mut dyn PageWriter,
    config: PageConfig,
    cursor_y: f32,
    current: Option<Page>,
    pages: Vec<Page>,
    anchors: HashMap<AnchorId, AnchorLocation>,
    outline: Vec<OutlineEntry>,
    slug_counts: HashMap<String, usize>,
}

impl<'a> LayoutContext<'a> {
    pub fn new(writer: &'a mut dyn PageWriter, config: PageConfig) -> Self {
        Self {
            writer,
            cursor_y: config.content_top(),
            config,
            current: None,
            pages: Vec::new(),
            anchors: HashMap::new(),
            outline: Vec::new(),
            slug_counts: HashMap::new(),
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn writer(&self) -> &dyn PageWriter {
        &*self.writer
    }

    pub fn cursor_y(&self) -> f32 {
        self.cursor_y
    }

    pub fn advance_cursor(&mut self, dy: f32) {
        self.cursor_y += dy;
    }

    /// Advances by a spacing gap. Gaps never push the cursor past the content
    /// bottom, so whitespace alone cannot overflow a page.
    pub fn advance_gap(&mut self, dy: f32) {
        let limit = self.config.content_bottom().max(self.cursor_y);
        self.cursor_y = (self.cursor_y + dy).min(limit);
    }

    pub fn is_at_page_top(&self) -> bool {
        (self.cursor_y - self.config.content_top()).abs() < 0.1
    }

    pub fn available_height(&self) -> f32 {
        (self.config.content_bottom() - self.cursor_y).max(0.0)
    }

    /// Index the next primitive will land on.
    pub fn page_index(&self) -> usize {
        self.pages.len()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len() + usize::from(self.current.is_some())
    }

    /// Makes sure an element of `height` fits below the cursor, breaking the
    /// page first if it does not. An element taller than a whole page is
    /// placed at the top of a fresh page and allowed to overflow.
    pub fn ensure_space(&mut self, height: f32) -> Result<(), LayoutError> {
        let fit = check_fit(self.cursor_y, height, self.config.content_bottom());
        if fit.should_break {
            if self.is_at_page_top() {
                log::warn!(
                    "Element of height {:.1} exceeds the page content height of {:.1} and will overflow.",
                    height,
                    self.config.content_bottom() - self.config.content_top()
                );
            } else {
                self.page_break();
            }
        }
        self.current_page()?;
        Ok(())
    }

    /// Seals the current page and resets the cursor to the top margin.
    pub fn page_break(&mut self) {
        if let Some(page) = self.current.take() {
            log::debug!(
                "Sealing page {} with {} primitives at cursor {:.1}",
                page.index + 1,
                page.primitives.len(),
                self.cursor_y
            );
            self.pages.push(page);
        }
        self.cursor_y = self.config.content_top();
    }

    fn new_page(&mut self) -> Result<Page, LayoutError> {
        let index = self.pages.len();
        let handle = self.writer.start_new_page()?;
        log::debug!("Opened page {} ({:?})", index + 1, handle);
        Ok(Page::new(index, handle))
    }

    fn current_page(&mut self) -> Result<&mut Page, LayoutError> {
        let page = match self.current.take() {
            Some(page) => page,
            None => self.new_page()?,
        };
        Ok(self.current.insert(page))
    }

    pub fn push(&mut self, primitive: Primitive) -> Result<(), LayoutError> {
        self.current_page()?.primitives.push(primitive);
        Ok(())
    }

    /// Reserves a unique anchor id derived from `base`, appending `-1`, `-2`
    /// and so on when it was already taken.
    pub fn claim_anchor(&mut self, base: &str) -> AnchorId {
        let count = self.slug_counts.entry(base.to_string()).or_insert(0);
        let id = if *count == 0 {
            base.to_string()
        } else {
            format!("{}-{}", base, count)
        };
        *count += 1;
        // A generated suffix can collide with a literal heading such as "intro-1".
        if id != base && self.slug_counts.contains_key(&id) {
            return self.claim_anchor(&id);
        }
        self.slug_counts.entry(id.clone()).or_insert(1);
        AnchorId::new(id)
    }

    pub fn register_anchor(&mut self, id: AnchorId) {
        let location = AnchorLocation {
            page_index: self.page_index(),
            y_pos: self.cursor_y,
        };
        self.anchors.insert(id, location);
    }

    pub fn push_outline(&mut self, entry: OutlineEntry) {
        self.outline.push(entry);
    }

    /// Seals the last page. A document with no content still yields one blank page.
    pub fn finish(mut self) -> Result<LaidOutDocument, LayoutError> {
        if self.pages.is_empty() {
            self.current_page()?;
        }
        self.page_break();
        Ok(LaidOutDocument {
            pages: self.pages,
            outline: self.outline,
            anchors: self.anchors,
        })
    }
}

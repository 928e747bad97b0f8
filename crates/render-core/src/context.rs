use quire_layout::{AnchorLocation, LaidOutDocument};
use quire_traits::PageHandle;
use quire_types::AnchorId;
use std::collections::HashMap;

/// Document-level facts a renderer needs while drawing any single page.
#[derive(Debug, Clone)]
pub struct DocumentContext<'a> {
    pub total_pages: usize,
    pub page_handles: Vec<PageHandle>,
    pub anchors: &'a HashMap<AnchorId, AnchorLocation>,
    pub show_page_numbers: bool,
}

/// Where a link on a page points.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkTarget<'a> {
    /// A heading in this document.
    Internal { page: PageHandle, y_pos: f32 },
    /// Anything else, passed through as a URI.
    External(&'a str),
}

impl<'a> DocumentContext<'a> {
    pub fn new(document: &'a LaidOutDocument, show_page_numbers: bool) -> Self {
        Self {
            total_pages: document.pages.len(),
            page_handles: document.pages.iter().map(|p| p.handle).collect(),
            anchors: &document.anchors,
            show_page_numbers,
        }
    }

    pub fn page_handle(&self, page_index: usize) -> Option<PageHandle> {
        self.page_handles.get(page_index).copied()
    }

    pub fn anchor(&self, id: &AnchorId) -> Option<(PageHandle, f32)> {
        let location = self.anchors.get(id)?;
        Some((self.page_handle(location.page_index)?, location.y_pos))
    }

    /// Resolves an href. A `#fragment` naming no heading resolves to `None`.
    pub fn resolve_link<'h>(&self, href: &'h str) -> Option<LinkTarget<'h>> {
        if href.starts_with('#') {
            let id = AnchorId::from_fragment(href)?;
            let (page, y_pos) = self.anchor(&id)?;
            return Some(LinkTarget::Internal { page, y_pos });
        }
        Some(LinkTarget::External(href))
    }
}

/// Values written to the document information dictionary.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentMetadata {
    pub title: Option<String>,
    pub producer: String,
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        Self {
            title: None,
            producer: concat!("quire ", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl DocumentMetadata {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quire_layout::Page;

    fn document() -> LaidOutDocument {
        let mut anchors = HashMap::new();
        anchors.insert(
            AnchorId::new("setup"),
            AnchorLocation {
                page_index: 1,
                y_pos: 120.0,
            },
        );
        LaidOutDocument {
            pages: vec![Page::new(0, PageHandle(4)), Page::new(1, PageHandle(9))],
            outline: Vec::new(),
            anchors,
        }
    }

    #[test]
    fn test_internal_links_resolve_to_page_handles() {
        let doc = document();
        let ctx = DocumentContext::new(&doc, false);
        assert_eq!(ctx.total_pages, 2);
        assert_eq!(
            ctx.resolve_link("#setup"),
            Some(LinkTarget::Internal {
                page: PageHandle(9),
                y_pos: 120.0
            })
        );
        assert_eq!(ctx.resolve_link("#missing"), None);
    }

    #[test]
    fn test_external_links_pass_through() {
        let doc = document();
        let ctx = DocumentContext::new(&doc, true);
        assert_eq!(
            ctx.resolve_link("https://example.com"),
            Some(LinkTarget::External("https://example.com"))
        );
    }
}

use crate::{LopdfRenderer, TableGeometry};
use lopdf::{Dictionary, Document, Object};
use quire_idf::{Block, InlineRun};
use quire_layout::LayoutEngine;
use quire_render_core::{DocumentContext, DocumentMetadata, DocumentRenderer, RenderError};
use quire_style::Stylesheet;
use quire_traits::{PageWriter, WriterError};
use std::io::Cursor;
use std::sync::Arc;

fn render(blocks: &[Block], stylesheet: Stylesheet, page_numbers: bool) -> Vec<u8> {
    let stylesheet = Arc::new(stylesheet);
    let engine = LayoutEngine::new(&stylesheet);
    let mut renderer = LopdfRenderer::in_memory(Arc::clone(&stylesheet));
    let metadata = DocumentMetadata::default().with_title("Renderer Test");
    renderer
        .begin_document(Cursor::new(Vec::new()), &metadata)
        .unwrap();

    let document = engine.layout(blocks, &mut renderer).unwrap();
    let context = DocumentContext::new(&document, page_numbers);
    for page in &document.pages {
        renderer.render_page(page, &context).unwrap();
    }
    renderer.set_outline(&document.outline, &context).unwrap();
    Box::new(renderer).finish().unwrap().into_inner()
}

fn page_text(doc: &Document, page: u32) -> String {
    doc.extract_text(&[page]).unwrap_or_default()
}

fn trailer_dict<'a>(doc: &'a Document, key: &[u8]) -> &'a Dictionary {
    let id = doc.trailer.get(key).unwrap().as_reference().unwrap();
    doc.get_dictionary(id).unwrap()
}

fn page_annotations(doc: &Document, page: u32) -> Vec<Dictionary> {
    let page_id = doc.get_pages()[&page];
    let page_dict = doc.get_dictionary(page_id).unwrap();
    match page_dict.get(b"Annots") {
        Ok(Object::Array(refs)) => refs
            .iter()
            .map(|r| doc.get_dictionary(r.as_reference().unwrap()).unwrap().clone())
            .collect(),
        _ => Vec::new(),
    }
}

#[test]
fn test_single_page_document() {
    let blocks = vec![
        Block::heading(1, "Title"),
        Block::paragraph("Hello world"),
        Block::Rule,
        Block::table(&["A", "B"], &[&["1", "2"]]),
    ];
    let bytes = render(&blocks, Stylesheet::default(), false);
    let doc = Document::load_mem(&bytes).unwrap();

    assert_eq!(doc.get_pages().len(), 1);
    let text = page_text(&doc, 1);
    for word in ["Title", "Hello", "world", "A", "B", "1", "2"] {
        assert!(text.contains(word), "missing '{}' in {:?}", word, text);
    }

    let info = trailer_dict(&doc, b"Info");
    assert_eq!(
        info.get(b"Title").unwrap().as_str().unwrap(),
        b"Renderer Test"
    );
    assert!(info.get(b"CreationDate").is_ok());
}

#[test]
fn test_page_numbers_on_every_page() {
    let blocks: Vec<Block> = (0..120)
        .map(|i| Block::paragraph(format!("Paragraph number {}", i)))
        .collect();
    let bytes = render(&blocks, Stylesheet::default(), true);
    let doc = Document::load_mem(&bytes).unwrap();

    let total = doc.get_pages().len();
    assert!(total > 1);
    for page in 1..=total as u32 {
        let text = page_text(&doc, page);
        assert!(text.contains(&format!("Page {} of {}", page, total)), "{:?}", text);
    }
}

#[test]
fn test_links_become_annotations() {
    let blocks = vec![
        Block::Paragraph {
            runs: vec![
                InlineRun::plain("See "),
                InlineRun::link("setup", "#setup"),
                InlineRun::plain(" or "),
                InlineRun::link("the site", "https://example.com"),
                InlineRun::plain(" and "),
                InlineRun::link("nowhere", "#missing"),
            ],
        },
        Block::heading(2, "Setup"),
    ];
    let bytes = render(&blocks, Stylesheet::default(), false);
    let doc = Document::load_mem(&bytes).unwrap();

    let annotations = page_annotations(&doc, 1);
    assert_eq!(annotations.len(), 2);
    let kinds: Vec<Vec<u8>> = annotations
        .iter()
        .map(|annot| {
            let action = doc
                .get_dictionary(annot.get(b"A").unwrap().as_reference().unwrap())
                .unwrap();
            action.get(b"S").unwrap().as_name().unwrap().to_vec()
        })
        .collect();
    assert_eq!(kinds, vec![b"GoTo".to_vec(), b"URI".to_vec()]);
}

#[test]
fn test_headings_build_nested_outline() {
    let blocks = vec![
        Block::heading(1, "Guide"),
        Block::heading(2, "Install"),
        Block::heading(2, "Usage"),
        Block::heading(1, "Reference"),
    ];
    let bytes = render(&blocks, Stylesheet::default(), false);
    let doc = Document::load_mem(&bytes).unwrap();

    let catalog = trailer_dict(&doc, b"Root");
    let outlines_id = catalog.get(b"Outlines").unwrap().as_reference().unwrap();
    let outlines = doc.get_dictionary(outlines_id).unwrap();
    assert_eq!(outlines.get(b"Count").unwrap().as_i64().unwrap(), 2);

    let first = doc
        .get_dictionary(outlines.get(b"First").unwrap().as_reference().unwrap())
        .unwrap();
    assert_eq!(first.get(b"Title").unwrap().as_str().unwrap(), b"Guide");
    assert_eq!(first.get(b"Count").unwrap().as_i64().unwrap(), -2);
}

#[test]
fn test_document_without_headings_has_no_outline() {
    let bytes = render(&[Block::paragraph("plain")], Stylesheet::default(), false);
    let doc = Document::load_mem(&bytes).unwrap();
    assert!(trailer_dict(&doc, b"Root").get(b"Outlines").is_err());
}

#[test]
fn test_empty_document_is_one_blank_page() {
    let bytes = render(&[], Stylesheet::default(), false);
    let doc = Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
}

#[test]
fn test_measurement_matches_geometry() {
    let stylesheet = Arc::new(Stylesheet::default());
    let renderer = LopdfRenderer::<Cursor<Vec<u8>>>::in_memory(Arc::clone(&stylesheet));
    let header = vec!["Name".to_string(), "Notes".to_string()];
    let rows = vec![vec!["a".to_string(), "a fairly long note that wraps".to_string()]];
    let widths = [60.0, 60.0];

    let measured = renderer.measure_table_height(&header, &rows, &widths).unwrap();
    let geometry = TableGeometry::measure(&header, &rows, &widths, &stylesheet.table).unwrap();
    assert_eq!(measured, geometry.total_height());
    assert!(geometry.row_heights[0] > geometry.header_height);
}

#[test]
fn test_pages_require_a_started_document() {
    let mut renderer = LopdfRenderer::<Cursor<Vec<u8>>>::in_memory(Arc::new(Stylesheet::default()));
    assert!(matches!(
        renderer.start_new_page(),
        Err(WriterError::PageAllocation { page: 0, .. })
    ));
    assert!(matches!(
        Box::new(renderer).finish(),
        Err(RenderError::NotStarted)
    ));
}

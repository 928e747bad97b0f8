mod common;

use common::fixtures::showcase_markdown;
use common::pdf_assertions::{extract_font_names, info_value, link_actions, outline_titles};
use common::{generate_markdown, generate_with, GeneratedPdf, TestResult};
use quire::{PipelineBuilder, PipelineError};
use quire_layout::LayoutError;
use std::fs;

#[test]
fn test_showcase_document_renders_every_block() -> TestResult {
    let pdf = generate_markdown(showcase_markdown())?;
    assert_eq!(pdf.page_count(), 1);

    let text = pdf.text();
    for expected in [
        "Quarterly Report",
        "introduction",
        "Highlights",
        "Revenue grew",
        "Travel",
        "Region",
        "North",
        "println!",
        "again.",
    ] {
        assert!(text.contains(expected), "missing {:?} in:\n{}", expected, text);
    }
    Ok(())
}

#[test]
fn test_standard_fonts_are_referenced() -> TestResult {
    let pdf = generate_markdown(showcase_markdown())?;
    let fonts = extract_font_names(&pdf.doc);
    for font in ["Helvetica", "Helvetica-Bold", "Helvetica-Oblique", "Courier"] {
        assert!(fonts.contains(font), "{} not in {:?}", font, fonts);
    }
    Ok(())
}

#[test]
fn test_links_and_outline() -> TestResult {
    let pdf = generate_markdown(showcase_markdown())?;

    let actions = link_actions(&pdf.doc, 1);
    assert!(actions.contains(&("URI".to_string(), "https://example.com".to_string())));
    assert!(actions.iter().any(|(kind, _)| kind == "GoTo"));

    // "Highlights" is an h2 nested under the single h1.
    assert_eq!(outline_titles(&pdf.doc), vec!["Quarterly Report".to_string()]);
    Ok(())
}

#[test]
fn test_metadata() -> TestResult {
    let pdf = generate_with(
        PipelineBuilder::new().with_title("Q3 Report"),
        "# Body",
    )?;
    assert_eq!(info_value(&pdf.doc, b"Title").as_deref(), Some("Q3 Report"));
    let producer = info_value(&pdf.doc, b"Producer").unwrap_or_default();
    assert!(producer.starts_with("quire"), "{}", producer);
    assert!(info_value(&pdf.doc, b"CreationDate").is_some());
    Ok(())
}

#[test]
fn test_empty_input_gives_one_blank_page() -> TestResult {
    let pdf = generate_markdown("")?;
    assert_eq!(pdf.page_count(), 1);
    assert!(pdf.text().trim().is_empty());
    Ok(())
}

#[test]
fn test_custom_page_size_is_applied() -> TestResult {
    let pdf = generate_with(
        PipelineBuilder::new().with_stylesheet_json(r#"{ "page": { "size": "Letter", "margin": "1in" } }"#)?,
        "Hello",
    )?;
    let page_id = pdf.doc.get_pages()[&1];
    let media_box = pdf.doc.get_dictionary(page_id)?.get(b"MediaBox")?.as_array()?.clone();
    let dims: Vec<f32> = media_box.iter().map(|v| v.as_float().unwrap_or(-1.0)).collect();
    assert_eq!(dims, vec![0.0, 0.0, 612.0, 792.0]);
    Ok(())
}

#[test]
fn test_generate_to_writer() -> TestResult {
    let pipeline = PipelineBuilder::new().build()?;
    let buffer = pipeline.generate_to_writer("# Title\n\nBody", Vec::new())?;
    let pdf = GeneratedPdf::from_bytes(buffer)?;
    assert!(pdf.text().contains("Body"));
    Ok(())
}

#[test]
fn test_generate_to_file() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("out.pdf");
    let pipeline = PipelineBuilder::new().build()?;
    pipeline.generate_to_file("Some *text*", &path)?;

    let pdf = GeneratedPdf::from_bytes(fs::read(&path)?)?;
    assert_eq!(pdf.page_count(), 1);
    Ok(())
}

#[test]
fn test_block_json_input_file() -> TestResult {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("doc.json");
    let output = dir.path().join("doc.pdf");
    fs::write(
        &input,
        r#"[
            { "kind": "heading", "level": 2, "runs": [{ "text": "From JSON" }] },
            { "kind": "table", "header": ["k", "v"], "rows": [["a", "1"]] }
        ]"#,
    )?;

    PipelineBuilder::new().build()?.generate_file(&input, &output)?;
    let pdf = GeneratedPdf::from_bytes(fs::read(&output)?)?;
    assert!(pdf.text().contains("From JSON"));
    Ok(())
}

#[test]
fn test_failed_render_writes_nothing() -> TestResult {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("bad.json");
    let output = dir.path().join("bad.pdf");
    fs::write(
        &input,
        r#"[
            { "kind": "paragraph", "runs": [{ "text": "fine" }] },
            { "kind": "table", "header": ["a", "b"], "rows": [["1", "2", "3"]] }
        ]"#,
    )?;

    let result = PipelineBuilder::new().build()?.generate_file(&input, &output);
    assert!(matches!(
        result,
        Err(PipelineError::Layout(LayoutError::InputShape {
            block_index: 1,
            row: 0,
            expected: 2,
            found: 3
        }))
    ));
    assert!(!output.exists());
    Ok(())
}

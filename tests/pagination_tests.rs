mod common;

use common::fixtures::{long_code_block, long_table, many_paragraphs};
use common::{generate_markdown, generate_with, TestResult};
use quire::PipelineBuilder;

#[test]
fn test_paragraphs_flow_across_pages_in_order() -> TestResult {
    let pdf = generate_markdown(&many_paragraphs(150))?;
    assert!(pdf.page_count() >= 3, "only {} pages", pdf.page_count());

    let text = pdf.text();
    let mut last = 0;
    for i in 1..=150 {
        let needle = format!("Paragraph {} has", i);
        let position = text
            .find(&needle)
            .ok_or_else(|| format!("missing {:?}", needle))?;
        assert!(position >= last, "{:?} out of order", needle);
        assert_eq!(text.matches(&needle).count(), 1, "{:?} duplicated", needle);
        last = position;
    }
    Ok(())
}

#[test]
fn test_code_block_continues_on_next_page() -> TestResult {
    let pdf = generate_markdown(&long_code_block(120))?;
    assert!(pdf.page_count() >= 2);

    let first = pdf.page_text(1);
    let second = pdf.page_text(2);
    let last_on_first = (1..=120)
        .rev()
        .find(|i| first.contains(&format!("line_{:03}", i)))
        .ok_or("first page has no code lines")?;
    assert!(second.contains(&format!("line_{:03}", last_on_first + 1)));
    assert!(!second.contains(&format!("line_{:03}", last_on_first)));
    Ok(())
}

#[test]
fn test_long_table_repeats_header_on_every_page() -> TestResult {
    let pdf = generate_markdown(&long_table(150))?;
    assert!(pdf.page_count() >= 2);

    let text = pdf.text();
    for i in 1..=150 {
        assert!(text.contains(&format!("item-{}", i)), "row {} missing", i);
    }
    for page in 1..=pdf.page_count() as u32 {
        let page_text = pdf.page_text(page);
        if page_text.contains("item-") {
            assert!(page_text.contains("Name"), "page {} lacks the header", page);
        }
    }
    Ok(())
}

#[test]
fn test_page_numbers_count_every_page() -> TestResult {
    let pdf = generate_with(
        PipelineBuilder::new().with_page_numbers(true),
        &many_paragraphs(100),
    )?;
    let total = pdf.page_count();
    assert!(total > 1);
    for page in 1..=total {
        let label = format!("Page {} of {}", page, total);
        assert!(pdf.page_text(page as u32).contains(&label), "missing {:?}", label);
    }
    Ok(())
}

#[test]
fn test_small_pages_still_render_everything() -> TestResult {
    let stylesheet = r#"{ "page": { "size": { "width": 300, "height": 200 }, "margin": 20, "bottomThreshold": 20 } }"#;
    let markdown = format!(
        "# Small\n\n{}\n\n{}",
        many_paragraphs(10),
        long_code_block(30)
    );
    let pdf = generate_with(PipelineBuilder::new().with_stylesheet_json(stylesheet)?, &markdown)?;
    assert!(pdf.page_count() > 3);
    let text = pdf.text();
    assert!(text.contains("Paragraph 10 has"));
    assert!(text.contains("line_030"));
    Ok(())
}

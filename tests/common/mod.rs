#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use quire::{PipelineBuilder, PipelineError};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    pub fn text(&self) -> String {
        pdf_assertions::extract_text(&self.doc)
    }

    pub fn page_text(&self, page: u32) -> String {
        self.doc.extract_text(&[page]).unwrap_or_default()
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Renders Markdown with the default pipeline.
pub fn generate_markdown(markdown: &str) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    generate_with(PipelineBuilder::new(), markdown)
}

pub fn generate_with(
    builder: PipelineBuilder,
    markdown: &str,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    init_logging();
    let pipeline = builder.build()?;
    let bytes = pipeline.generate(markdown)?;
    GeneratedPdf::from_bytes(bytes)
}

pub fn build_default() -> Result<quire::DocumentPipeline, PipelineError> {
    PipelineBuilder::new().build()
}

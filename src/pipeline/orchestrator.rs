use super::config::{read_source, InputFormat, PipelineConfig};
use crate::error::PipelineError;
use quire_executor::{Executor, ExecutorError, ExecutorImpl};
use quire_idf::Block;
use quire_layout::LayoutEngine;
use quire_render_core::{DocumentContext, DocumentRenderer};
use quire_render_lopdf::LopdfRenderer;
use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// One self-contained render: configuration plus an engine built from it.
/// Cloning is cheap, and clones share nothing mutable.
#[derive(Debug, Clone)]
struct RenderJob {
    config: Arc<PipelineConfig>,
    engine: LayoutEngine,
}

impl RenderJob {
    fn render_blocks(&self, blocks: &[Block]) -> Result<Vec<u8>, PipelineError> {
        let start = Instant::now();
        let stylesheet = Arc::clone(&self.config.stylesheet);
        let mut renderer = LopdfRenderer::in_memory(Arc::clone(&stylesheet));
        renderer.begin_document(Cursor::new(Vec::new()), &self.config.metadata)?;

        let document = self.engine.layout(blocks, &mut renderer)?;
        let context = DocumentContext::new(&document, stylesheet.show_page_numbers);
        for page in &document.pages {
            renderer.render_page(page, &context)?;
        }
        renderer.set_outline(&document.outline, &context)?;
        let bytes = Box::new(renderer).finish()?.into_inner();

        log::info!(
            "Rendered {} blocks into {} pages ({} bytes) in {:.2?}",
            blocks.len(),
            document.pages.len(),
            bytes.len(),
            start.elapsed()
        );
        Ok(bytes)
    }

    fn render_source(&self, source: &str, format: InputFormat) -> Result<Vec<u8>, PipelineError> {
        let blocks = format.parse(source)?;
        self.render_blocks(&blocks)
    }

    fn render_file(&self, input: &Path, output: &Path) -> Result<(), PipelineError> {
        let format = InputFormat::from_path(input)?;
        let source = read_source(input)?;
        let bytes = self.render_source(&source, format)?;
        fs::write(output, bytes)?;
        log::info!("Wrote {}", output.display());
        Ok(())
    }
}

/// The main document generation pipeline.
///
/// Every entry point renders into memory first and touches its destination
/// only once the document is complete, so a failed render never leaves a
/// partial file behind.
#[derive(Debug, Clone)]
pub struct DocumentPipeline {
    job: RenderJob,
    executor: ExecutorImpl,
}

impl DocumentPipeline {
    pub(crate) fn new(config: PipelineConfig, executor: ExecutorImpl) -> Self {
        let engine = LayoutEngine::new(&config.stylesheet);
        Self {
            job: RenderJob {
                config: Arc::new(config),
                engine,
            },
            executor,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.job.config
    }

    pub fn executor(&self) -> &ExecutorImpl {
        &self.executor
    }

    pub fn layout_engine(&self) -> &LayoutEngine {
        &self.job.engine
    }

    /// Renders an already-parsed block sequence.
    pub fn render_blocks(&self, blocks: &[Block]) -> Result<Vec<u8>, PipelineError> {
        self.job.render_blocks(blocks)
    }

    /// Renders Markdown source to PDF bytes.
    pub fn generate(&self, markdown: &str) -> Result<Vec<u8>, PipelineError> {
        self.job.render_source(markdown, InputFormat::Markdown)
    }

    /// Renders Markdown and writes the PDF to `writer`, returning it.
    pub fn generate_to_writer<W: Write>(&self, markdown: &str, mut writer: W) -> Result<W, PipelineError> {
        let bytes = self.generate(markdown)?;
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(writer)
    }

    pub fn generate_to_file<P: AsRef<Path>>(&self, markdown: &str, path: P) -> Result<(), PipelineError> {
        let bytes = self.generate(markdown)?;
        fs::write(path, bytes)?;
        Ok(())
    }

    /// Renders the file at `input` to `output`. The input format follows the
    /// file extension.
    pub fn generate_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
    ) -> Result<(), PipelineError> {
        self.job.render_file(input.as_ref(), output.as_ref())
    }

    /// Renders independent Markdown documents on the configured executor.
    /// Results are in input order; one failure does not affect the others.
    pub fn generate_batch(&self, sources: Vec<String>) -> Vec<Result<Vec<u8>, PipelineError>> {
        log::info!(
            "Rendering batch of {} documents on {} (parallelism {})",
            sources.len(),
            self.executor.name(),
            self.executor.parallelism()
        );
        let job = self.job.clone();
        self.executor
            .execute_all(sources, move |source| job.render_source(&source, InputFormat::Markdown))
    }

    /// Renders `(input, output)` file pairs on the configured executor.
    pub fn generate_files(&self, jobs: Vec<(PathBuf, PathBuf)>) -> Vec<Result<(), PipelineError>> {
        let job = self.job.clone();
        self.executor
            .execute_all(jobs, move |(input, output)| job.render_file(&input, &output))
    }

    /// Renders Markdown on tokio's blocking pool.
    pub async fn generate_async(&self, markdown: String) -> Result<Vec<u8>, PipelineError> {
        let job = self.job.clone();
        tokio::task::spawn_blocking(move || job.render_source(&markdown, InputFormat::Markdown))
            .await
            .map_err(|e| ExecutorError::new(format!("render task failed: {}", e)))?
    }
}

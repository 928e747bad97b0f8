use super::config::{stylesheet_from_file, stylesheet_from_json, PipelineConfig};
use super::orchestrator::DocumentPipeline;
use crate::error::PipelineError;
use quire_executor::ExecutorImpl;
use quire_render_core::DocumentMetadata;
use quire_style::Stylesheet;
use std::path::Path;
use std::sync::Arc;

/// A builder for creating a `DocumentPipeline`.
#[derive(Debug, Clone, Default)]
pub struct PipelineBuilder {
    stylesheet: Option<Stylesheet>,
    title: Option<String>,
    page_numbers: Option<bool>,
    executor: Option<ExecutorImpl>,
}

impl PipelineBuilder {
    /// Creates a builder with the default stylesheet and the parallel executor.
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = Some(stylesheet);
        self
    }

    /// Configures the stylesheet from a JSON string.
    pub fn with_stylesheet_json(mut self, json: &str) -> Result<Self, PipelineError> {
        self.stylesheet = Some(stylesheet_from_json(json)?);
        Ok(self)
    }

    /// Configures the stylesheet from a JSON file.
    pub fn with_stylesheet_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PipelineError> {
        self.stylesheet = Some(stylesheet_from_file(path.as_ref())?);
        Ok(self)
    }

    /// Sets the title written to the document information dictionary.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Draws "Page N of M" in the bottom margin, overriding the stylesheet.
    pub fn with_page_numbers(mut self, enabled: bool) -> Self {
        self.page_numbers = Some(enabled);
        self
    }

    /// Selects the executor used by batch generation.
    pub fn with_executor(mut self, executor: ExecutorImpl) -> Self {
        self.executor = Some(executor);
        self
    }

    /// Uses a dedicated pool of `workers` threads for batch generation.
    #[cfg(feature = "rayon-executor")]
    pub fn with_worker_count(mut self, workers: usize) -> Result<Self, PipelineError> {
        let executor = quire_executor::RayonExecutor::with_threads(workers)?;
        self.executor = Some(ExecutorImpl::Rayon(executor));
        Ok(self)
    }

    #[cfg(not(feature = "rayon-executor"))]
    pub fn with_worker_count(self, workers: usize) -> Result<Self, PipelineError> {
        Err(PipelineError::Config(format!(
            "{} workers requested but quire was built without the rayon-executor feature",
            workers
        )))
    }

    /// Consumes the builder and creates the `DocumentPipeline`.
    pub fn build(self) -> Result<DocumentPipeline, PipelineError> {
        let mut stylesheet = self.stylesheet.unwrap_or_default();
        if let Some(enabled) = self.page_numbers {
            stylesheet.show_page_numbers = enabled;
        }
        stylesheet.validate()?;

        let metadata = DocumentMetadata {
            title: self.title,
            ..Default::default()
        };

        let executor = self.executor.unwrap_or_else(ExecutorImpl::parallel);
        log::debug!(
            "Building pipeline: page {:?}, executor '{}'",
            stylesheet.page.size,
            quire_executor::Executor::name(&executor)
        );

        let config = PipelineConfig {
            stylesheet: Arc::new(stylesheet),
            metadata,
        };
        Ok(DocumentPipeline::new(config, executor))
    }
}

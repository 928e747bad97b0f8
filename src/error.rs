use quire_executor::ExecutorError;
use quire_layout::LayoutError;
use quire_render_core::RenderError;
use quire_style::StyleParseError;
use thiserror::Error;

/// A comprehensive error type for the entire document generation pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Stylesheet is invalid: {0}")]
    Style(#[from] StyleParseError),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Executor failed: {0}")]
    Executor(#[from] ExecutorError),
}

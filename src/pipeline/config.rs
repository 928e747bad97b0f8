use crate::error::PipelineError;
use quire_idf::Block;
use quire_render_core::DocumentMetadata;
use quire_style::Stylesheet;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

/// Everything a render needs besides its input. Shared read-only between
/// concurrent renders.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub stylesheet: Arc<Stylesheet>,
    pub metadata: DocumentMetadata,
}

/// How a source document is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputFormat {
    #[default]
    Markdown,
    /// A JSON array of blocks, in the same shape `Block` serializes to.
    Blocks,
}

impl InputFormat {
    pub fn from_extension(extension: &str) -> Result<Self, PipelineError> {
        match extension.to_ascii_lowercase().as_str() {
            "md" | "markdown" | "txt" => Ok(InputFormat::Markdown),
            "json" => Ok(InputFormat::Blocks),
            other => Err(PipelineError::Config(format!(
                "Unsupported input file extension: .{}",
                other
            ))),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, PipelineError> {
        let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");
        Self::from_extension(extension)
    }

    pub fn parse(self, source: &str) -> Result<Vec<Block>, PipelineError> {
        match self {
            InputFormat::Markdown => Ok(quire_markdown::parse(source)),
            InputFormat::Blocks => Ok(serde_json::from_str(source)?),
        }
    }
}

/// Parses and validates a JSON stylesheet. Missing properties take their defaults.
pub fn stylesheet_from_json(json: &str) -> Result<Stylesheet, PipelineError> {
    let stylesheet: Stylesheet = serde_json::from_str(json)?;
    stylesheet.validate()?;
    Ok(stylesheet)
}

pub fn stylesheet_from_file(path: &Path) -> Result<Stylesheet, PipelineError> {
    let json = read_source(path)?;
    stylesheet_from_json(&json)
}

pub(crate) fn read_source(path: &Path) -> Result<String, PipelineError> {
    fs::read_to_string(path).map_err(|e| {
        PipelineError::Io(io::Error::new(
            e.kind(),
            format!("Failed to read '{}': {}", path.display(), e),
        ))
    })
}

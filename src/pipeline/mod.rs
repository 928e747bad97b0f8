//! Document generation pipeline.
//!
//! - [`PipelineBuilder`]: fluent builder for a configured pipeline
//! - [`DocumentPipeline`]: parses input, lays it out and writes the PDF
//! - [`InputFormat`]: selects how an input source is read

mod builder;
pub mod config;
mod orchestrator;

pub use builder::PipelineBuilder;
pub use config::{InputFormat, PipelineConfig};
pub use orchestrator::DocumentPipeline;

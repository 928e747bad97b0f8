//! Renders Markdown documents to paginated PDF.
//!
//! ```ignore
//! use quire::PipelineBuilder;
//!
//! let pipeline = PipelineBuilder::new()
//!     .with_title("Release notes")
//!     .with_page_numbers(true)
//!     .build()?;
//!
//! pipeline.generate_to_file("# Hello\n\nWorld", "hello.pdf")?;
//! ```

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{DocumentPipeline, InputFormat, PipelineBuilder, PipelineConfig};

pub use quire_executor::{Executor, ExecutorImpl, SyncExecutor};
pub use quire_idf::{Block, InlineRun, StyleTag};
pub use quire_style::Stylesheet;

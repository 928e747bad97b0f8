//! Core rendering abstractions for PDF generation.
//!
//! This crate provides the pieces shared by PDF backends:
//! - `DocumentRenderer` trait for turning laid-out pages into a document
//! - Error types for rendering operations
//! - Shared utility functions for font naming and coordinate conversion

mod context;
mod error;
mod traits;
pub mod utils;

pub use context::{DocumentContext, DocumentMetadata, LinkTarget};
pub use error::RenderError;
pub use traits::DocumentRenderer;

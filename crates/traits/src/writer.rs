//! The page-writer contract used by the layout engine.
//!
//! The engine never produces bytes itself. It asks the writer for two things
//! while laying out: how tall a table grid will be once its cells are wrapped,
//! and a handle for each new page it opens. The handle lets the writer
//! reserve whatever it needs (object ids, buffers) before the page content is
//! known, so links can target pages that have not been written yet.

use thiserror::Error;

/// Errors reported by a page writer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WriterError {
    #[error("Failed to allocate page {page}: {message}")]
    PageAllocation { page: usize, message: String },

    #[error("Failed to measure table: {0}")]
    Measurement(String),

    #[error("Writer is in an invalid state: {0}")]
    InvalidState(String),
}

/// An opaque reference to a page reserved by the writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageHandle(pub u32);

/// The operations the layout engine needs from the output backend.
///
/// Both methods are synchronous. A writer that serializes asynchronously can
/// still implement them by answering from its own measurement model.
pub trait PageWriter {
    /// Returns the height occupied by a table grid: the header row plus every
    /// data row, each cell wrapped within its column width.
    fn measure_table_height(
        &self,
        header: &[String],
        rows: &[Vec<String>],
        column_widths: &[f32],
    ) -> Result<f32, WriterError>;

    /// Reserves a new page and returns its handle.
    fn start_new_page(&mut self) -> Result<PageHandle, WriterError>;
}

impl<W: PageWriter + ?Sized> PageWriter for &mut W {
    fn measure_table_height(
        &self,
        header: &[String],
        rows: &[Vec<String>],
        column_widths: &[f32],
    ) -> Result<f32, WriterError> {
        (**self).measure_table_height(header, rows, column_widths)
    }

    fn start_new_page(&mut self) -> Result<PageHandle, WriterError> {
        (**self).start_new_page()
    }
}

impl<W: PageWriter + ?Sized> PageWriter for Box<W> {
    fn measure_table_height(
        &self,
        header: &[String],
        rows: &[Vec<String>],
        column_widths: &[f32],
    ) -> Result<f32, WriterError> {
        (**self).measure_table_height(header, rows, column_widths)
    }

    fn start_new_page(&mut self) -> Result<PageHandle, WriterError> {
        (**self).start_new_page()
    }
}

//! PDF page writer using lopdf.
//!
//! [`LopdfRenderer`] is handed to the layout engine as its page writer, then
//! drives [`DocumentRenderer`](quire_render_core::DocumentRenderer) to write
//! the laid-out pages, their links and the outline into a PDF.

mod fonts;
mod helpers;
mod renderer;
mod table;
mod writer;

pub use fonts::{font_dictionary, resource_name};
pub use helpers::{build_outlines, create_link_annotations, to_win_ansi, PageCanvas};
pub use renderer::LopdfRenderer;
pub use table::{cell_lines, TableGeometry};
pub use writer::StreamingPdfWriter;

#[cfg(test)]
mod renderer_test;

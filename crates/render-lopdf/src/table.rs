//! Table cell geometry.
//!
//! The same measurement answers the layout engine's height queries and drives
//! the drawing of the grid, so a placed table always occupies exactly the
//! height it was measured at.

use quire_layout::wrap;
use quire_style::{FontSpec, TableStyle};
use quire_traits::WriterError;

#[derive(Debug, Clone, PartialEq)]
pub struct TableGeometry {
    pub header_height: f32,
    pub row_heights: Vec<f32>,
}

impl TableGeometry {
    pub fn measure(
        header: &[String],
        rows: &[Vec<String>],
        column_widths: &[f32],
        style: &TableStyle,
    ) -> Result<Self, WriterError> {
        if column_widths.len() != header.len() {
            return Err(WriterError::Measurement(format!(
                "{} column widths given for {} header cells",
                column_widths.len(),
                header.len()
            )));
        }
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != header.len()) {
            return Err(WriterError::Measurement(format!(
                "row {} has {} cells, expected {}",
                index,
                row.len(),
                header.len()
            )));
        }

        let header_height = row_height(header, column_widths, &style.header_font, style);
        let row_heights = rows
            .iter()
            .map(|row| row_height(row, column_widths, &style.body_font, style))
            .collect();
        Ok(Self {
            header_height,
            row_heights,
        })
    }

    pub fn total_height(&self) -> f32 {
        self.header_height + self.row_heights.iter().sum::<f32>()
    }
}

/// The lines a cell's text wraps to inside its padding. Never empty.
pub fn cell_lines(text: &str, font: &FontSpec, column_width: f32, padding: f32) -> Vec<String> {
    let lines = wrap(text, font, (column_width - 2.0 * padding).max(0.0));
    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}

fn row_height(cells: &[String], widths: &[f32], font: &FontSpec, style: &TableStyle) -> f32 {
    let max_lines = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| cell_lines(cell, font, width, style.cell_padding).len())
        .max()
        .unwrap_or(1);
    max_lines as f32 * style.line_height + 2.0 * style.cell_padding
}

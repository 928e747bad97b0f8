use crate::text::measure_text_width;
use quire_style::{ColumnPolicy, TableStyle};

/// Computes the width of each column of a table laid out across `content_width`.
///
/// `Equal` divides the width evenly. `Content` shares it in proportion to
/// each column's widest cell, with every column guaranteed at least half of
/// an equal share so short columns stay readable. Content sizing falls back
/// to equal division when the table has no measurable text.
pub fn column_widths(
    header: &[String],
    rows: &[Vec<String>],
    content_width: f32,
    style: &TableStyle,
) -> Vec<f32> {
    let columns = header.len();
    if columns == 0 {
        return Vec::new();
    }
    let equal_share = content_width / columns as f32;

    match style.column_policy {
        ColumnPolicy::Equal => vec![equal_share; columns],
        ColumnPolicy::Content => {
            let natural: Vec<f32> = (0..columns)
                .map(|col| {
                    let header_width = measure_text_width(&header[col], &style.header_font);
                    rows.iter()
                        .filter_map(|row| row.get(col))
                        .map(|cell| measure_text_width(cell, &style.body_font))
                        .fold(header_width, f32::max)
                })
                .collect();

            if natural.iter().all(|w| *w <= 0.0) {
                return vec![equal_share; columns];
            }

            let floor = equal_share / 2.0;
            let weights: Vec<f32> = natural
                .iter()
                .map(|w| (w + 2.0 * style.cell_padding).max(floor))
                .collect();
            let total: f32 = weights.iter().sum();
            weights.iter().map(|w| content_width * w / total).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_equal_policy_divides_evenly() {
        let widths = column_widths(&strings(&["A", "B", "C"]), &[], 300.0, &TableStyle::default());
        assert_eq!(widths, vec![100.0, 100.0, 100.0]);
    }

    #[test]
    fn test_content_policy_favours_wide_columns() {
        let style = TableStyle {
            column_policy: ColumnPolicy::Content,
            ..Default::default()
        };
        let header = strings(&["Id", "Description"]);
        let rows = vec![strings(&["1", "A rather long description of the item"])];
        let widths = column_widths(&header, &rows, 400.0, &style);

        assert_eq!(widths.len(), 2);
        assert!(widths[1] > widths[0]);
        assert!((widths.iter().sum::<f32>() - 400.0).abs() < 0.01);
        // The narrow column keeps at least half an equal share.
        assert!(widths[0] >= 100.0 - 0.01);
    }

    #[test]
    fn test_content_policy_falls_back_for_empty_cells() {
        let style = TableStyle {
            column_policy: ColumnPolicy::Content,
            ..Default::default()
        };
        let widths = column_widths(&strings(&["", ""]), &[strings(&["", ""])], 200.0, &style);
        assert_eq!(widths, vec![100.0, 100.0]);
    }

    #[test]
    fn test_no_columns() {
        assert!(column_widths(&[], &[], 300.0, &TableStyle::default()).is_empty());
    }
}

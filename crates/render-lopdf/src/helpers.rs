//! Helper functions that turn laid-out primitives into `lopdf` structures:
//! page content streams, link annotations and the outline tree.

use crate::fonts::resource_name;
use crate::table::{cell_lines, TableGeometry};
use crate::writer::StreamingPdfWriter;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Object, ObjectId, StringFormat};
use quire_layout::{measure_text_width, LineDraw, PositionedText, Primitive, TableDraw};
use quire_render_core::utils::{baseline_y, flip_y};
use quire_render_core::{DocumentContext, LinkTarget};
use quire_style::FontSpec;
use quire_types::{Color, OutlineEntry};
use std::io::{Seek, Write};

/// Encodes text for a `WinAnsiEncoding` font. Characters the encoding lacks
/// become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c {
            '€' => 0x80,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '™' => 0x99,
            c if (c as u32) < 0x80 || (0xA0..=0xFF).contains(&(c as u32)) => c as u8,
            _ => b'?',
        })
        .collect()
}

fn rgb_operands(color: &Color) -> Vec<Object> {
    color.to_unit_rgb().iter().map(|&c| c.into()).collect()
}

#[derive(Default, Clone, PartialEq)]
struct CanvasState {
    font_name: &'static str,
    font_size: f32,
    fill_color: Option<Color>,
}

/// Accumulates the drawing operations of one page.
pub struct PageCanvas {
    page_height: f32,
    content: Content,
    state: CanvasState,
}

impl PageCanvas {
    pub fn new(page_height: f32) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: CanvasState::default(),
        }
    }

    pub fn finish(self) -> Content {
        self.content
    }

    fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    pub fn draw(&mut self, primitive: &Primitive) {
        match primitive {
            Primitive::Text(text) => self.draw_text(text),
            Primitive::Table(table) => self.draw_table(table),
            Primitive::Line(line) => self.draw_line(line),
        }
    }

    fn set_font(&mut self, font: &FontSpec) {
        let name = resource_name(font);
        if self.state.font_name != name || self.state.font_size != font.size {
            self.op("Tf", vec![Object::Name(name.as_bytes().to_vec()), font.size.into()]);
            self.state.font_name = name;
            self.state.font_size = font.size;
        }
    }

    fn set_fill_color(&mut self, color: &Color) {
        if self.state.fill_color.as_ref() != Some(color) {
            self.op("rg", rgb_operands(color));
            self.state.fill_color = Some(color.clone());
        }
    }

    /// Draws `text` with its line box starting at `top`.
    pub fn show_text(&mut self, x: f32, top: f32, line_height: f32, text: &str, font: &FontSpec) {
        if text.trim().is_empty() {
            return;
        }
        let y = flip_y(baseline_y(top, line_height, font.size), self.page_height);
        self.op("BT", vec![]);
        self.set_font(font);
        self.set_fill_color(&font.color);
        self.op("Td", vec![x.into(), y.into()]);
        self.op(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        );
        self.op("ET", vec![]);
    }

    fn draw_text(&mut self, text: &PositionedText) {
        self.show_text(text.x, text.y, text.line_height, &text.text, &text.font);
    }

    fn stroke(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.op("m", vec![x1.into(), flip_y(y1, self.page_height).into()]);
        self.op("l", vec![x2.into(), flip_y(y2, self.page_height).into()]);
        self.op("S", vec![]);
    }

    fn draw_line(&mut self, line: &LineDraw) {
        self.op("q", vec![]);
        self.op("w", vec![line.thickness.into()]);
        self.op("RG", rgb_operands(&line.color));
        self.stroke(line.x1, line.y1, line.x2, line.y2);
        self.op("Q", vec![]);
    }

    fn draw_table(&mut self, table: &TableDraw) {
        let style = &*table.style;
        let geometry = match TableGeometry::measure(
            &table.header,
            &table.rows,
            &table.column_widths,
            style,
        ) {
            Ok(geometry) => geometry,
            Err(e) => {
                log::warn!("Skipping table that cannot be measured: {}", e);
                return;
            }
        };
        let total_width: f32 = table.column_widths.iter().sum();
        let padding = style.cell_padding;

        // Header background.
        self.op("q", vec![]);
        self.op("rg", rgb_operands(&style.header_fill));
        let fill_y = flip_y(table.origin_y + geometry.header_height, self.page_height);
        self.op(
            "re",
            vec![
                table.x.into(),
                fill_y.into(),
                total_width.into(),
                geometry.header_height.into(),
            ],
        );
        self.op("f", vec![]);
        self.op("Q", vec![]);

        let mut row_top = table.origin_y;
        let mut boundaries = vec![row_top];
        let rows = std::iter::once((&table.header, geometry.header_height, &style.header_font)).chain(
            table
                .rows
                .iter()
                .zip(&geometry.row_heights)
                .map(|(row, &h)| (row, h, &style.body_font)),
        );
        for (cells, height, font) in rows {
            let mut cell_x = table.x;
            for (cell, &width) in cells.iter().zip(&table.column_widths) {
                for (i, line) in cell_lines(cell, font, width, padding).iter().enumerate() {
                    let top = row_top + padding + i as f32 * style.line_height;
                    self.show_text(cell_x + padding, top, style.line_height, line, font);
                }
                cell_x += width;
            }
            row_top += height;
            boundaries.push(row_top);
        }

        // Grid.
        self.op("q", vec![]);
        self.op("w", vec![style.border_width.into()]);
        self.op("RG", rgb_operands(&style.border_color));
        for &y in &boundaries {
            self.stroke(table.x, y, table.x + total_width, y);
        }
        let mut column_x = table.x;
        self.stroke(column_x, table.origin_y, column_x, row_top);
        for width in &table.column_widths {
            column_x += width;
            self.stroke(column_x, table.origin_y, column_x, row_top);
        }
        self.op("Q", vec![]);
    }

    /// Draws "Page N of M" centred in the bottom margin.
    pub fn draw_page_number(
        &mut self,
        page_number: usize,
        total_pages: usize,
        page_width: f32,
        margin: f32,
        font: &FontSpec,
    ) {
        let label = format!("Page {} of {}", page_number, total_pages);
        let width = measure_text_width(&label, font);
        let line_height = font.size * 1.2;
        let top = self.page_height - (margin + line_height) / 2.0;
        self.show_text((page_width - width) / 2.0, top, line_height, &label, font);
    }
}

/// Creates the link annotations for every linked text run on a page.
///
/// Internal links naming no heading are dropped with a warning.
pub fn create_link_annotations<W: Write + Seek>(
    writer: &mut StreamingPdfWriter<W>,
    primitives: &[Primitive],
    context: &DocumentContext,
    page_height: f32,
) -> Vec<ObjectId> {
    let mut annotations = Vec::new();
    for text in primitives.iter().filter_map(Primitive::as_text) {
        let Some(href) = text.href.as_deref() else {
            continue;
        };
        let action = match context.resolve_link(href) {
            Some(LinkTarget::Internal { page, y_pos }) => {
                let dest = vec![
                    Object::Reference((page.0, 0)),
                    "FitH".into(),
                    flip_y(y_pos, page_height).into(),
                ];
                dictionary! { "Type" => "Action", "S" => "GoTo", "D" => dest }
            }
            Some(LinkTarget::External(uri)) => dictionary! {
                "Type" => "Action",
                "S" => "URI",
                "URI" => Object::String(uri.as_bytes().to_vec(), StringFormat::Literal),
            },
            None => {
                log::warn!("Link target '{}' does not name a heading; dropping link", href);
                continue;
            }
        };
        let width = measure_text_width(&text.text, &text.font);
        let rect = vec![
            text.x.into(),
            flip_y(text.y + text.line_height, page_height).into(),
            (text.x + width).into(),
            flip_y(text.y, page_height).into(),
        ];
        let action_id = writer.buffer_object(action.into());
        let annot = dictionary! {
            "Type" => "Annot",
            "Subtype" => "Link",
            "Rect" => rect,
            "Border" => vec![0.into(), 0.into(), 0.into()],
            "A" => action_id,
        };
        annotations.push(writer.buffer_object(annot.into()));
    }
    annotations
}

struct OutlineNode {
    id: ObjectId,
    title: String,
    dest: Vec<Object>,
    children: Vec<OutlineNode>,
}

/// Nests flat `(level, node)` pairs: each node becomes a child of the
/// nearest preceding node with a lower level.
fn nest(flat: Vec<(u8, OutlineNode)>) -> Vec<OutlineNode> {
    let mut roots: Vec<OutlineNode> = Vec::new();
    let mut stack: Vec<(u8, OutlineNode)> = Vec::new();

    fn attach(roots: &mut Vec<OutlineNode>, stack: &mut [(u8, OutlineNode)], node: OutlineNode) {
        match stack.last_mut() {
            Some((_, parent)) => parent.children.push(node),
            None => roots.push(node),
        }
    }

    for (level, node) in flat {
        while let Some((top_level, _)) = stack.last() {
            if *top_level < level {
                break;
            }
            if let Some((_, done)) = stack.pop() {
                attach(&mut roots, &mut stack, done);
            }
        }
        stack.push((level, node));
    }
    while let Some((_, done)) = stack.pop() {
        attach(&mut roots, &mut stack, done);
    }
    roots
}

/// Creates the document outline (bookmarks) from the heading entries.
///
/// Returns the id of the root `Outlines` dictionary, or `None` when no entry
/// resolves to a page.
pub fn build_outlines<W: Write + Seek>(
    writer: &mut StreamingPdfWriter<W>,
    outline: &[OutlineEntry],
    context: &DocumentContext,
    page_height: f32,
) -> Option<ObjectId> {
    let flat: Vec<(u8, OutlineNode)> = outline
        .iter()
        .filter_map(|entry| {
            let (page, y_pos) = context.anchor(&entry.anchor)?;
            let dest = vec![
                Object::Reference((page.0, 0)),
                "FitH".into(),
                flip_y(y_pos, page_height).into(),
            ];
            Some((
                entry.level,
                OutlineNode {
                    id: writer.new_object_id(),
                    title: entry.text.clone(),
                    dest,
                    children: Vec::new(),
                },
            ))
        })
        .collect();

    let roots = nest(flat);
    let (first, last) = (roots.first()?.id, roots.last()?.id);

    let root_id = writer.new_object_id();
    writer.buffer_object_at_id(
        root_id,
        dictionary! {
            "Type" => "Outlines",
            "First" => first,
            "Last" => last,
            "Count" => roots.len() as i64,
        }
        .into(),
    );
    buffer_outline_level(writer, &roots, root_id);
    Some(root_id)
}

fn buffer_outline_level<W: Write + Seek>(
    writer: &mut StreamingPdfWriter<W>,
    items: &[OutlineNode],
    parent_id: ObjectId,
) {
    for (i, item) in items.iter().enumerate() {
        let mut dict = dictionary! {
            "Title" => Object::String(to_win_ansi(&item.title), StringFormat::Literal),
            "Parent" => parent_id,
            "Dest" => item.dest.clone(),
        };
        if i > 0 {
            dict.set("Prev", items[i - 1].id);
        }
        if let Some(next) = items.get(i + 1) {
            dict.set("Next", next.id);
        }
        if let (Some(first), Some(last)) = (item.children.first(), item.children.last()) {
            dict.set("First", first.id);
            dict.set("Last", last.id);
            dict.set("Count", -(item.children.len() as i64));
            buffer_outline_level(writer, &item.children, item.id);
        }
        writer.buffer_object_at_id(item.id, dict.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: u32) -> OutlineNode {
        OutlineNode {
            id: (id, 0),
            title: format!("n{}", id),
            dest: Vec::new(),
            children: Vec::new(),
        }
    }

    #[test]
    fn test_win_ansi_maps_typographic_characters() {
        assert_eq!(to_win_ansi("a•b–c"), vec![b'a', 0x95, b'b', 0x96, b'c']);
        assert_eq!(to_win_ansi("café"), vec![b'c', b'a', b'f', 0xE9]);
        assert_eq!(to_win_ansi("→"), vec![b'?']);
    }

    #[test]
    fn test_outline_nesting() {
        // h1, h2, h3, h2, h1
        let flat = vec![(1, node(1)), (2, node(2)), (3, node(3)), (2, node(4)), (1, node(5))];
        let roots = nest(flat);
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[0].id, (1, 0));
        let children: Vec<_> = roots[0].children.iter().map(|c| c.id.0).collect();
        assert_eq!(children, vec![2, 4]);
        assert_eq!(roots[0].children[0].children[0].id, (3, 0));
        assert!(roots[1].children.is_empty());
    }

    #[test]
    fn test_outline_starting_below_top_level() {
        let roots = nest(vec![(2, node(1)), (1, node(2)), (3, node(3))]);
        let ids: Vec<_> = roots.iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(roots[1].children[0].id, (3, 0));
    }

    #[test]
    fn test_canvas_caches_font_selection() {
        let mut canvas = PageCanvas::new(842.0);
        let font = FontSpec::default();
        canvas.show_text(50.0, 50.0, 15.0, "one", &font);
        canvas.show_text(50.0, 65.0, 15.0, "two", &font);
        canvas.show_text(50.0, 80.0, 15.0, "   ", &font);
        let ops: Vec<_> = canvas.finish().operations.into_iter().map(|o| o.operator).collect();
        assert_eq!(ops.iter().filter(|o| *o == "Tf").count(), 1);
        assert_eq!(ops.iter().filter(|o| *o == "Tj").count(), 2);
    }
}

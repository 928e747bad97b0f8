use crate::fonts::font_dictionary;
use crate::helpers::{self, PageCanvas};
use crate::table::TableGeometry;
use crate::writer::StreamingPdfWriter;
use lopdf::{dictionary, Dictionary, Object, ObjectId, StringFormat};
use quire_layout::Page;
use quire_render_core::{DocumentContext, DocumentMetadata, DocumentRenderer, RenderError};
use quire_style::{FontSpec, Stylesheet};
use quire_traits::{PageHandle, PageWriter, WriterError};
use quire_types::{Color, OutlineEntry};
use std::io::{Cursor, Seek, Write};
use std::sync::Arc;

const PDF_VERSION: &str = "1.7";
const FOOTER_FONT_SIZE: f32 = 9.0;

/// A PDF page writer and document renderer over `lopdf`.
///
/// During layout it answers table measurements and reserves one object id
/// per page, which doubles as the page handle. Pages are then rendered into
/// those reserved ids, so links and outline entries can point at any page.
pub struct LopdfRenderer<W: Write + Seek + Send> {
    writer: Option<StreamingPdfWriter<W>>,
    stylesheet: Arc<Stylesheet>,
    page_width: f32,
    page_height: f32,
    reserved_pages: Vec<ObjectId>,
    page_ids: Vec<ObjectId>,
    outline_root_id: Option<ObjectId>,
}

impl<W: Write + Seek + Send> LopdfRenderer<W> {
    pub fn new(stylesheet: Arc<Stylesheet>) -> Self {
        let (page_width, page_height) = stylesheet.page.size.dimensions_pt();
        Self {
            writer: None,
            stylesheet,
            page_width,
            page_height,
            reserved_pages: Vec::new(),
            page_ids: Vec::new(),
            outline_root_id: None,
        }
    }

    pub fn page_size(&self) -> (f32, f32) {
        (self.page_width, self.page_height)
    }

    /// Number of pages reserved through [`PageWriter::start_new_page`].
    pub fn reserved_page_count(&self) -> usize {
        self.reserved_pages.len()
    }

    fn writer_mut(&mut self) -> Result<&mut StreamingPdfWriter<W>, RenderError> {
        self.writer.as_mut().ok_or(RenderError::NotStarted)
    }

    fn info_dictionary(metadata: &DocumentMetadata) -> Dictionary {
        let created = chrono::Utc::now().format("D:%Y%m%d%H%M%SZ").to_string();
        let mut info = dictionary! {
            "Producer" => Object::String(helpers::to_win_ansi(&metadata.producer), StringFormat::Literal),
            "CreationDate" => Object::string_literal(created),
        };
        if let Some(title) = &metadata.title {
            info.set(
                "Title",
                Object::String(helpers::to_win_ansi(title), StringFormat::Literal),
            );
        }
        info
    }

    fn footer_font(&self) -> FontSpec {
        FontSpec::new(self.stylesheet.body.font.family, FOOTER_FONT_SIZE).with_color(Color::gray(90))
    }
}

impl LopdfRenderer<Cursor<Vec<u8>>> {
    /// Renderer writing into an in-memory buffer.
    pub fn in_memory(stylesheet: Arc<Stylesheet>) -> Self {
        Self::new(stylesheet)
    }
}

impl<W: Write + Seek + Send> PageWriter for LopdfRenderer<W> {
    fn measure_table_height(
        &self,
        header: &[String],
        rows: &[Vec<String>],
        column_widths: &[f32],
    ) -> Result<f32, WriterError> {
        TableGeometry::measure(header, rows, column_widths, &self.stylesheet.table)
            .map(|geometry| geometry.total_height())
    }

    fn start_new_page(&mut self) -> Result<PageHandle, WriterError> {
        let page = self.reserved_pages.len();
        let writer = self.writer.as_mut().ok_or_else(|| WriterError::PageAllocation {
            page,
            message: "document not started".into(),
        })?;
        let id = writer.new_object_id();
        self.reserved_pages.push(id);
        log::trace!("Reserved object {} for page {}", id.0, page + 1);
        Ok(PageHandle(id.0))
    }
}

impl<W: Write + Seek + Send> DocumentRenderer<W> for LopdfRenderer<W> {
    fn begin_document(&mut self, writer: W, metadata: &DocumentMetadata) -> Result<(), RenderError> {
        let mut pdf = StreamingPdfWriter::new(writer, PDF_VERSION, font_dictionary())?;
        pdf.set_info(Self::info_dictionary(metadata));
        self.writer = Some(pdf);
        self.reserved_pages.clear();
        self.page_ids.clear();
        self.outline_root_id = None;
        Ok(())
    }

    fn render_page(&mut self, page: &Page, context: &DocumentContext) -> Result<(), RenderError> {
        let (page_width, page_height) = self.page_size();
        let page_id: ObjectId = (page.handle.0, 0);
        if !self.reserved_pages.contains(&page_id) {
            return Err(RenderError::Other(format!(
                "page {} was not reserved by this renderer",
                page.index + 1
            )));
        }

        let mut canvas = PageCanvas::new(page_height);
        for primitive in &page.primitives {
            canvas.draw(primitive);
        }
        if context.show_page_numbers {
            let font = self.footer_font();
            canvas.draw_page_number(
                page.index + 1,
                context.total_pages,
                page_width,
                self.stylesheet.page.margin,
                &font,
            );
        }

        let writer = self.writer_mut()?;
        let content_id = writer.buffer_content_stream(canvas.finish())?;
        let annotations =
            helpers::create_link_annotations(writer, &page.primitives, context, page_height);

        let mut page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => writer.pages_id,
            "MediaBox" => vec![0.0.into(), 0.0.into(), page_width.into(), page_height.into()],
            "Contents" => content_id,
            "Resources" => writer.resources_id,
        };
        if !annotations.is_empty() {
            page_dict.set(
                "Annots",
                annotations
                    .into_iter()
                    .map(Object::Reference)
                    .collect::<Vec<Object>>(),
            );
        }
        writer.buffer_object_at_id(page_id, page_dict.into());
        self.page_ids.push(page_id);
        log::debug!(
            "Rendered page {} with {} primitives",
            page.index + 1,
            page.primitives.len()
        );
        Ok(())
    }

    fn set_outline(
        &mut self,
        outline: &[OutlineEntry],
        context: &DocumentContext,
    ) -> Result<(), RenderError> {
        let page_height = self.page_height;
        let root = helpers::build_outlines(self.writer_mut()?, outline, context, page_height);
        self.outline_root_id = root;
        Ok(())
    }

    fn finish(mut self: Box<Self>) -> Result<W, RenderError> {
        let mut writer = self.writer.take().ok_or(RenderError::NotStarted)?;
        writer.set_page_ids(std::mem::take(&mut self.page_ids));
        writer.set_outline_root_id(self.outline_root_id);
        Ok(writer.finish()?)
    }
}

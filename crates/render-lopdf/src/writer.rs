//! A PDF object writer that buffers objects and emits them with a single
//! cross-reference section on `finish`.

use lopdf::content::Content;
use lopdf::{dictionary, Dictionary, Object, ObjectId, Stream, StringFormat};
use quire_render_core::RenderError;
use std::collections::BTreeMap;
use std::io::{self, Seek, Write};

pub struct StreamingPdfWriter<W: Write + Seek> {
    writer: W,
    max_id: u32,
    pub catalog_id: ObjectId,
    pub pages_id: ObjectId,
    pub resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    outline_root_id: Option<ObjectId>,
    info_id: Option<ObjectId>,
    buffered_objects: BTreeMap<ObjectId, Object>,
}

impl<W: Write + Seek> StreamingPdfWriter<W> {
    pub fn new(mut writer: W, version: &str, font_dict: Dictionary) -> io::Result<Self> {
        writer.write_all(format!("%PDF-{}\n%âãÏÓ\n", version).as_bytes())?;

        let resources_id = (1, 0);
        let pages_id = (2, 0);
        let catalog_id = (3, 0);

        let mut buffered_objects = BTreeMap::new();
        buffered_objects.insert(resources_id, dictionary! { "Font" => font_dict }.into());

        Ok(Self {
            writer,
            max_id: 3,
            catalog_id,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            outline_root_id: None,
            info_id: None,
            buffered_objects,
        })
    }

    pub fn new_object_id(&mut self) -> ObjectId {
        self.max_id += 1;
        (self.max_id, 0)
    }

    pub fn buffer_object(&mut self, object: Object) -> ObjectId {
        let id = self.new_object_id();
        self.buffered_objects.insert(id, object);
        id
    }

    pub fn buffer_object_at_id(&mut self, id: ObjectId, object: Object) {
        self.max_id = self.max_id.max(id.0);
        self.buffered_objects.insert(id, object);
    }

    pub fn buffer_content_stream(&mut self, content: Content) -> Result<ObjectId, RenderError> {
        let stream = Stream::new(dictionary! {}, content.encode()?);
        Ok(self.buffer_object(Object::Stream(stream)))
    }

    pub fn set_page_ids(&mut self, page_ids: Vec<ObjectId>) {
        self.page_ids = page_ids;
    }

    pub fn set_outline_root_id(&mut self, outline_root_id: Option<ObjectId>) {
        self.outline_root_id = outline_root_id;
    }

    pub fn set_info(&mut self, info: Dictionary) {
        self.info_id = Some(self.buffer_object(info.into()));
    }

    pub fn object_count(&self) -> usize {
        self.buffered_objects.len()
    }

    pub fn finish(mut self) -> io::Result<W> {
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => self.page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
            "Count" => self.page_ids.len() as i64,
        };
        self.buffer_object_at_id(self.pages_id, pages_dict.into());

        let mut catalog_dict = dictionary! { "Type" => "Catalog", "Pages" => self.pages_id };
        if let Some(outline_id) = self.outline_root_id {
            catalog_dict.set("Outlines", outline_id);
            catalog_dict.set("PageMode", "UseOutlines");
        }
        self.buffer_object_at_id(self.catalog_id, catalog_dict.into());

        // Ids reserved but never filled (a page whose render failed) stay free entries.
        let mut offsets: Vec<Option<u64>> = vec![None; self.max_id as usize + 1];
        for (id, object) in &self.buffered_objects {
            offsets[id.0 as usize] = Some(self.writer.stream_position()?);
            write!(self.writer, "{} {} obj\n", id.0, id.1)?;
            serialize::write_object(&mut self.writer, object)?;
            writeln!(self.writer, "\nendobj")?;
        }

        let xref_start = self.writer.stream_position()?;
        writeln!(self.writer, "xref")?;
        writeln!(self.writer, "0 {}", offsets.len())?;
        for offset in &offsets {
            match offset {
                Some(offset) => writeln!(self.writer, "{:010} 00000 n ", offset)?,
                None => writeln!(self.writer, "0000000000 65535 f ")?,
            }
        }

        let mut trailer = dictionary! { "Size" => offsets.len() as i64, "Root" => self.catalog_id };
        if let Some(info_id) = self.info_id {
            trailer.set("Info", info_id);
        }
        writeln!(self.writer, "trailer")?;
        serialize::write_dictionary(&mut self.writer, &trailer)?;
        writeln!(self.writer, "\nstartxref")?;
        writeln!(self.writer, "{}", xref_start)?;
        write!(self.writer, "%%EOF")?;

        self.writer.flush()?;
        Ok(self.writer)
    }
}

mod serialize {
    use super::*;

    pub fn write_object(writer: &mut dyn Write, object: &Object) -> io::Result<()> {
        match object {
            Object::Null => writer.write_all(b"null"),
            Object::Boolean(b) => writer.write_all(if *b { b"true" } else { b"false" }),
            Object::Integer(i) => write!(writer, "{}", i),
            Object::Real(r) => write!(writer, "{:.3}", r),
            Object::Name(n) => {
                writer.write_all(b"/")?;
                writer.write_all(n)
            }
            Object::String(s, StringFormat::Literal) => {
                writer.write_all(b"(")?;
                for &byte in s {
                    if matches!(byte, b'(' | b')' | b'\\') {
                        writer.write_all(b"\\")?;
                    }
                    writer.write_all(&[byte])?;
                }
                writer.write_all(b")")
            }
            Object::String(s, StringFormat::Hexadecimal) => {
                writer.write_all(b"<")?;
                for byte in s {
                    write!(writer, "{:02X}", byte)?;
                }
                writer.write_all(b">")
            }
            Object::Array(items) => {
                writer.write_all(b"[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        writer.write_all(b" ")?;
                    }
                    write_object(writer, item)?;
                }
                writer.write_all(b"]")
            }
            Object::Dictionary(dict) => write_dictionary(writer, dict),
            Object::Stream(stream) => {
                let mut dict = stream.dict.clone();
                dict.set("Length", stream.content.len() as i64);
                write_dictionary(writer, &dict)?;
                writer.write_all(b"\nstream\n")?;
                writer.write_all(&stream.content)?;
                writer.write_all(b"\nendstream")
            }
            Object::Reference(id) => write!(writer, "{} {} R", id.0, id.1),
        }
    }

    pub fn write_dictionary(writer: &mut dyn Write, dict: &Dictionary) -> io::Result<()> {
        writer.write_all(b"<<")?;
        let sorted: BTreeMap<_, _> = dict.iter().collect();
        for (key, value) in sorted {
            writer.write_all(b"/")?;
            writer.write_all(key)?;
            writer.write_all(b" ")?;
            write_object(writer, value)?;
            writer.write_all(b" ")?;
        }
        writer.write_all(b">>")
    }
}

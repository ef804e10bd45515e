use crate::document::Document;
use crate::error::{PdfError, Result};
use crate::objects::{Dictionary, Object, ObjectId, Stream};
use crate::page::Page;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

const CATALOG_ID: u32 = 1;
const PAGES_ID: u32 = 2;
const FIRST_PAGE_ID: u32 = 3;

/// Serialises a [`Document`] as a PDF 1.7 file.
///
/// Object numbers are assigned in a fixed layout: catalog 1, page tree 2,
/// then one page object and one content stream per page, then the info
/// dictionary.
pub struct PdfWriter<W: Write> {
    writer: W,
    xref_positions: BTreeMap<ObjectId, u64>,
    current_position: u64,
}

impl<W: Write> PdfWriter<W> {
    pub fn new_with_writer(writer: W) -> Self {
        Self {
            writer,
            xref_positions: BTreeMap::new(),
            current_position: 0,
        }
    }

    pub fn write_document(&mut self, document: &Document) -> Result<()> {
        validate_pages(document)?;
        self.write_header()?;

        let catalog_id = self.write_catalog()?;
        self.write_pages(document)?;
        let info_id = self.write_info(document)?;

        let xref_position = self.current_position;
        self.write_xref()?;
        self.write_trailer(catalog_id, info_id, xref_position)?;

        self.writer.flush()?;
        debug!(
            pages = document.page_count(),
            bytes = self.current_position,
            "wrote PDF document"
        );
        Ok(())
    }

    fn write_header(&mut self) -> Result<()> {
        self.write_bytes(b"%PDF-1.7\n")?;
        // Binary comment so transfer tools treat the file as binary
        self.write_bytes(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n'])?;
        Ok(())
    }

    fn write_catalog(&mut self) -> Result<ObjectId> {
        let catalog_id = ObjectId::new(CATALOG_ID, 0);

        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::name("Catalog"));
        catalog.set("Pages", ObjectId::new(PAGES_ID, 0));

        self.write_object(catalog_id, Object::Dictionary(catalog))?;
        Ok(catalog_id)
    }

    fn write_pages(&mut self, document: &Document) -> Result<ObjectId> {
        let pages_id = ObjectId::new(PAGES_ID, 0);
        let page_ids: Vec<(ObjectId, ObjectId)> = (0..document.page_count())
            .map(|i| {
                let base = FIRST_PAGE_ID + i as u32 * 2;
                (ObjectId::new(base, 0), ObjectId::new(base + 1, 0))
            })
            .collect();

        let mut pages_dict = Dictionary::new();
        pages_dict.set("Type", Object::name("Pages"));
        pages_dict.set(
            "Kids",
            page_ids
                .iter()
                .map(|(page_id, _)| Object::Reference(*page_id))
                .collect::<Vec<_>>(),
        );
        pages_dict.set("Count", document.page_count() as i64);

        self.write_object(pages_id, Object::Dictionary(pages_dict))?;

        for (index, (page, (page_id, content_id))) in
            document.pages().iter().zip(page_ids).enumerate()
        {
            self.write_page(page_id, pages_id, content_id, page)?;
            self.write_page_content(content_id, page)?;
            debug!(page = index + 1, object = page_id.number(), "wrote page");
        }

        Ok(pages_id)
    }

    fn write_page(
        &mut self,
        page_id: ObjectId,
        parent_id: ObjectId,
        content_id: ObjectId,
        page: &Page,
    ) -> Result<()> {
        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::name("Page"));
        page_dict.set("Parent", parent_id);
        page_dict.set(
            "MediaBox",
            vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(page.width()),
                Object::Real(page.height()),
            ],
        );
        page_dict.set("Contents", content_id);
        page_dict.set("Resources", Dictionary::new());

        self.write_object(page_id, Object::Dictionary(page_dict))
    }

    fn write_page_content(&mut self, content_id: ObjectId, page: &Page) -> Result<()> {
        #[allow(unused_mut)]
        let mut stream = Stream::new(page.generate_content());

        #[cfg(feature = "compression")]
        stream.compress_flate()?;

        self.write_object(content_id, stream.into_object())
    }

    fn write_info(&mut self, document: &Document) -> Result<ObjectId> {
        let info_id = ObjectId::new(FIRST_PAGE_ID + document.page_count() as u32 * 2, 0);
        let metadata = document.metadata();
        let mut info_dict = Dictionary::new();

        let text_fields = [
            ("Title", &metadata.title),
            ("Author", &metadata.author),
            ("Subject", &metadata.subject),
            ("Keywords", &metadata.keywords),
            ("Creator", &metadata.creator),
            ("Producer", &metadata.producer),
        ];
        for (key, value) in text_fields {
            if let Some(value) = value {
                info_dict.set(key, value.as_str());
            }
        }

        if let Some(creation_date) = metadata.creation_date {
            info_dict.set("CreationDate", format_pdf_date(creation_date));
        }
        if let Some(mod_date) = metadata.modification_date {
            info_dict.set("ModDate", format_pdf_date(mod_date));
        }

        self.write_object(info_id, Object::Dictionary(info_dict))?;
        Ok(info_id)
    }
}

impl PdfWriter<BufWriter<std::fs::File>> {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::create(path)?;
        Ok(Self::new_with_writer(BufWriter::new(file)))
    }
}

impl<W: Write> PdfWriter<W> {
    fn write_object(&mut self, id: ObjectId, object: Object) -> Result<()> {
        self.xref_positions.insert(id, self.current_position);

        let header = format!("{} {} obj\n", id.number(), id.generation());
        self.write_bytes(header.as_bytes())?;

        self.write_object_value(&object)?;

        self.write_bytes(b"\nendobj\n")?;
        Ok(())
    }

    fn write_object_value(&mut self, object: &Object) -> Result<()> {
        match object {
            Object::Integer(i) => self.write_bytes(i.to_string().as_bytes())?,
            Object::Real(f) => self.write_bytes(format_real(*f).as_bytes())?,
            Object::String(s) if s.is_ascii() => {
                self.write_bytes(b"(")?;
                self.write_bytes(escape_string(s).as_bytes())?;
                self.write_bytes(b")")?;
            }
            Object::String(s) => {
                self.write_bytes(utf16_hex_string(s).as_bytes())?;
            }
            Object::Name(n) => {
                self.write_bytes(b"/")?;
                self.write_bytes(n.as_bytes())?;
            }
            Object::Array(arr) => {
                self.write_bytes(b"[")?;
                for (i, obj) in arr.iter().enumerate() {
                    if i > 0 {
                        self.write_bytes(b" ")?;
                    }
                    self.write_object_value(obj)?;
                }
                self.write_bytes(b"]")?;
            }
            Object::Dictionary(dict) => {
                self.write_bytes(b"<<")?;
                for (key, value) in dict.entries() {
                    self.write_bytes(b"\n/")?;
                    self.write_bytes(key.as_bytes())?;
                    self.write_bytes(b" ")?;
                    self.write_object_value(value)?;
                }
                self.write_bytes(b"\n>>")?;
            }
            Object::Stream(dict, data) => {
                self.write_object_value(&Object::Dictionary(dict.clone()))?;
                self.write_bytes(b"\nstream\n")?;
                self.write_bytes(data)?;
                self.write_bytes(b"\nendstream")?;
            }
            Object::Reference(id) => {
                let ref_str = format!("{} {} R", id.number(), id.generation());
                self.write_bytes(ref_str.as_bytes())?;
            }
        }
        Ok(())
    }

    fn write_xref(&mut self) -> Result<()> {
        let max_obj_num = self.max_object_number();

        self.write_bytes(b"xref\n")?;
        self.write_bytes(format!("0 {}\n", max_obj_num + 1).as_bytes())?;
        self.write_bytes(b"0000000000 65535 f \n")?;

        for obj_num in 1..=max_obj_num {
            let entry = match self.xref_positions.get(&ObjectId::new(obj_num, 0)) {
                Some(position) => format!("{position:010} 00000 n \n"),
                None => "0000000000 00000 f \n".to_string(),
            };
            self.write_bytes(entry.as_bytes())?;
        }

        Ok(())
    }

    fn write_trailer(
        &mut self,
        catalog_id: ObjectId,
        info_id: ObjectId,
        xref_position: u64,
    ) -> Result<()> {
        let mut trailer = Dictionary::new();
        trailer.set("Size", i64::from(self.max_object_number()) + 1);
        trailer.set("Root", catalog_id);
        trailer.set("Info", info_id);

        self.write_bytes(b"trailer\n")?;
        self.write_object_value(&Object::Dictionary(trailer))?;
        self.write_bytes(b"\nstartxref\n")?;
        self.write_bytes(xref_position.to_string().as_bytes())?;
        self.write_bytes(b"\n%%EOF\n")?;

        Ok(())
    }

    fn max_object_number(&self) -> u32 {
        self.xref_positions
            .keys()
            .map(|id| id.number())
            .max()
            .unwrap_or(0)
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        self.current_position += data.len() as u64;
        Ok(())
    }
}

/// Checks that every page can be given a MediaBox.
///
/// Runs before anything is written, so a rejected document leaves no
/// partial output behind.
pub(crate) fn validate_pages(document: &Document) -> Result<()> {
    for (index, page) in document.pages().iter().enumerate() {
        let (width, height) = (page.width(), page.height());
        let valid = |side: f64| side.is_finite() && side > 0.0;
        if !(valid(width) && valid(height)) {
            return Err(PdfError::InvalidStructure(format!(
                "page {} has invalid size {width}x{height}",
                index + 1
            )));
        }
    }
    Ok(())
}

fn format_real(value: f64) -> String {
    let formatted = format!("{value:.6}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn escape_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '(' | ')' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Encodes text as a UTF-16BE hex string with a byte order mark, the form
/// PDF text strings take outside PDFDocEncoding.
fn utf16_hex_string(value: &str) -> String {
    let mut hex = String::with_capacity(6 + value.len() * 4);
    hex.push_str("<FEFF");
    for unit in value.encode_utf16() {
        let _ = write!(hex, "{unit:04X}");
    }
    hex.push('>');
    hex
}

/// Format a DateTime as a PDF date string (D:YYYYMMDDHHmmSS+00'00)
fn format_pdf_date(date: DateTime<Utc>) -> String {
    let formatted = date.format("D:%Y%m%d%H%M%S");
    format!("{formatted}+00'00")
}

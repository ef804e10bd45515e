use crate::drawable::{DocumentHandle, Provider};
use crate::error::{PdfError, Result};
use crate::page::Page;
use crate::writer::{validate_pages, PdfWriter};
use chrono::{DateTime, Local, Utc};
use tracing::debug;

/// A PDF document that can contain multiple pages and metadata.
///
/// As a [`DocumentHandle`], a document reports its most recently added page
/// as the provider, so drawing helpers always target the page being built.
///
/// # Example
///
/// ```rust
/// use pdfdraw::{Document, Page};
///
/// let mut doc = Document::new();
/// doc.set_title("My Document");
/// doc.set_author("Jane Doe");
///
/// doc.add_page(Page::a4());
///
/// let mut buffer = Vec::new();
/// doc.write(&mut buffer).unwrap();
/// assert!(buffer.starts_with(b"%PDF-1.7"));
/// ```
pub struct Document {
    pages: Vec<Page>,
    metadata: DocumentMetadata,
}

/// Metadata for a PDF document.
#[derive(Debug, Clone)]
pub struct DocumentMetadata {
    /// Document title
    pub title: Option<String>,
    /// Document author
    pub author: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Document keywords
    pub keywords: Option<String>,
    /// Software that created the original document
    pub creator: Option<String>,
    /// Software that produced the PDF
    pub producer: Option<String>,
    /// Date and time the document was created
    pub creation_date: Option<DateTime<Utc>>,
    /// Date and time the document was last modified
    pub modification_date: Option<DateTime<Utc>>,
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            title: None,
            author: None,
            subject: None,
            keywords: None,
            creator: Some("pdfdraw".to_string()),
            producer: Some(format!("pdfdraw v{}", env!("CARGO_PKG_VERSION"))),
            creation_date: Some(now),
            modification_date: Some(now),
        }
    }
}

impl Document {
    /// Creates a new empty PDF document.
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            metadata: DocumentMetadata::default(),
        }
    }

    /// Adds a page to the document. It becomes the current page.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// The most recently added page, if any.
    pub fn current_page_mut(&mut self) -> Option<&mut Page> {
        self.pages.last_mut()
    }

    /// Returns the page at a zero-based index.
    pub fn page_mut(&mut self, index: u32) -> Result<&mut Page> {
        self.pages
            .get_mut(index as usize)
            .ok_or(PdfError::InvalidPageNumber(index))
    }

    /// Gets the number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }

    /// Sets the document title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.metadata.title = Some(title.into());
    }

    /// Sets the document author.
    pub fn set_author(&mut self, author: impl Into<String>) {
        self.metadata.author = Some(author.into());
    }

    /// Sets the document subject.
    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.metadata.subject = Some(subject.into());
    }

    /// Sets the document keywords.
    pub fn set_keywords(&mut self, keywords: impl Into<String>) {
        self.metadata.keywords = Some(keywords.into());
    }

    /// Sets the document creator (software that created the original document).
    pub fn set_creator(&mut self, creator: impl Into<String>) {
        self.metadata.creator = Some(creator.into());
    }

    /// Sets the document producer (software that produced the PDF).
    pub fn set_producer(&mut self, producer: impl Into<String>) {
        self.metadata.producer = Some(producer.into());
    }

    /// Sets the document creation date.
    pub fn set_creation_date(&mut self, date: DateTime<Utc>) {
        self.metadata.creation_date = Some(date);
    }

    /// Sets the document creation date using local time.
    pub fn set_creation_date_local(&mut self, date: DateTime<Local>) {
        self.metadata.creation_date = Some(date.with_timezone(&Utc));
    }

    /// Sets the modification date to the current time.
    pub fn update_modification_date(&mut self) {
        self.metadata.modification_date = Some(Utc::now());
    }

    /// Saves the document to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written, or if a
    /// page size is not a positive finite number. An invalid document is
    /// rejected before the file is created.
    pub fn save(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        self.update_modification_date();

        let path = path.as_ref();
        validate_pages(self)?;
        debug!(path = %path.display(), "saving document");
        let mut writer = PdfWriter::new(path)?;
        writer.write_document(self)
    }

    /// Writes the document to a buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the PDF cannot be generated.
    pub fn write(&mut self, buffer: &mut Vec<u8>) -> Result<()> {
        self.update_modification_date();

        let mut writer = PdfWriter::new_with_writer(buffer);
        writer.write_document(self)
    }

    /// Renders the document into a new buffer.
    pub fn to_bytes(&mut self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write(&mut buffer)?;
        Ok(buffer)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentHandle for Document {
    fn provider(&mut self) -> Option<&mut dyn Provider> {
        self.pages.last_mut().map(|page| page as &mut dyn Provider)
    }
}

//! Line providers: the source of per-page text lines for outline extraction.

use std::path::Path;

use crate::detect::{sniff_version, sniff_version_from_path};
use crate::error::{Error, Result};
use crate::model::{Page, TextLine};

use super::backend::{LopdfBackend, PageId, PdfBackend};
use super::layout::{extract_page_spans, group_spans_into_lines};
use super::options::{ErrorMode, ParseOptions};

/// Supplies the pages of one document as ordered text lines.
pub trait LineProvider {
    /// Lines of every page, in page order.
    fn pages(&self) -> Result<Vec<Page>>;

    /// Title from document metadata, trimmed; `None` when absent or blank.
    fn metadata_title(&self) -> Option<String>;
}

/// Line provider reading a PDF through [`PdfBackend`].
pub struct PdfLineProvider {
    backend: Box<dyn PdfBackend>,
    options: ParseOptions,
}

impl PdfLineProvider {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a PDF file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        let version = sniff_version_from_path(path)?;
        log::debug!("opening {} (PDF {})", path.display(), version);

        let backend = LopdfBackend::load_file(path)?;
        Ok(Self::with_backend(Box::new(backend), options))
    }

    /// Read a PDF from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Read a PDF from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        sniff_version(data)?;
        let backend = LopdfBackend::load_bytes(data)?;
        Ok(Self::with_backend(Box::new(backend), options))
    }

    /// Use an arbitrary backend.
    pub fn with_backend(backend: Box<dyn PdfBackend>, options: ParseOptions) -> Self {
        Self { backend, options }
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.backend.pages().len()
    }

    /// Lines of a single page (1-based page number).
    pub fn page_lines(&self, page_num: u32) -> Result<Page> {
        let pages = self.backend.pages();
        let page_id = pages
            .get(&page_num)
            .ok_or(Error::PageOutOfRange(page_num, pages.len() as u32))?;
        self.read_page(page_num, *page_id)
    }

    fn read_page(&self, page_num: u32, page_id: PageId) -> Result<Page> {
        let spans = match extract_page_spans(self.backend.as_ref(), page_id) {
            Ok(spans) => spans,
            Err(e) if self.options.error_mode == ErrorMode::Lenient => {
                log::warn!("Failed to extract text from page {}: {}", page_num, e);
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let height = self.backend.page_height(page_id);
        let lines = group_spans_into_lines(spans, height);
        log::debug!("page {}: {} lines", page_num, lines.len());
        Ok(lines)
    }
}

impl LineProvider for PdfLineProvider {
    fn pages(&self) -> Result<Vec<Page>> {
        self.backend
            .pages()
            .into_iter()
            .map(|(page_num, page_id)| self.read_page(page_num, page_id))
            .collect()
    }

    fn metadata_title(&self) -> Option<String> {
        clean_title(self.backend.info_string(b"Title"))
    }
}

/// In-memory line provider for callers that extract lines themselves.
#[derive(Debug, Clone, Default)]
pub struct VecLineProvider {
    pages: Vec<Page>,
    title: Option<String>,
}

impl VecLineProvider {
    /// Create a provider over already-extracted pages.
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages, title: None }
    }

    /// Set the metadata title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Append a page.
    pub fn push_page(&mut self, lines: Vec<TextLine>) {
        self.pages.push(lines);
    }
}

impl LineProvider for VecLineProvider {
    fn pages(&self) -> Result<Vec<Page>> {
        Ok(self.pages.clone())
    }

    fn metadata_title(&self) -> Option<String> {
        clean_title(self.title.clone())
    }
}

fn clean_title(title: Option<String>) -> Option<String> {
    title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

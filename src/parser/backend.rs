//! PDF backend abstraction layer.
//!
//! Line extraction only talks to [`PdfBackend`]; the lopdf types stay in
//! this file.

use std::collections::BTreeMap;

use lopdf::{Document as LopdfDocument, Object};

use crate::error::{Error, Result};

/// Page identifier: (object number, generation number).
pub type PageId = (u32, u16);

/// US Letter height, used when a page has no usable `/MediaBox`.
pub const DEFAULT_PAGE_HEIGHT: f32 = 792.0;

const MAX_TREE_DEPTH: usize = 32;

/// A font resource on a page.
#[derive(Debug, Clone)]
pub struct BackendFontInfo {
    /// Resource name (key in the page's font dictionary).
    pub name: Vec<u8>,
    /// Base font name (e.g., "Helvetica-Bold").
    pub base_font: String,
}

/// A value from a PDF content stream operand.
#[derive(Debug, Clone)]
pub enum PdfValue {
    Integer(i64),
    Real(f32),
    Name(Vec<u8>),
    Str(Vec<u8>),
    Array(Vec<PdfValue>),
    Other,
}

impl PdfValue {
    /// Numeric value of an integer or real operand.
    pub fn as_number(&self) -> Option<f32> {
        match self {
            PdfValue::Integer(i) => Some(*i as f32),
            PdfValue::Real(r) => Some(*r),
            _ => None,
        }
    }
}

/// A single operation from a PDF content stream.
#[derive(Debug, Clone)]
pub struct ContentOp {
    pub operator: String,
    pub operands: Vec<PdfValue>,
}

impl ContentOp {
    /// Numeric operand at `index`, or `default` when missing or not a number.
    pub fn number(&self, index: usize, default: f32) -> f32 {
        self.operands
            .get(index)
            .and_then(PdfValue::as_number)
            .unwrap_or(default)
    }
}

/// Abstract interface for the parts of a PDF that line extraction needs.
pub trait PdfBackend {
    /// All pages as (1-based page number → PageId).
    fn pages(&self) -> BTreeMap<u32, PageId>;

    /// Font resources of a page.
    fn page_fonts(&self, page: PageId) -> Result<Vec<BackendFontInfo>>;

    /// Raw (decompressed) content stream bytes of a page.
    fn page_content(&self, page: PageId) -> Result<Vec<u8>>;

    /// Page height from the (possibly inherited) `/MediaBox`.
    fn page_height(&self, page: PageId) -> f32;

    /// Parse raw content stream bytes into a sequence of operations.
    fn decode_content(&self, data: &[u8]) -> Result<Vec<ContentOp>>;

    /// Decode a string operand using the font's encoding on the given page.
    fn decode_text(&self, page: PageId, font_name: &[u8], bytes: &[u8]) -> String;

    /// A text entry of the document information dictionary (`/Title`, ...).
    fn info_string(&self, key: &[u8]) -> Option<String>;
}

/// Decode a PDF string without font information.
///
/// UTF-16BE when it carries a byte-order mark, then UTF-8, then Latin-1.
pub fn decode_text_simple(bytes: &[u8]) -> String {
    if let Some(body) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let utf16: Vec<u16> = body
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        return String::from_utf16_lossy(&utf16);
    }

    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

/// Concrete [`PdfBackend`] backed by `lopdf::Document`.
pub struct LopdfBackend {
    doc: LopdfDocument,
}

impl LopdfBackend {
    /// Load from a file path.
    pub fn load_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let doc = LopdfDocument::load(path)?;
        Self::checked(doc)
    }

    /// Load from an in-memory byte slice.
    pub fn load_bytes(data: &[u8]) -> Result<Self> {
        let doc = LopdfDocument::load_mem(data)?;
        Self::checked(doc)
    }

    fn checked(doc: LopdfDocument) -> Result<Self> {
        if doc.is_encrypted() {
            return Err(Error::Encrypted);
        }
        Ok(Self { doc })
    }

    fn page_dict(&self, page: PageId) -> Result<&lopdf::Dictionary> {
        self.doc
            .get_dictionary(page)
            .map_err(|e| Error::PdfParse(e.to_string()))
    }
}

impl PdfBackend for LopdfBackend {
    fn pages(&self) -> BTreeMap<u32, PageId> {
        self.doc.get_pages()
    }

    fn page_fonts(&self, page: PageId) -> Result<Vec<BackendFontInfo>> {
        let fonts = self
            .doc
            .get_page_fonts(page)
            .map_err(|e| Error::PdfParse(e.to_string()))?;

        Ok(fonts
            .iter()
            .map(|(name, font_dict)| BackendFontInfo {
                name: name.clone(),
                base_font: font_dict
                    .get(b"BaseFont")
                    .ok()
                    .and_then(|o| o.as_name().ok())
                    .map(|n| String::from_utf8_lossy(n).to_string())
                    .unwrap_or_else(|| "Unknown".to_string()),
            })
            .collect())
    }

    fn page_content(&self, page: PageId) -> Result<Vec<u8>> {
        let contents = self
            .page_dict(page)?
            .get(b"Contents")
            .map_err(|e| Error::PdfParse(e.to_string()))?;

        let stream_data = |obj: &Object| -> Option<Vec<u8>> {
            let (_, target) = self.doc.dereference(obj).ok()?;
            match target {
                // Unfiltered streams fail to "decompress"; use them as-is.
                Object::Stream(s) => s
                    .decompressed_content()
                    .ok()
                    .or_else(|| Some(s.content.clone())),
                _ => None,
            }
        };

        match contents {
            Object::Array(parts) => {
                let mut content = Vec::new();
                for part in parts {
                    if let Some(data) = stream_data(part) {
                        content.extend_from_slice(&data);
                        content.push(b' ');
                    }
                }
                Ok(content)
            }
            other => stream_data(other)
                .ok_or_else(|| Error::PdfParse("Invalid content stream".to_string())),
        }
    }

    fn page_height(&self, page: PageId) -> f32 {
        let mut current = self.doc.get_dictionary(page).ok();

        // /MediaBox is inheritable from the page tree
        for _ in 0..MAX_TREE_DEPTH {
            let Some(dict) = current else { break };
            if let Ok(media_box) = dict.get(b"MediaBox").and_then(|o| o.as_array()) {
                if media_box.len() >= 4 {
                    let bottom = media_box[1].as_float().unwrap_or(0.0);
                    let top = media_box[3].as_float().unwrap_or(DEFAULT_PAGE_HEIGHT);
                    return (top - bottom).abs();
                }
            }
            current = dict
                .get(b"Parent")
                .and_then(|p| p.as_reference())
                .and_then(|id| self.doc.get_dictionary(id))
                .ok();
        }

        DEFAULT_PAGE_HEIGHT
    }

    fn decode_content(&self, data: &[u8]) -> Result<Vec<ContentOp>> {
        let content =
            lopdf::content::Content::decode(data).map_err(|e| Error::PdfParse(e.to_string()))?;

        Ok(content
            .operations
            .into_iter()
            .map(|op| ContentOp {
                operator: op.operator,
                operands: op.operands.iter().map(convert_object).collect(),
            })
            .collect())
    }

    fn decode_text(&self, page: PageId, font_name: &[u8], bytes: &[u8]) -> String {
        if let Ok(fonts) = self.doc.get_page_fonts(page) {
            if let Some(font_dict) = fonts.get(font_name) {
                if let Ok(enc) = font_dict.get_font_encoding(&self.doc) {
                    if let Ok(text) = LopdfDocument::decode_text(&enc, bytes) {
                        return text;
                    }
                }
            }
        }
        decode_text_simple(bytes)
    }

    fn info_string(&self, key: &[u8]) -> Option<String> {
        let info = self.doc.trailer.get(b"Info").ok()?;
        let (_, info) = self.doc.dereference(info).ok()?;
        let value = info.as_dict().ok()?.get(key).ok()?;
        let (_, value) = self.doc.dereference(value).ok()?;

        match value {
            Object::String(bytes, _) => Some(decode_text_simple(bytes)),
            Object::Name(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
            _ => None,
        }
    }
}

/// Convert a `lopdf::Object` to [`PdfValue`].
fn convert_object(obj: &Object) -> PdfValue {
    match obj {
        Object::Integer(i) => PdfValue::Integer(*i),
        Object::Real(r) => PdfValue::Real(*r),
        Object::Name(n) => PdfValue::Name(n.clone()),
        Object::String(b, _) => PdfValue::Str(b.clone()),
        Object::Array(arr) => PdfValue::Array(arr.iter().map(convert_object).collect()),
        _ => PdfValue::Other,
    }
}

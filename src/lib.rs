//! # pdfoutline
//!
//! Heuristic title and heading outline extraction from PDF documents.
//!
//! PDFs rarely carry trustworthy structure, so headings are recognized from
//! the text lines themselves: font size, boldness, position on the page,
//! section numbering and well-known section names.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfoutline::{extract_file, render};
//!
//! fn main() -> pdfoutline::Result<()> {
//!     let result = extract_file("document.pdf")?;
//!     println!("{}", render::to_json(&result, render::JsonFormat::Pretty)?);
//!     Ok(())
//! }
//! ```
//!
//! Lines extracted by other means can be fed through a [`LineProvider`]:
//!
//! ```
//! use pdfoutline::{extract_from_provider, TextLine, VecLineProvider};
//!
//! let provider = VecLineProvider::new(vec![vec![
//!     TextLine::new("TABLE OF CONTENTS"),
//!     TextLine::new("1.2 Overview").with_font_size(14.0),
//! ]]);
//! let result = extract_from_provider(&provider)?;
//! assert_eq!(result.outline.len(), 2);
//! assert_eq!(result.title, "TABLE OF CONTENTS 1.2 Overview");
//! # Ok::<(), pdfoutline::Error>(())
//! ```

pub mod batch;
pub mod detect;
pub mod error;
pub mod heading;
pub mod model;
pub mod parser;
pub mod render;

pub use batch::{BatchOptions, BatchReport};
pub use error::{Error, Result};
pub use heading::{extract_outline, heading_level, is_heading};
pub use model::{DocumentResult, FontStats, Heading, HeadingLevel, Page, TextLine};
pub use parser::{LineProvider, ParseOptions, PdfLineProvider, VecLineProvider};
pub use render::JsonFormat;

use std::path::Path;

/// Extract the outline of a PDF file.
///
/// # Example
///
/// ```no_run
/// let result = pdfoutline::extract_file("document.pdf").unwrap();
/// for heading in &result.outline {
///     println!("{} {} (page {})", heading.level, heading.text, heading.page);
/// }
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<DocumentResult> {
    extract_file_with_options(path, ParseOptions::default())
}

/// Extract the outline of a PDF file with custom parse options.
pub fn extract_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<DocumentResult> {
    let provider = PdfLineProvider::open_with_options(path, options)?;
    extract_from_provider(&provider)
}

/// Extract the outline of a PDF held in memory.
pub fn extract_bytes(data: &[u8]) -> Result<DocumentResult> {
    let provider = PdfLineProvider::from_bytes(data)?;
    extract_from_provider(&provider)
}

/// Extract the outline from any line provider.
///
/// The metadata title wins over the synthesized one when it is not blank.
pub fn extract_from_provider<L: LineProvider + ?Sized>(provider: &L) -> Result<DocumentResult> {
    let pages = provider.pages()?;
    let result = extract_outline(&pages);
    let metadata_title = provider.metadata_title();
    Ok(result.with_metadata_title(metadata_title.as_deref()))
}

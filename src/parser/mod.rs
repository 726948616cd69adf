//! PDF line extraction.

mod backend;
mod layout;
mod options;
mod provider;

pub use backend::{
    decode_text_simple, BackendFontInfo, ContentOp, LopdfBackend, PageId, PdfBackend, PdfValue,
    DEFAULT_PAGE_HEIGHT,
};
pub use layout::{extract_page_spans, group_spans_into_lines, replay_text_ops, TextSpan};
pub use options::{ErrorMode, ParseOptions};
pub use provider::{LineProvider, PdfLineProvider, VecLineProvider};

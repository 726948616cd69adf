//! Heading detection and outline assembly.
//!
//! Works on text lines annotated with font size, boldness and position,
//! without relying on tagged structure or bookmarks in the PDF.

mod classify;
mod keywords;
mod level;
mod outline;
mod patterns;

pub use classify::{is_heading, is_prominent_heading};
pub use keywords::{
    contains_celebratory_word, contains_known_heading, starts_with_known_heading,
    CELEBRATORY_WORDS, KNOWN_HEADINGS,
};
pub use level::heading_level;
pub use outline::extract_outline;
pub use patterns::{
    is_mostly_punctuation, is_section_numbered, looks_like_address, looks_like_date,
    looks_like_page_number, normalize_heading_text,
};

//! Data types shared by line providers and the outline builder.

mod line;
mod outline;

pub use line::{FontStats, Page, TextLine, DEFAULT_FONT_SIZE};
pub use outline::{DocumentResult, Heading, HeadingLevel};

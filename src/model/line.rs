//! Text lines as produced by a line provider.

use serde::{Deserialize, Serialize};

/// Font size assumed when a page carries no lines at all.
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// One visually distinct line of text on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    /// Raw line text
    pub text: String,

    /// Largest font size among the runs composing the line (0 when unknown)
    #[serde(default)]
    pub font_size: f32,

    /// Whether any run of the line uses a bold face
    #[serde(default)]
    pub is_bold: bool,

    /// Top edge, measured downwards from the top of the page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y0: Option<f32>,
}

impl TextLine {
    /// Create a plain line with unknown font size, not bold, no position.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: 0.0,
            is_bold: false,
            y0: None,
        }
    }

    /// Set the font size.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Mark the line as bold.
    pub fn bold(mut self) -> Self {
        self.is_bold = true;
        self
    }

    /// Set the top-edge position.
    pub fn at(mut self, y0: f32) -> Self {
        self.y0 = Some(y0);
        self
    }
}

/// Lines of one page, in reading order.
pub type Page = Vec<TextLine>;

/// Font size statistics that heading decisions are measured against.
///
/// Only the first page contributes; later pages are never sampled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontStats {
    /// Mean font size of the sampled lines
    pub avg: f32,
    /// Largest font size of the sampled lines
    pub max: f32,
}

impl FontStats {
    /// Compute statistics from the first page of a document.
    pub fn from_first_page(pages: &[Page]) -> Self {
        pages
            .first()
            .map(|page| Self::from_lines(page))
            .unwrap_or_default()
    }

    /// Compute statistics over a set of lines.
    pub fn from_lines(lines: &[TextLine]) -> Self {
        if lines.is_empty() {
            return Self::default();
        }

        let sum: f32 = lines.iter().map(|l| l.font_size).sum();
        let max = lines
            .iter()
            .map(|l| l.font_size)
            .fold(f32::NEG_INFINITY, f32::max);

        Self {
            avg: sum / lines.len() as f32,
            max,
        }
    }
}

impl Default for FontStats {
    fn default() -> Self {
        Self {
            avg: DEFAULT_FONT_SIZE,
            max: DEFAULT_FONT_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default_when_no_pages() {
        let stats = FontStats::from_first_page(&[]);
        assert_eq!(stats, FontStats { avg: 12.0, max: 12.0 });
    }

    #[test]
    fn test_stats_default_when_first_page_empty() {
        let pages = vec![vec![], vec![TextLine::new("later").with_font_size(30.0)]];
        assert_eq!(FontStats::from_first_page(&pages), FontStats::default());
    }

    #[test]
    fn test_stats_use_first_page_only() {
        let pages = vec![
            vec![
                TextLine::new("a").with_font_size(10.0),
                TextLine::new("b").with_font_size(14.0),
            ],
            vec![TextLine::new("c").with_font_size(40.0)],
        ];
        let stats = FontStats::from_first_page(&pages);
        assert_eq!(stats.avg, 12.0);
        assert_eq!(stats.max, 14.0);
    }

    #[test]
    fn test_line_deserialize_defaults() {
        let line: TextLine = serde_json::from_str(r#"{"text": "Summary"}"#).unwrap();
        assert_eq!(line, TextLine::new("Summary"));
    }
}

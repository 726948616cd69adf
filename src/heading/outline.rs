//! Outline assembly and title synthesis.

use std::collections::HashSet;

use crate::model::{DocumentResult, FontStats, Heading, HeadingLevel, Page};

use super::classify::is_heading;
use super::level::heading_level;
use super::patterns::normalize_heading_text;

/// Number of top-level headings joined into a synthesized title.
const TITLE_HEADINGS: usize = 3;

/// Build the outline of a document from its pages.
///
/// Font statistics come from the first page. Headings are kept in page
/// order, then line order; a heading whose level and lower-cased text were
/// already seen is dropped. The title is the first three H1/H2 headings
/// joined by spaces, else the first heading, else empty.
pub fn extract_outline(pages: &[Page]) -> DocumentResult {
    let stats = FontStats::from_first_page(pages);
    log::debug!(
        "font stats from first page: avg={:.2} max={:.2}",
        stats.avg,
        stats.max
    );

    let mut outline = Vec::new();
    let mut seen: HashSet<(HeadingLevel, String)> = HashSet::new();
    let mut title_parts: Vec<String> = Vec::with_capacity(TITLE_HEADINGS);

    for (page_index, lines) in pages.iter().enumerate() {
        for line in lines {
            if !is_heading(line, &stats) {
                continue;
            }

            let text = normalize_heading_text(&line.text);
            let level = heading_level(&text);
            if !seen.insert((level, text.to_lowercase())) {
                log::debug!("dropping repeated heading {:?} on page {}", text, page_index);
                continue;
            }

            if level.is_title_level() && title_parts.len() < TITLE_HEADINGS {
                title_parts.push(text.clone());
            }
            log::debug!("{} {:?} on page {}", level, text, page_index);
            outline.push(Heading::new(level, text, page_index));
        }
    }

    let title = if !title_parts.is_empty() {
        title_parts.join(" ")
    } else {
        outline
            .first()
            .map(|h| h.text.clone())
            .unwrap_or_default()
    };

    DocumentResult::new(title, outline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextLine;

    #[test]
    fn test_empty_document() {
        let result = extract_outline(&[]);
        assert_eq!(result.title, "");
        assert!(result.outline.is_empty());
    }

    #[test]
    fn test_empty_pages_contribute_nothing() {
        let result = extract_outline(&[vec![], vec![]]);
        assert_eq!(result, DocumentResult::default());
    }

    #[test]
    fn test_repeated_heading_keeps_first_page() {
        let pages = vec![
            vec![TextLine::new("1. Introduction")],
            vec![TextLine::new("1.  introduction ")],
        ];
        let result = extract_outline(&pages);
        assert_eq!(
            result.outline,
            vec![Heading::new(HeadingLevel::H2, "1. Introduction", 0)]
        );
    }

    #[test]
    fn test_same_text_different_level_is_kept() {
        // "SUMMARY" is H1 and "2.1 Summary" is H2
        let pages = vec![vec![
            TextLine::new("SUMMARY"),
            TextLine::new("2.1 Summary"),
        ]];
        let result = extract_outline(&pages);
        assert_eq!(result.outline.len(), 2);
    }

    #[test]
    fn test_title_from_first_three_top_level() {
        let pages = vec![
            vec![
                TextLine::new("1.1.1 Deep Detail"),
                TextLine::new("Summary"),
                TextLine::new("Background"),
            ],
            vec![TextLine::new("2.1 Scope"), TextLine::new("Timeline")],
        ];
        let result = extract_outline(&pages);
        assert_eq!(result.title, "Summary Background 2.1 Scope");
        assert_eq!(result.outline.len(), 5);
    }

    #[test]
    fn test_title_falls_back_to_first_heading() {
        let pages = vec![vec![
            TextLine::new("3.1.1 Method"),
            TextLine::new("3.1.2 Results"),
        ]];
        let result = extract_outline(&pages);
        assert_eq!(result.title, "3.1.1 Method");
    }

    #[test]
    fn test_statistics_come_from_first_page() {
        // avg 10 on page 1, so 12pt "Go now!" on page 2 is prominent
        let pages = vec![
            vec![TextLine::new("body text line").with_font_size(10.0)],
            vec![
                TextLine::new("Go now!").with_font_size(12.0),
                TextLine::new("more body").with_font_size(8.0),
            ],
        ];
        let result = extract_outline(&pages);
        assert_eq!(
            result.outline,
            vec![Heading::new(HeadingLevel::H2, "Go now!", 1)]
        );
    }

    #[test]
    fn test_outline_order_follows_pages_and_lines() {
        let pages = vec![
            vec![TextLine::new("2.1 Second"), TextLine::new("1.1 First")],
            vec![TextLine::new("3.1 Third")],
        ];
        let result = extract_outline(&pages);
        let order: Vec<_> = result
            .outline
            .iter()
            .map(|h| (h.page, h.text.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![(0, "2.1 Second"), (0, "1.1 First"), (1, "3.1 Third")]
        );
    }
}

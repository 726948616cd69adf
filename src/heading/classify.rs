//! Heading classification for single text lines.
//!
//! A line is judged by an ordered chain of rules: noise is rejected first
//! (page numbers, dates, punctuation, addresses), then numbered sections,
//! known section names and emphasized lines are accepted. Anything left
//! over is not a heading. Later rules rely on the earlier rejections, so
//! the order matters.

use crate::model::{FontStats, TextLine};

use super::keywords::{contains_celebratory_word, contains_known_heading, starts_with_known_heading};
use super::patterns::{
    has_section_title, is_mostly_punctuation, is_numeric_only, is_section_numbered, is_title_case,
    is_upper, looks_like_address, looks_like_date, looks_like_page_number, normalize_heading_text,
};

const MIN_HEADING_CHARS: usize = 3;
const MAX_HEADING_CHARS: usize = 120;

/// Lines above this distance from the page top count as emphasized.
const TOP_OF_PAGE: f32 = 150.0;

/// Font size factor over the page average that counts as emphasized.
const LARGER_THAN_AVERAGE: f32 = 1.1;

const PROMINENT_MAX_WORDS: usize = 7;
const PROMINENT_MAX_CHARS: usize = 40;

/// Font size factor of the page maximum required for a flyer heading.
const NEAR_MAX_FONT: f32 = 0.9;

/// Decide whether a line is a heading.
pub fn is_heading(line: &TextLine, stats: &FontStats) -> bool {
    let text = normalize_heading_text(&line.text);
    let len = text.chars().count();

    if !(MIN_HEADING_CHARS..=MAX_HEADING_CHARS).contains(&len) {
        return false;
    }
    if looks_like_page_number(&text)
        || looks_like_date(&text)
        || is_mostly_punctuation(&text)
        || looks_like_address(&text)
    {
        return false;
    }

    if is_section_numbered(&text) {
        return has_section_title(&text);
    }
    if starts_with_known_heading(&text) {
        return true;
    }
    if is_upper(&text) && text.contains('!') {
        return true;
    }
    if is_prominent_heading(line, stats) {
        return true;
    }
    if is_emphasized(line, stats) && contains_known_heading(&text) {
        return true;
    }

    // Single words and bare numbering were never going to pass; the
    // checks stay explicit so the chain reads the same as the rules.
    if text.split_whitespace().count() == 1 {
        return false;
    }
    if is_numeric_only(&text) {
        return false;
    }
    false
}

/// Short flyer-style headings: celebratory and set near the largest font
/// on the page, or punctuated with `!`/`?` and larger than average.
pub fn is_prominent_heading(line: &TextLine, stats: &FontStats) -> bool {
    let text = line.text.trim();

    if text.split_whitespace().count() > PROMINENT_MAX_WORDS
        || text.chars().count() > PROMINENT_MAX_CHARS
    {
        return false;
    }

    if (is_upper(text) || is_title_case(text))
        && line.font_size >= stats.max * NEAR_MAX_FONT
        && contains_celebratory_word(text)
    {
        return true;
    }

    (text.contains('!') || text.contains('?')) && line.font_size >= stats.avg * LARGER_THAN_AVERAGE
}

/// Larger than average, bold, or near the top of the page.
fn is_emphasized(line: &TextLine, stats: &FontStats) -> bool {
    line.font_size > stats.avg * LARGER_THAN_AVERAGE
        || line.is_bold
        || line.y0.is_some_and(|y0| y0 < TOP_OF_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> FontStats {
        FontStats { avg: 12.0, max: 24.0 }
    }

    fn heading(line: TextLine) -> bool {
        is_heading(&line, &stats())
    }

    #[test]
    fn test_section_numbered_heading() {
        assert!(heading(TextLine::new("1.2 Overview").with_font_size(14.0)));
        assert!(heading(TextLine::new("2.1.4 Results").with_font_size(9.0)));
        assert!(heading(TextLine::new("1. Introduction")));
    }

    #[test]
    fn test_multi_level_number_with_trailing_dot_rejected() {
        assert!(!heading(TextLine::new("2.1. Scope")));
        assert!(!heading(TextLine::new("2.1. Scope").with_font_size(24.0).bold().at(40.0)));
    }

    #[test]
    fn test_length_bounds() {
        assert!(!heading(TextLine::new("AB").bold()));
        assert!(!heading(TextLine::new(format!("1.1 {}", "x".repeat(120)))));
        assert!(heading(TextLine::new(format!("1.1 {}", "x".repeat(116)))));
    }

    #[test]
    fn test_page_numbers_rejected() {
        assert!(!heading(TextLine::new("Page 5").with_font_size(30.0).bold()));
        assert!(!heading(TextLine::new("117").bold()));
    }

    #[test]
    fn test_dates_rejected_even_when_emphasized() {
        assert!(!heading(TextLine::new("18 JUNE 2013").with_font_size(30.0).bold()));
        assert!(!heading(TextLine::new("March 21, 2003").bold().at(20.0)));
        assert!(!heading(TextLine::new("2013-2014").bold()));
    }

    #[test]
    fn test_punctuation_rejected() {
        assert!(!heading(TextLine::new("....... 12").bold()));
        assert!(!heading(TextLine::new("* * * !!").with_font_size(30.0)));
    }

    #[test]
    fn test_address_rejected() {
        assert!(!heading(TextLine::new("3735 PARKWAY").with_font_size(30.0)));
        assert!(!heading(TextLine::new("1 INTRODUCTION")));
    }

    #[test]
    fn test_known_heading_accepted_without_emphasis() {
        assert!(heading(TextLine::new("TABLE OF CONTENTS").with_font_size(8.0)));
        assert!(heading(TextLine::new("Revision History")));
        assert!(heading(TextLine::new("Appendix C: Glossary")));
    }

    #[test]
    fn test_upper_with_exclamation() {
        assert!(heading(TextLine::new("HOPE TO SEE YOU THERE!")));
        assert!(!heading(TextLine::new("Hope to see you there!")));
    }

    #[test]
    fn test_prominent_celebratory() {
        assert!(heading(TextLine::new("You Are Welcome").with_font_size(22.0)));
        assert!(!heading(TextLine::new("You Are Welcome").with_font_size(12.0)));
        assert!(!heading(TextLine::new("You are welcome").with_font_size(24.0)));
    }

    #[test]
    fn test_prominent_with_titlecase_letter() {
        assert!(heading(TextLine::new("\u{01C5}emal Party").with_font_size(24.0)));
    }

    #[test]
    fn test_prominent_punctuated() {
        assert!(heading(TextLine::new("Ready to go?").with_font_size(14.0)));
        assert!(!heading(TextLine::new("Ready to go?").with_font_size(13.0)));
        assert!(!heading(
            TextLine::new("Are you ready for the best summer of your life?").with_font_size(30.0)
        ));
    }

    #[test]
    fn test_known_substring_needs_emphasis() {
        let line = TextLine::new("Executive Summary");
        assert!(!heading(line.clone()));
        assert!(heading(line.clone().bold()));
        assert!(heading(line.clone().with_font_size(14.0)));
        assert!(heading(line.clone().at(100.0)));
        assert!(!heading(line.at(300.0)));
    }

    #[test]
    fn test_plain_lines_rejected() {
        assert!(!heading(TextLine::new("Introduction").with_font_size(30.0).bold()));
        assert!(!heading(
            TextLine::new("The quick brown fox jumps over the lazy dog.").with_font_size(30.0)
        ));
    }

    #[test]
    fn test_missing_attributes_are_conservative() {
        // font size 0, not bold, no position
        assert!(!heading(TextLine::new("Project Summary Notes")));
    }
}

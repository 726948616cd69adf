//! Integration tests for heading classification and outline assembly.

use pdfoutline::heading::{is_mostly_punctuation, normalize_heading_text};
use pdfoutline::{
    extract_from_provider, extract_outline, heading_level, is_heading, FontStats, HeadingLevel,
    TextLine, VecLineProvider,
};

fn stats(avg: f32, max: f32) -> FontStats {
    FontStats { avg, max }
}

#[test]
fn test_numbered_section_is_h2() {
    let line = TextLine::new("1.2 Overview").with_font_size(14.0);
    assert!(is_heading(&line, &stats(12.0, 14.0)));
    assert_eq!(heading_level("1.2 Overview"), HeadingLevel::H2);
}

#[test]
fn test_page_label_rejected() {
    let line = TextLine::new("Page 5").with_font_size(30.0).bold();
    assert!(!is_heading(&line, &stats(12.0, 30.0)));
}

#[test]
fn test_date_rejected_even_when_prominent() {
    let line = TextLine::new("18 JUNE 2013")
        .with_font_size(28.0)
        .bold()
        .at(20.0);
    assert!(!is_heading(&line, &stats(12.0, 28.0)));
}

#[test]
fn test_known_heading_in_plain_small_text() {
    let line = TextLine::new("TABLE OF CONTENTS").with_font_size(9.0);
    assert!(is_heading(&line, &stats(12.0, 24.0)));
    assert_eq!(heading_level("TABLE OF CONTENTS"), HeadingLevel::H1);
}

#[test]
fn test_known_heading_beats_numbering() {
    assert_eq!(heading_level("Appendix 1.2.3 Tables"), HeadingLevel::H1);
}

#[test]
fn test_repeated_heading_keeps_first_page() {
    let pages = vec![
        vec![TextLine::new("1. Introduction")],
        vec![TextLine::new("1.  Introduction ")],
    ];
    let result = extract_outline(&pages);

    assert_eq!(result.outline.len(), 1);
    assert_eq!(result.outline[0].text, "1. Introduction");
    assert_eq!(result.outline[0].page, 0);
}

#[test]
fn test_dedup_is_case_insensitive_per_level() {
    let pages = vec![vec![
        TextLine::new("SUMMARY"),
        TextLine::new("Summary"),
        TextLine::new("2.1 Summary of findings"),
    ]];
    let result = extract_outline(&pages);

    let texts: Vec<_> = result.outline.iter().map(|h| h.text.as_str()).collect();
    assert_eq!(texts, vec!["SUMMARY", "2.1 Summary of findings"]);
}

#[test]
fn test_dropped_duplicates_do_not_feed_title() {
    let pages = vec![vec![
        TextLine::new("SUMMARY"),
        TextLine::new("Summary"),
        TextLine::new("BACKGROUND"),
        TextLine::new("TIMELINE"),
        TextLine::new("MILESTONES"),
    ]];
    let result = extract_outline(&pages);

    assert_eq!(result.title, "SUMMARY BACKGROUND TIMELINE");
    assert_eq!(result.outline.len(), 4);
}

#[test]
fn test_repeated_heading_across_pages_not_in_title_twice() {
    let pages = vec![
        vec![TextLine::new("1. Introduction")],
        vec![TextLine::new("1. Introduction"), TextLine::new("2.1 Scope")],
    ];
    let result = extract_outline(&pages);
    assert_eq!(result.title, "1. Introduction 2.1 Scope");
}

#[test]
fn test_trailing_dot_after_subsection_is_not_a_heading() {
    let pages = vec![vec![
        TextLine::new("2.1. Scope").with_font_size(18.0).bold(),
        TextLine::new("2.1 Scope"),
    ]];
    let result = extract_outline(&pages);

    let texts: Vec<_> = result.outline.iter().map(|h| h.text.as_str()).collect();
    assert_eq!(texts, vec!["2.1 Scope"]);
}

#[test]
fn test_empty_document() {
    let result = extract_outline(&[]);
    assert_eq!(result.title, "");
    assert!(result.outline.is_empty());
    assert_eq!(
        serde_json::to_string(&result).unwrap(),
        r#"{"title":"","outline":[]}"#
    );
}

#[test]
fn test_outline_in_document_order() {
    let pages = vec![
        vec![TextLine::new("REVISION HISTORY"), TextLine::new("1.1 Purpose")],
        vec![],
        vec![TextLine::new("1.1.1 Audience"), TextLine::new("REFERENCES")],
    ];
    let result = extract_outline(&pages);

    let outline: Vec<_> = result
        .outline
        .iter()
        .map(|h| (h.level.to_string(), h.page))
        .collect();
    assert_eq!(
        outline,
        vec![
            ("H1".to_string(), 0),
            ("H2".to_string(), 0),
            ("H3".to_string(), 2),
            ("H1".to_string(), 2),
        ]
    );
}

#[test]
fn test_title_skips_deeper_levels() {
    let pages = vec![vec![
        TextLine::new("1.1.1 Audience"),
        TextLine::new("BACKGROUND"),
        TextLine::new("2.3.4.5 Deep section"),
        TextLine::new("MILESTONES"),
        TextLine::new("2.1 Phases"),
        TextLine::new("TIMELINE"),
    ]];
    let result = extract_outline(&pages);
    assert_eq!(result.title, "BACKGROUND MILESTONES 2.1 Phases");
    assert_eq!(result.outline.len(), 6);
}

#[test]
fn test_title_falls_back_to_first_heading() {
    let pages = vec![vec![
        TextLine::new("plain paragraph text that is not a heading at all"),
        TextLine::new("3.1.4 Pi section"),
        TextLine::new("4.1.1.1 Deeper"),
    ]];
    let result = extract_outline(&pages);
    assert_eq!(result.title, "3.1.4 Pi section");
    assert_eq!(result.outline[1].level, HeadingLevel::new(4));
}

#[test]
fn test_font_stats_come_from_first_page() {
    // "Any questions?" is prominent only when 1.1x the first page's average.
    let quiet_first_page = vec![
        vec![TextLine::new("body").with_font_size(10.0)],
        vec![TextLine::new("Any questions?").with_font_size(12.0)],
    ];
    assert_eq!(extract_outline(&quiet_first_page).outline.len(), 1);

    let loud_first_page = vec![
        vec![TextLine::new("body").with_font_size(20.0)],
        vec![TextLine::new("Any questions?").with_font_size(12.0)],
    ];
    assert!(extract_outline(&loud_first_page).outline.is_empty());
}

#[test]
fn test_flyer_headings() {
    let pages = vec![vec![
        TextLine::new("WELCOME").with_font_size(36.0).bold(),
        TextLine::new("Hope To See You").with_font_size(34.0),
        TextLine::new("Party").with_font_size(12.0),
    ]];
    let result = extract_outline(&pages);

    let texts: Vec<_> = result.outline.iter().map(|h| h.text.as_str()).collect();
    assert_eq!(texts, vec!["WELCOME", "Hope To See You"]);
    assert_eq!(result.title, "WELCOME Hope To See You");
}

#[test]
fn test_address_and_punctuation_rejected() {
    let line = TextLine::new("3735 PARKWAY").with_font_size(30.0).bold();
    assert!(!is_heading(&line, &stats(12.0, 30.0)));

    let rule = TextLine::new("*** --- ***").with_font_size(30.0);
    assert!(!is_heading(&rule, &stats(12.0, 30.0)));
    assert!(is_mostly_punctuation(""));
}

#[test]
fn test_whitespace_is_normalized_in_output() {
    let pages = vec![vec![TextLine::new("  APPENDIX \t A:   Terms  ")]];
    let result = extract_outline(&pages);
    assert_eq!(result.outline[0].text, "APPENDIX A: Terms");
    assert_eq!(
        normalize_heading_text(&result.outline[0].text),
        result.outline[0].text
    );
}

#[test]
fn test_provider_title_precedence() {
    let pages = vec![vec![TextLine::new("SUMMARY")]];

    let with_title = VecLineProvider::new(pages.clone()).with_title("Quarterly Update");
    assert_eq!(
        extract_from_provider(&with_title).unwrap().title,
        "Quarterly Update"
    );

    let without_title = VecLineProvider::new(pages);
    assert_eq!(extract_from_provider(&without_title).unwrap().title, "SUMMARY");
}

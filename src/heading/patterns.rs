//! Text predicates used to reject or accept heading candidates.

use once_cell::sync::Lazy;
use regex::Regex;

/// Share of punctuation above which a line is considered noise.
const PUNCTUATION_RATIO: f32 = 0.6;

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static heading pattern must compile")
}

static PAGE_LABEL: Lazy<Regex> = Lazy::new(|| regex(r"(?i)^page\s*\d+$"));
static BARE_PAGE_NUMBER: Lazy<Regex> = Lazy::new(|| regex(r"^\d{1,3}$"));

static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // Leader dots and rules: "......", "-/-"
        r"^[.\-/\\]+$",
        // 18.06.2013, 6/11/13
        r"^\d{1,2}[./-]\d{1,2}[./-]\d{2,4}$",
        // 06/2013
        r"^\d{1,2}[./-]\d{2,4}$",
        // 2013, 2013-2014
        r"^\d{4}(-\d{4})?$",
        // 18 JUNE 2013
        r"(?i)^\d{1,2}\s+(JAN|FEB|MAR|APR|MAY|JUN|JUL|AUG|SEP|OCT|NOV|DEC)[A-Z]*\s+\d{2,4}$",
        // June 18, 2013
        r"(?i)^(JAN|FEB|MAR|APR|MAY|JUN|JUL|AUG|SEP|OCT|NOV|DEC)[A-Z]*\s+\d{1,2},?\s+\d{2,4}$",
    ]
    .into_iter()
    .map(regex)
    .collect()
});

static ADDRESS: Lazy<Regex> = Lazy::new(|| regex(r"^\d+\s+[A-Z][A-Z\s]+$"));

// A trailing dot is only allowed after a single number: "3. Method", not "2.1. Scope".
static SECTION_NUMBER: Lazy<Regex> = Lazy::new(|| regex(r"^\d+(?:(\.\d+)+|\.)?\s+.+"));
static SECTION_NUMBER_WITH_WORD: Lazy<Regex> =
    Lazy::new(|| regex(r"^\d+(?:(\.\d+)+|\.)?\s+\S+"));

/// Dotted numbering with at least one dot, e.g. "2.1 " or "3.4.1 ".
pub(crate) static DOTTED_SECTION_NUMBER: Lazy<Regex> =
    Lazy::new(|| regex(r"^(\d+)((\.\d+)+)\s+"));

static NUMERIC_ONLY: Lazy<Regex> = Lazy::new(|| regex(r"^[\d.\-/\\]+$"));

static TITLECASE_LETTER: Lazy<Regex> = Lazy::new(|| regex(r"^\p{Lt}$"));

/// Collapse whitespace runs to single spaces and trim both ends.
pub fn normalize_heading_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// "Page 5", "page12" or a bare number of up to three digits.
pub fn looks_like_page_number(text: &str) -> bool {
    PAGE_LABEL.is_match(text) || BARE_PAGE_NUMBER.is_match(text.trim())
}

/// Dates, years, year ranges and runs of date separators.
pub fn looks_like_date(text: &str) -> bool {
    let text = text.trim();
    DATE_PATTERNS.iter().any(|re| re.is_match(text))
}

/// More than 60% of the characters are neither alphanumeric nor whitespace.
///
/// Blank text counts as punctuation.
pub fn is_mostly_punctuation(text: &str) -> bool {
    let text = text.trim();
    let total = text.chars().count();
    if total == 0 {
        return true;
    }

    let punct = text
        .chars()
        .filter(|c| !c.is_alphanumeric() && !c.is_whitespace())
        .count();
    punct as f32 / total as f32 > PUNCTUATION_RATIO
}

/// A street number followed by upper-case words, e.g. "3735 PARKWAY".
pub fn looks_like_address(text: &str) -> bool {
    ADDRESS.is_match(text.trim())
}

/// Numbered section text such as "2 Scope", "3. Method" or "2.1.4 Results".
pub fn is_section_numbered(text: &str) -> bool {
    SECTION_NUMBER.is_match(text)
}

/// Section numbering followed by at least one word.
pub fn has_section_title(text: &str) -> bool {
    SECTION_NUMBER_WITH_WORD.is_match(text)
}

/// Only digits and date or range separators.
pub fn is_numeric_only(text: &str) -> bool {
    NUMERIC_ONLY.is_match(text)
}

/// At least one cased character and no lower-case ones.
///
/// Title-case letters such as 'ǅ' are cased but not upper-case.
pub fn is_upper(text: &str) -> bool {
    text.chars().any(char::is_uppercase)
        && !text
            .chars()
            .any(|c| c.is_lowercase() || is_titlecase_letter(c))
}

/// Every word starts upper-case and continues lower-case ("Join Us Today").
///
/// Any non-letter starts a new word, so "You'Re" is title case and
/// "You're" is not. Title-case letters ('ǅ') start words like capitals.
pub fn is_title_case(text: &str) -> bool {
    let mut cased = false;
    let mut previous_cased = false;

    for c in text.chars() {
        if c.is_uppercase() || is_titlecase_letter(c) {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            cased = true;
        } else if c.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            cased = true;
        } else {
            previous_cased = false;
        }
    }

    cased
}

fn is_titlecase_letter(c: char) -> bool {
    !c.is_ascii() && TITLECASE_LETTER.is_match(c.encode_utf8(&mut [0; 4]))
}

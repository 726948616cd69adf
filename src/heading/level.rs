//! Heading level assignment.

use crate::model::HeadingLevel;

use super::keywords::starts_with_known_heading;
use super::patterns::DOTTED_SECTION_NUMBER;

/// Assign a level to text already accepted as a heading.
///
/// Known section names are always H1. Dotted numbering maps the number of
/// dots in the text to the level ("2.1 " is H2, "2.1.3 " is H3, and so on).
/// Everything else, including undotted numbering like "3 Scope", is H2.
pub fn heading_level(text: &str) -> HeadingLevel {
    if starts_with_known_heading(text) {
        return HeadingLevel::H1;
    }

    if DOTTED_SECTION_NUMBER.is_match(text) {
        // Counts every dot in the text, title included.
        let depth = text.matches('.').count();
        return HeadingLevel::new(depth_to_level(depth));
    }

    HeadingLevel::H2
}

fn depth_to_level(depth: usize) -> u8 {
    // depth 0 cannot reach here through the dotted pattern
    u8::try_from(depth + 1).unwrap_or(u8::MAX)
}

//! Fixed lookup tables used by the heading classifier.

/// Section names that are always headings and always top level.
///
/// Matched as a case-insensitive prefix of the normalized line text
/// (and as a substring by the emphasis rule).
pub const KNOWN_HEADINGS: &[&str] = &[
    "TABLE OF CONTENTS",
    "ACKNOWLEDGEMENTS",
    "REVISION HISTORY",
    "REFERENCES",
    "PATHWAY OPTIONS",
    "SUMMARY",
    "BACKGROUND",
    "MILESTONES",
    "APPENDIX",
    "APPENDIX A",
    "APPENDIX B",
    "APPENDIX C",
    "EVALUATION AND AWARDING OF CONTRACT",
    "APPROACH AND SPECIFIC PROPOSAL REQUIREMENTS",
    "THE BUSINESS PLAN TO BE DEVELOPED",
    "TIMELINE",
    "PREAMBLE",
    "MEMBERSHIP",
    "CHAIR",
    "MEETINGS",
    "LINES OF ACCOUNTABILITY AND COMMUNICATION",
    "FINANCIAL AND ADMINISTRATIVE POLICIES",
    "ONTARIO\u{2019}S DIGITAL LIBRARY",
    "A CRITICAL COMPONENT FOR IMPLEMENTING ONTARIO\u{2019}S ROAD MAP TO PROSPERITY STRATEGY",
];

/// Words that mark short flyer or invitation headings.
pub const CELEBRATORY_WORDS: &[&str] = &[
    "WELCOME",
    "INVITATION",
    "JOIN US",
    "RSVP",
    "PARTY",
    "CONGRATULATIONS",
    "SEE YOU",
    "CELEBRATE",
    "THANK YOU",
    "YOU'RE INVITED",
    "HOPE TO SEE YOU",
];

/// Whether the text starts with a known section name (case-insensitive).
pub fn starts_with_known_heading(text: &str) -> bool {
    let upper = text.to_uppercase();
    KNOWN_HEADINGS.iter().any(|kw| upper.starts_with(kw))
}

/// Whether a known section name occurs anywhere in the text (case-insensitive).
pub fn contains_known_heading(text: &str) -> bool {
    let upper = text.to_uppercase();
    KNOWN_HEADINGS.iter().any(|kw| upper.contains(kw))
}

/// Whether a celebratory word occurs anywhere in the text (case-insensitive).
pub fn contains_celebratory_word(text: &str) -> bool {
    let upper = text.to_uppercase();
    CELEBRATORY_WORDS.iter().any(|kw| upper.contains(kw))
}

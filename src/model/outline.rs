//! Outline and document-result types.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Heading level, rendered as `H1`, `H2`, ... without an upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    /// Top-level heading.
    pub const H1: HeadingLevel = HeadingLevel(1);
    /// Second-level heading, also the default for unnumbered headings.
    pub const H2: HeadingLevel = HeadingLevel(2);

    /// Create a level from its depth (1 = H1). Zero is clamped to H1.
    pub fn new(depth: u8) -> Self {
        Self(depth.max(1))
    }

    /// Whether the level may contribute to a synthesized title.
    pub fn is_title_level(self) -> bool {
        self.0 <= 2
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H{}", self.0)
    }
}

impl FromStr for HeadingLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.strip_prefix(['H', 'h'])
            .and_then(|n| n.parse::<u8>().ok())
            .filter(|n| *n > 0)
            .map(HeadingLevel)
            .ok_or_else(|| format!("invalid heading level: {s:?}"))
    }
}

impl Serialize for HeadingLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HeadingLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A line accepted as a heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level
    pub level: HeadingLevel,
    /// Whitespace-normalized heading text
    pub text: String,
    /// 0-based page index
    pub page: usize,
}

impl Heading {
    /// Create a heading entry.
    pub fn new(level: HeadingLevel, text: impl Into<String>, page: usize) -> Self {
        Self {
            level,
            text: text.into(),
            page,
        }
    }
}

/// Title and outline extracted from one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentResult {
    /// Document title
    pub title: String,
    /// Headings in document order
    pub outline: Vec<Heading>,
}

impl DocumentResult {
    /// Create a result from a title and an outline.
    pub fn new(title: impl Into<String>, outline: Vec<Heading>) -> Self {
        Self {
            title: title.into(),
            outline,
        }
    }

    /// Prefer the metadata title over the synthesized one when it is not blank.
    pub fn with_metadata_title(mut self, metadata_title: Option<&str>) -> Self {
        if let Some(title) = metadata_title.map(str::trim).filter(|t| !t.is_empty()) {
            self.title = title.to_string();
        }
        self
    }
}

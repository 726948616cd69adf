//! Text line extraction from page content streams.
//!
//! Content stream text operators are replayed into positioned spans, and
//! spans sharing a baseline are merged into [`TextLine`]s in top-to-bottom
//! order.

use std::collections::HashMap;

use unicode_normalization::UnicodeNormalization;

use crate::error::Result;
use crate::model::TextLine;

use super::backend::{ContentOp, PageId, PdfBackend, PdfValue};

/// Fallback font size before any `Tf` operator.
const DEFAULT_FONT_SIZE: f32 = 12.0;

/// `TJ` adjustments beyond this (thousandths of an em) are word breaks.
const TJ_SPACE_THRESHOLD: f32 = 200.0;

/// A run of text with position and style information.
#[derive(Debug, Clone)]
pub struct TextSpan {
    /// The text content
    pub text: String,
    /// X position (left edge)
    pub x: f32,
    /// Y position (baseline, PDF coordinates: bottom-up)
    pub y: f32,
    /// Effective font size in points
    pub font_size: f32,
    /// Base font name (e.g., "Helvetica-Bold")
    pub font_name: String,
    /// Whether the font appears to be bold
    pub is_bold: bool,
}

impl TextSpan {
    /// Create a span; boldness is inferred from the font name.
    pub fn new(text: String, x: f32, y: f32, font_size: f32, font_name: String) -> Self {
        let lower = font_name.to_lowercase();
        let is_bold = lower.contains("bold") || lower.contains("black") || lower.contains("heavy");

        Self {
            text,
            x,
            y,
            font_size,
            font_name,
            is_bold,
        }
    }

    /// Approximate top edge (baseline plus ascender).
    pub fn top(&self) -> f32 {
        self.y + self.font_size * 0.8
    }

    /// Approximate advance width; glyph widths are not read from the font.
    fn estimated_width(&self) -> f32 {
        self.text.chars().count() as f32 * self.font_size * 0.5
    }
}

/// Extract positioned text spans from one page.
pub fn extract_page_spans(backend: &dyn PdfBackend, page: PageId) -> Result<Vec<TextSpan>> {
    let fonts: HashMap<Vec<u8>, String> = backend
        .page_fonts(page)?
        .into_iter()
        .map(|f| (f.name, f.base_font))
        .collect();

    let content = backend.page_content(page)?;
    let ops = backend.decode_content(&content)?;
    Ok(replay_text_ops(&ops, &fonts, |font, bytes| {
        backend.decode_text(page, font, bytes)
    }))
}

/// Replay text operators into spans.
///
/// `decode` turns a string operand into text for the current font resource.
pub fn replay_text_ops<F>(
    ops: &[ContentOp],
    fonts: &HashMap<Vec<u8>, String>,
    decode: F,
) -> Vec<TextSpan>
where
    F: Fn(&[u8], &[u8]) -> String,
{
    let mut spans = Vec::new();
    let mut font_resource: Vec<u8> = Vec::new();
    let mut font_name = String::new();
    let mut font_size = DEFAULT_FONT_SIZE;
    let mut matrix = TextMatrix::default();
    let mut in_text_block = false;

    let mut emit = |text: String, matrix: &TextMatrix, font_size: f32, font_name: &str| {
        let text: String = text.nfc().collect();
        if !text.trim().is_empty() {
            let (x, y) = matrix.position();
            spans.push(TextSpan::new(
                text,
                x,
                y,
                font_size * matrix.scale(),
                font_name.to_string(),
            ));
        }
    };

    for op in ops {
        match op.operator.as_str() {
            "BT" => {
                in_text_block = true;
                matrix = TextMatrix::default();
            }
            "ET" => in_text_block = false,
            "Tf" => {
                if let Some(PdfValue::Name(name)) = op.operands.first() {
                    font_name = fonts
                        .get(name)
                        .cloned()
                        .unwrap_or_else(|| String::from_utf8_lossy(name).to_string());
                    font_resource = name.clone();
                }
                font_size = op.number(1, DEFAULT_FONT_SIZE);
            }
            "TL" => matrix.leading = op.number(0, 0.0),
            "Td" => matrix.translate(op.number(0, 0.0), op.number(1, 0.0)),
            "TD" => {
                let ty = op.number(1, 0.0);
                matrix.leading = -ty;
                matrix.translate(op.number(0, 0.0), ty);
            }
            "Tm" => matrix.set([
                op.number(0, 1.0),
                op.number(1, 0.0),
                op.number(2, 0.0),
                op.number(3, 1.0),
                op.number(4, 0.0),
                op.number(5, 0.0),
            ]),
            "T*" => matrix.next_line(),
            "Tj" if in_text_block => {
                if let Some(PdfValue::Str(bytes)) = op.operands.first() {
                    emit(decode(&font_resource, bytes), &matrix, font_size, &font_name);
                }
            }
            "TJ" if in_text_block => {
                if let Some(PdfValue::Array(items)) = op.operands.first() {
                    let text = join_tj_array(items, |bytes| decode(&font_resource, bytes));
                    emit(text, &matrix, font_size, &font_name);
                }
            }
            "'" | "\"" => {
                matrix.next_line();
                let text_idx = if op.operator == "\"" { 2 } else { 0 };
                if in_text_block {
                    if let Some(PdfValue::Str(bytes)) = op.operands.get(text_idx) {
                        emit(decode(&font_resource, bytes), &matrix, font_size, &font_name);
                    }
                }
            }
            _ => {}
        }
    }

    spans
}

/// Concatenate a `TJ` array, turning large negative kerning into spaces.
fn join_tj_array<F>(items: &[PdfValue], decode: F) -> String
where
    F: Fn(&[u8]) -> String,
{
    let mut combined = String::new();

    for item in items {
        match item {
            PdfValue::Str(bytes) => combined.push_str(&decode(bytes)),
            PdfValue::Integer(_) | PdfValue::Real(_) => {
                let adjustment = -item.as_number().unwrap_or(0.0);
                let ends_open = combined
                    .chars()
                    .last()
                    .is_some_and(|c| !c.is_whitespace() && !is_spaceless_script_char(c));
                if adjustment > TJ_SPACE_THRESHOLD && ends_open {
                    combined.push(' ');
                }
            }
            _ => {}
        }
    }

    combined
}

/// Group spans into lines, top of page first.
///
/// Spans whose baselines are within 30% of the font size share a line.
/// `page_height` converts PDF coordinates into a distance from the top.
pub fn group_spans_into_lines(mut spans: Vec<TextSpan>, page_height: f32) -> Vec<TextLine> {
    spans.sort_by(|a, b| {
        b.y.partial_cmp(&a.y)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal))
    });

    let mut lines = Vec::new();
    let mut current: Vec<TextSpan> = Vec::new();
    let mut current_y: Option<f32> = None;

    for span in spans {
        let tolerance = span.font_size * 0.3;
        match current_y {
            Some(y) if (span.y - y).abs() <= tolerance => current.push(span),
            _ => {
                if !current.is_empty() {
                    lines.extend(build_line(std::mem::take(&mut current), page_height));
                }
                current_y = Some(span.y);
                current.push(span);
            }
        }
    }
    if !current.is_empty() {
        lines.extend(build_line(current, page_height));
    }

    lines
}

/// Merge the spans of one line. Returns `None` for whitespace-only lines.
fn build_line(mut spans: Vec<TextSpan>, page_height: f32) -> Option<TextLine> {
    spans.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal));

    let text = join_spans(&spans);
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let font_size = spans.iter().map(|s| s.font_size).fold(0.0, f32::max);
    let top = spans.iter().map(TextSpan::top).fold(f32::NEG_INFINITY, f32::max);

    Some(TextLine {
        text: text.to_string(),
        font_size,
        is_bold: spans.iter().any(|s| s.is_bold),
        y0: Some((page_height - top).max(0.0)),
    })
}

/// Join span texts, inserting a space where there is a visible gap.
///
/// No space is inserted between two characters of scripts written
/// without word spacing.
fn join_spans(spans: &[TextSpan]) -> String {
    let mut result = String::new();

    for (i, span) in spans.iter().enumerate() {
        if i > 0 {
            let prev = &spans[i - 1];
            let gap = span.x - (prev.x + prev.estimated_width());
            let threshold = span.font_size * 0.1;

            let prev_last = prev.text.chars().last();
            let curr_first = span.text.chars().next();
            let touching_space = prev_last.is_some_and(char::is_whitespace)
                || curr_first.is_some_and(char::is_whitespace);
            let both_spaceless = prev_last.is_some_and(is_spaceless_script_char)
                && curr_first.is_some_and(is_spaceless_script_char);

            if gap > threshold && !touching_space && !both_spaceless {
                result.push(' ');
            }
        }
        result.push_str(&span.text);
    }

    result
}

/// Text matrix state for position tracking.
#[derive(Debug, Clone, Copy)]
struct TextMatrix {
    m: [f32; 6],
    /// Line start, reset by `Td`/`TD`/`T*`
    line: [f32; 6],
    leading: f32,
}

impl Default for TextMatrix {
    fn default() -> Self {
        let identity = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0];
        Self {
            m: identity,
            line: identity,
            leading: 0.0,
        }
    }
}

impl TextMatrix {
    fn set(&mut self, m: [f32; 6]) {
        self.m = m;
        self.line = m;
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        let [a, b, c, d, e, f] = self.line;
        self.line = [a, b, c, d, e + tx * a + ty * c, f + tx * b + ty * d];
        self.m = self.line;
    }

    fn next_line(&mut self) {
        let leading = if self.leading != 0.0 {
            self.leading
        } else {
            DEFAULT_FONT_SIZE
        };
        self.translate(0.0, -leading);
    }

    fn position(&self) -> (f32, f32) {
        (self.m[4], self.m[5])
    }

    /// Vertical scale factor applied to the font size.
    fn scale(&self) -> f32 {
        let [_, b, _, d, _, _] = self.m;
        (b * b + d * d).sqrt()
    }
}

/// Characters of scripts that do not separate words with spaces.
///
/// Hangul is excluded: Korean uses word spaces.
fn is_spaceless_script_char(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}'     // CJK Unified Ideographs
        | '\u{3400}'..='\u{4DBF}'   // Extension A
        | '\u{20000}'..='\u{2CEAF}' // Extensions B-F
        | '\u{3040}'..='\u{309F}'   // Hiragana
        | '\u{30A0}'..='\u{30FF}'   // Katakana
        | '\u{3000}'..='\u{303F}'   // CJK Symbols and Punctuation
    )
}

//! Fixture PDFs built with lopdf.

#![allow(dead_code)]

use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// Page height of generated fixtures (A4).
pub const PAGE_HEIGHT: i64 = 842;

/// One line of fixture text.
#[derive(Debug, Clone, Copy)]
pub struct Line {
    pub text: &'static str,
    pub size: i64,
    pub bold: bool,
    pub y: i64,
}

pub const fn regular(text: &'static str, size: i64, y: i64) -> Line {
    Line {
        text,
        size,
        bold: false,
        y,
    }
}

pub const fn bold(text: &'static str, size: i64, y: i64) -> Line {
    Line {
        text,
        size,
        bold: true,
        y,
    }
}

/// Build a PDF with one page per entry of `pages`.
///
/// Regular lines use Helvetica (`/F1`), bold lines Helvetica-Bold (`/F2`).
pub fn build_pdf(pages: &[Vec<Line>], title: Option<&str>) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");

    let pages_id = doc.new_object_id();
    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });

    let mut page_ids = Vec::new();
    for lines in pages {
        let mut operations = Vec::new();
        for line in lines {
            let font = if line.bold { "F2" } else { "F1" };
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec![font.into(), line.size.into()]));
            operations.push(Operation::new("Td", vec![72.into(), line.y.into()]));
            operations.push(Operation::new("Tj", vec![Object::string_literal(line.text)]));
            operations.push(Operation::new("ET", vec![]));
        }

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => dictionary! {
                "Font" => dictionary! {
                    "F1" => regular_id,
                    "F2" => bold_id,
                },
            },
        });
        page_ids.push(page_id);
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids.iter().map(|id| (*id).into()).collect::<Vec<Object>>(),
            "Count" => page_ids.len() as i64,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(595),
                Object::Integer(PAGE_HEIGHT),
            ],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    if let Some(title) = title {
        let info_id = doc.add_object(dictionary! {
            "Title" => Object::string_literal(title),
        });
        doc.trailer.set("Info", info_id);
    }

    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("save fixture");
    bytes
}

/// Build a PDF and write it to `path`.
pub fn write_pdf(path: &Path, pages: &[Vec<Line>], title: Option<&str>) {
    std::fs::write(path, build_pdf(pages, title)).expect("write fixture");
}

/// A two-page report with numbered sections and a repeated heading.
pub fn report_pages() -> Vec<Vec<Line>> {
    vec![
        vec![
            bold("TABLE OF CONTENTS", 20, 780),
            regular("1. Introduction", 12, 740),
            regular("The board meets four times a year to review progress.", 12, 700),
            regular("3", 10, 60),
        ],
        vec![
            bold("2.1 Scope of Work", 14, 780),
            regular("2.1.3 Deliverables", 12, 750),
            bold("SUMMARY", 16, 720),
            regular("Page 2", 10, 60),
            bold("TABLE OF CONTENTS", 20, 650),
        ],
    ]
}

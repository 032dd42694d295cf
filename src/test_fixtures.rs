// src/test_fixtures.rs
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// A run of text drawn at an absolute position (PDF user space, origin bottom-left).
pub type PlacedText<'a> = (i64, i64, &'a str);

/// Builds a letter-size PDF with one page per entry; each `PlacedText` becomes its own
/// text object in 10pt Courier. An empty page has no content at all.
pub fn build_pdf(pages: &[Vec<PlacedText<'_>>]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });

    let mut kids: Vec<Object> = Vec::new();
    for placed in pages {
        let mut operations = Vec::new();
        for (x, y, text) in placed {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), 10.into()]));
            operations.push(Operation::new("Td", vec![(*x).into(), (*y).into()]));
            operations.push(Operation::new("Tj", vec![Object::string_literal(*text)]));
            operations.push(Operation::new("ET", vec![]));
        }
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => font_id },
            },
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

/// Places a three-cell table row on one baseline, the way the statements lay them out.
/// Consecutive rows should sit 12pt apart: a bigger drop reads as a blank line.
pub fn table_row<'a>(y: i64, sc: &'a str, nyc: &'a str, westchester: &'a str) -> Vec<PlacedText<'a>> {
    vec![(72, y, sc), (300, y, nyc), (420, y, westchester)]
}

/// One-page statement with a dated header, one table-1 row and one table-2 row,
/// each followed by the anchor that closes its region.
pub fn statement_pdf(date: &str, table1_cells: [&str; 3], table2_cells: [&str; 3]) -> Vec<u8> {
    let date_line = format!("Initial Effective Date: {}", date);
    let mut page: Vec<PlacedText<'_>> = vec![(72, 740, date_line.as_str())];
    page.extend(table_row(690, table1_cells[0], table1_cells[1], table1_cells[2]));
    page.push((72, 640, "Charges assessed in dollars per kilowatt:"));
    page.extend(table_row(590, table2_cells[0], table2_cells[1], table2_cells[2]));
    page.push((72, 540, "Charges assessed to Rider M customers based on ICAP tag per kilowatt:"));
    build_pdf(&[page])
}

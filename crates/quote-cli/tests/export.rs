//! CSV export format tests.

use quote_cli::export::quote_to_csv;
use quote_model::{ItemIdGen, LineItem, QuoteDocument};

fn priced_document() -> QuoteDocument {
    let mut ids = ItemIdGen::new();
    let mut document = QuoteDocument::new(LineItem::blank(ids.next_id()));

    document.items[0].width = Some(1000);
    document.items[0].height = Some(1000);
    document.items[0].fabric_type = Some("BO".to_string());
    document.items[0].line_price = Some(10.0);

    let mut second = LineItem::blank(ids.next_id());
    second.width = Some(2000);
    second.height = Some(1500);
    second.fabric_type = Some("SN".to_string());
    second.line_price = Some(40.5);
    document.items.push(second);
    // Trailing blank row, as the store maintains it.
    document.items.push(LineItem::blank(ids.next_id()));

    document.summary.total_sum = Some(50.5);
    document
}

#[test]
fn rows_then_blank_line_then_total() {
    let csv = quote_to_csv(&priced_document()).expect("render");
    assert_eq!(
        csv,
        "#,Width,Height,Type,Price\n\
         1,1000,1000,BO,10.00\n\
         2,2000,1500,SN,40.50\n\
         \n\
         Total,,,,50.50\n"
    );
}

#[test]
fn blank_rows_are_skipped_but_numbering_follows_the_grid() {
    let mut document = priced_document();
    // Blank out the first row; the second keeps its grid position.
    let id = document.items[0].id;
    document.items[0] = LineItem::blank(id);

    let csv = quote_to_csv(&document).expect("render");
    assert!(csv.contains("2,2000,1500,SN,40.50\n"));
    assert!(!csv.contains("\n1,"));
}

#[test]
fn unpriced_cells_and_missing_total_render_empty_and_zero() {
    let mut document = priced_document();
    document.items[0].line_price = None;
    document.items[0].fabric_type = None;
    document.summary.total_sum = None;

    let csv = quote_to_csv(&document).expect("render");
    assert!(csv.contains("1,1000,1000,,\n"));
    assert!(csv.ends_with("Total,,,,0.00\n"));
}

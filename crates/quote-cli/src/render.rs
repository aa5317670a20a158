//! Terminal rendering of a priced quote.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use quote_model::QuoteDocument;

pub fn quote_table(document: &QuoteDocument) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        header_cell("#"),
        header_cell("Width"),
        header_cell("Height"),
        header_cell("Type"),
        header_cell("Price"),
    ]);
    for index in [0, 1, 2, 4] {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (index, item) in document.items.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            dimension_cell(item.width),
            dimension_cell(item.height),
            Cell::new(item.fabric_type.as_deref().unwrap_or("-")),
            price_cell(item.line_price),
        ]);
    }

    let total = document.summary.total_sum;
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        price_cell(total).add_attribute(Attribute::Bold),
    ]);
    table
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn dimension_cell(value: Option<u32>) -> Cell {
    match value {
        Some(v) => Cell::new(v),
        None => Cell::new("-"),
    }
}

fn price_cell(value: Option<f64>) -> Cell {
    match value {
        Some(v) => Cell::new(format!("{v:.2}")),
        None => Cell::new("-"),
    }
}

/// One line per accessory aggregate with a non-zero count.
pub fn accessory_lines(document: &QuoteDocument) -> Vec<String> {
    let accessories = &document.summary.accessories;
    [
        ("Dual brackets", accessories.dual),
        ("Winders (HD)", accessories.winder),
        ("Motors", accessories.motor),
        ("Remotes", accessories.remote),
        ("Chargers", accessories.charger),
        ("Cords (3m)", accessories.cord3m),
    ]
    .into_iter()
    .filter(|(_, line)| line.count > 0)
    .map(|(label, line)| format!("{label}: {} @ {:.2}", line.count, line.price))
    .collect()
}

/// Row count shown under the table; the trailing blank row is not a quoted
/// item.
pub fn quoted_row_count(document: &QuoteDocument) -> usize {
    document.items.iter().filter(|item| !item.is_empty()).count()
}

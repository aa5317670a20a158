//! CSV export of a priced quote document.

use quote_model::QuoteDocument;

/// Render the document as CSV: one row per dimensioned item, a blank
/// separator line, then the grand-total row.
///
/// ```text
/// #,Width,Height,Type,Price
/// 1,1000,1000,BO,10.00
///
/// Total,,,,10.00
/// ```
pub fn quote_to_csv(document: &QuoteDocument) -> Result<String, csv::Error> {
    let mut body = csv::Writer::from_writer(Vec::new());
    body.write_record(["#", "Width", "Height", "Type", "Price"])?;
    for (index, item) in document.items.iter().enumerate() {
        if !item.has_dimensions() {
            continue;
        }
        body.write_record([
            (index + 1).to_string(),
            item.width.map(|v| v.to_string()).unwrap_or_default(),
            item.height.map(|v| v.to_string()).unwrap_or_default(),
            item.fabric_type.clone().unwrap_or_default(),
            item.line_price.map(|p| format!("{p:.2}")).unwrap_or_default(),
        ])?;
    }

    let total = document.summary.total_sum.unwrap_or(0.0);
    let mut footer = csv::Writer::from_writer(Vec::new());
    footer.write_record(["Total", "", "", "", &format!("{total:.2}")])?;

    let mut out = into_string(body)?;
    out.push('\n');
    out.push_str(&into_string(footer)?);
    Ok(out)
}

fn into_string(writer: csv::Writer<Vec<u8>>) -> Result<String, csv::Error> {
    let bytes = writer
        .into_inner()
        .map_err(|error| csv::Error::from(error.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

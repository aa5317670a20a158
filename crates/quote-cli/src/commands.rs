//! Subcommand implementations.

use std::fs;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info;

use quote_catalog::{RateCatalog, RateDocument};
use quote_model::{ItemIdGen, LineItem, QuoteDocument};
use quote_pricing::{ProductKind, RowError, calculate_and_sum, strategy_for};

use quote_cli::export::quote_to_csv;

use crate::cli::{FabricsArgs, InitArgs, PriceArgs};

pub struct PriceResult {
    pub document: QuoteDocument,
    pub first_error: Option<RowError>,
}

pub fn run_price(args: &PriceArgs) -> Result<PriceResult> {
    let rates = RateDocument::from_path(&args.rates)
        .with_context(|| format!("load rate file {}", args.rates.display()))?;
    let catalog = RateCatalog::with_document(rates);

    let text = fs::read_to_string(&args.quote)
        .with_context(|| format!("read quote file {}", args.quote.display()))?;
    let document: QuoteDocument = serde_json::from_str(&text)
        .with_context(|| format!("parse quote file {}", args.quote.display()))?;

    let strategy = strategy_for(ProductKind::RollerBlind);
    let outcome = calculate_and_sum(&document, strategy, &catalog);
    info!(
        rows = outcome.document.items.len(),
        total = outcome.document.summary.total_sum,
        "quote priced"
    );

    if let Some(path) = &args.output {
        let mut json = serde_json::to_string_pretty(&outcome.document)
            .context("serialize priced document")?;
        json.push('\n');
        fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), "priced document written");
    }
    if let Some(path) = &args.csv {
        let csv = quote_to_csv(&outcome.document).context("render CSV")?;
        fs::write(path, csv).with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), "CSV export written");
    }

    Ok(PriceResult {
        document: outcome.document,
        first_error: outcome.first_error,
    })
}

pub fn run_fabrics(args: &FabricsArgs) -> Result<()> {
    let rates = RateDocument::from_path(&args.rates)
        .with_context(|| format!("load rate file {}", args.rates.display()))?;

    let mut table = Table::new();
    table.set_header(vec!["Type", "Max width", "Max drop", "Price cells"]);
    // Sequence order first; matrices outside the sequence follow in key
    // order.
    let sequenced = rates.fabric_type_sequence.iter();
    let extra = rates
        .matrices
        .keys()
        .filter(|code| !rates.fabric_type_sequence.contains(code));
    for code in sequenced.chain(extra) {
        match rates.matrices.get(code) {
            Some(matrix) => {
                let cells: usize = matrix.prices.iter().map(Vec::len).sum();
                table.add_row(vec![
                    code.clone(),
                    matrix.widths.last().map(u32::to_string).unwrap_or_default(),
                    matrix.drops.last().map(u32::to_string).unwrap_or_default(),
                    cells.to_string(),
                ]);
            }
            None => {
                table.add_row(vec![code.clone(), "-".into(), "-".into(), "-".into()]);
            }
        }
    }
    println!("{table}");
    Ok(())
}

pub fn run_init(args: &InitArgs) -> Result<()> {
    let mut ids = ItemIdGen::new();
    let document = QuoteDocument::new(LineItem::blank(ids.next_id()));
    let mut json = serde_json::to_string_pretty(&document).context("serialize document")?;
    json.push('\n');
    fs::write(&args.output, json)
        .with_context(|| format!("write {}", args.output.display()))?;
    info!(path = %args.output.display(), "new quote document written");
    Ok(())
}

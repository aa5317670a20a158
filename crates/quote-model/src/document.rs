//! The quote document: line items, metadata, and summary.

use serde::{Deserialize, Serialize};

use crate::item::LineItem;
use crate::options::{DualBracket, Winder};
use crate::summary::Summary;

/// Customer details carried on the quote for persistence parity; not
/// priced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

/// The single in-memory quote document for a session.
///
/// Serializes as plain nested records; external persistence and export
/// layers consume snapshots of this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteDocument {
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub quote_id: Option<String>,
    #[serde(default)]
    pub issue_date: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub customer: Customer,
    #[serde(default)]
    pub summary: Summary,
}

fn default_status() -> String {
    "Configuring".to_string()
}

impl QuoteDocument {
    /// A new document holding exactly the given blank row.
    pub fn new(first_item: LineItem) -> Self {
        Self {
            items: vec![first_item],
            quote_id: None,
            issue_date: None,
            due_date: None,
            status: default_status(),
            customer: Customer::default(),
            summary: Summary::default(),
        }
    }

    pub fn dual_count(&self) -> u32 {
        count(&self.items, |item| item.dual == DualBracket::Dual)
    }

    pub fn winder_count(&self) -> u32 {
        count(&self.items, |item| item.winder == Winder::HeavyDuty)
    }

    pub fn motor_count(&self) -> u32 {
        count(&self.items, LineItem::has_motor)
    }

    pub fn has_motor(&self) -> bool {
        self.items.iter().any(LineItem::has_motor)
    }
}

fn count(items: &[LineItem], pred: impl Fn(&LineItem) -> bool) -> u32 {
    items.iter().filter(|item| pred(item)).count() as u32
}

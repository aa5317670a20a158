//! Rate matrices and dimension validation rules.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A width or height column, used for the active input cell and to point
/// the caller at the offending column of a pricing error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Width,
    Height,
}

impl Dimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Width => "width",
            Dimension::Height => "height",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-fabric-type breakpoint/price lookup table. Immutable once loaded.
///
/// `widths` and `drops` are ascending breakpoint sequences in millimeters;
/// `prices` is indexed `[drop_index][width_index]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateMatrix {
    pub widths: Vec<u32>,
    pub drops: Vec<u32>,
    pub prices: Vec<Vec<f64>>,
}

impl RateMatrix {
    /// Index of the smallest width breakpoint that covers `width`, i.e.
    /// the first entry with `width <= breakpoint`. `None` when the width
    /// exceeds every breakpoint.
    pub fn width_index(&self, width: u32) -> Option<usize> {
        self.widths.iter().position(|&w| width <= w)
    }

    /// As [`width_index`](Self::width_index), for the drop breakpoints.
    pub fn drop_index(&self, height: u32) -> Option<usize> {
        self.drops.iter().position(|&d| height <= d)
    }

    /// The price cell at the given breakpoint indexes, if the table has
    /// one there.
    pub fn price_at(&self, drop_index: usize, width_index: usize) -> Option<f64> {
        self.prices.get(drop_index)?.get(width_index).copied()
    }
}

/// Inclusive bounds for one manually entered dimension, with the display
/// name used in rejection messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionRule {
    pub min: u32,
    pub max: u32,
    pub name: &'static str,
}

impl DimensionRule {
    pub fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }

    /// The message surfaced when a manual entry falls outside the bounds.
    pub fn rejection_message(&self) -> String {
        format!(
            "{} must be between {} and {}.",
            self.name, self.min, self.max
        )
    }
}

/// The fixed per-product validation rules, one per dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    pub width: DimensionRule,
    pub height: DimensionRule,
}

impl ValidationRules {
    pub fn rule(&self, dimension: Dimension) -> &DimensionRule {
        match dimension {
            Dimension::Width => &self.width,
            Dimension::Height => &self.height,
        }
    }
}

//! Session state stores for the quoting core.
//!
//! [`QuoteStore`] owns the single mutable quote document and funnels every
//! structural and field mutation through invariant-preserving operations;
//! [`ViewState`] owns the transient interaction state (selection, active
//! cell, mode flags, counters) that the cross-field rules read and write
//! but which is not pricing data. Neither store renders or raises for
//! expected conditions: every mutation reports whether it changed
//! anything, and callers use that flag to decide when to notify and when
//! to mark the summary stale.

pub mod property;
pub mod store;
pub mod view;

pub use property::{ItemProperty, OptionField};
pub use store::QuoteStore;
pub use view::{
    CellRef, Column, CounterAccessory, DriveAccessoryMode, DriveTotals, DualChainMode, EditMode,
    Selection, SummaryMirror, Tab, ViewKind, ViewState,
};

//! Interaction flows for a quoting session.
//!
//! [`Session`] pairs the document store with the view state and carries
//! the per-tab rules the stores themselves stay agnostic of: input-buffer
//! commits with validation, insert/delete guards, the dual-bracket
//! even-count gate, and the drive-tab recompute-on-exit. Outcomes are
//! plain values ([`Notice`] payloads and deferred [`Confirmation`]s);
//! nothing here renders or blocks.

pub mod drive;
pub mod dual_chain;
pub mod notice;
pub mod session;

pub use drive::{Confirmation, DriveTarget};
pub use notice::{Notice, Severity};
pub use session::Session;

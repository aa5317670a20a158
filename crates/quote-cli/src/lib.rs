//! Library components for the quoting CLI.

pub mod export;
pub mod logging;

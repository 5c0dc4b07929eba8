//! Helpers shared across pages and components.
//!
//! `browser` wraps the csr-only web APIs; `format` renders prices, ratings,
//! and counts for display.

pub mod browser;
pub mod format;

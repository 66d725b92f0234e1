//! Purchasing domain module (PO numbering, revisions, totals).
//!
//! This crate contains business rules for purchase orders, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage). Callers pass in a
//! snapshot of previously issued PO numbers and the reference date; nothing here
//! reads a clock or keeps state between calls.

pub mod config;
pub mod draft;
pub mod financial_year;
pub mod numbering;
pub mod po_number;
pub mod revision;
pub mod totals;

pub use config::{DEFAULT_PO_PREFIX, PO_PREFIX_ENV, PoNumberingConfig};
pub use draft::{PoDraft, PoNumberMode, resolve_po_number};
pub use financial_year::FinancialYear;
pub use numbering::{next_po_number, next_po_number_with};
pub use po_number::{PoNumber, PoSummary, RevisionKey};
pub use revision::next_revision;
pub use totals::{LineAmounts, LineItem, PoTotals, calculate_total, compute_totals, round_currency};

//! Pricing engine for consignment listings
//!
//! Pure calculation layer: digit-group formatting, desired-price input
//! normalization, the tax rate control, and the consignment price
//! derivation. No I/O happens here; the TUI and CLI layers call into
//! this module and render whatever comes back.

pub mod engine;
pub mod field;
pub mod format;
pub mod tax;

pub use engine::{consignment_display, consignment_value};
pub use field::PriceField;
pub use format::{group_digits, normalize, strip_separators};
pub use tax::{TaxRate, MAX_TAX_RATE};

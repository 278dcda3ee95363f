//! Billbook Core - Shared domain types and invoice arithmetic.
//!
//! This crate provides the types shared by the Billbook components:
//! - `web` - The invoicing web application
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no filesystem access. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - The persisted store document, business profile, bills, and
//!   line items
//! - [`totals`] - The invoice total calculator (subtotal, tax, discount,
//!   grand total)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod totals;
pub mod types;

pub use totals::{BillTotals, compute_totals, round2, subtotal};
pub use types::*;

//! Core types for Billbook.
//!
//! All wire and storage formats are camelCase JSON, matching the document
//! layout the web handlers persist.

pub mod bill;
pub mod business;
pub mod store;

pub use bill::{Bill, BillInput, LineItem};
pub use business::BusinessProfile;
pub use store::Store;

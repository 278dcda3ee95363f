//! Billbook web library.
//!
//! This crate provides the invoicing application as a library, allowing it
//! to be tested and reused. The `billbook-web` binary is a thin wrapper
//! around these modules.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod filters;
pub mod ledger;
pub mod routes;
pub mod state;
pub mod store;
pub mod uploads;

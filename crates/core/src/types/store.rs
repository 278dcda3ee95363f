//! The single persisted document.

use serde::{Deserialize, Serialize};

use super::{Bill, BusinessProfile};

/// Everything the application persists: one business profile and an
/// append-only list of bills.
///
/// The storage accessor owns this document exclusively; every mutation
/// re-serializes the whole thing. The default value is the shape used when
/// the backing file does not exist yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Store {
    pub business: BusinessProfile,
    pub bills: Vec<Bill>,
}

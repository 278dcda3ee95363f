//! Bill ledger: append-only invoice records over the JSON store.

use billbook_core::{Bill, BillInput, compute_totals};
use chrono::Utc;
use uuid::Uuid;

use crate::store::{JsonStore, StoreError};

/// Dashboard summary derived from the ledger.
#[derive(Debug, Clone, Copy, Default)]
pub struct LedgerSummary {
    pub bill_count: usize,
    /// Sum of stored grand totals.
    pub total_revenue: f64,
}

/// Append-only bill ledger.
///
/// Bills are immutable once appended; there is no update or delete. The
/// client-computed `grandTotal` is stored verbatim (trust boundary carried
/// over from the original design); a server-side recomputation only feeds a
/// warning log when the two disagree.
pub struct BillLedger<'a> {
    store: &'a JsonStore,
}

impl<'a> BillLedger<'a> {
    /// Create a ledger over the given store.
    #[must_use]
    pub const fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// Append a new bill, stamping a fresh id and creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be loaded or written.
    pub async fn append(&self, input: BillInput) -> Result<Bill, StoreError> {
        let totals = compute_totals(&input.items, input.tax_rate, input.discount);
        if (totals.grand_total - input.grand_total).abs() > 0.005 {
            tracing::warn!(
                client_total = input.grand_total,
                server_total = totals.grand_total,
                bill_number = %input.bill_number,
                "Client grand total disagrees with recomputed total; storing client value"
            );
        }

        let bill = input.into_bill(Uuid::new_v4(), Utc::now());
        let stored = bill.clone();
        self.store
            .update(move |doc| {
                doc.bills.push(bill);
            })
            .await?;

        tracing::info!(id = %stored.id, bill_number = %stored.bill_number, "Appended bill");
        Ok(stored)
    }

    /// All bills, most recent first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be loaded.
    pub async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        let doc = self.store.read().await?;
        let mut bills = doc.bills;
        // Appends are chronological, so newest-first is a reversal.
        bills.reverse();
        Ok(bills)
    }

    /// Bill count and total revenue for the dashboard.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be loaded.
    pub async fn summary(&self) -> Result<LedgerSummary, StoreError> {
        let doc = self.store.read().await?;
        Ok(LedgerSummary {
            bill_count: doc.bills.len(),
            total_revenue: doc.bills.iter().map(|b| b.grand_total).sum(),
        })
    }
}

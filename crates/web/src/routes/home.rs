//! Dashboard route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use billbook_core::BusinessProfile;

use crate::error::Result;
use crate::filters;
use crate::ledger::BillLedger;
use crate::state::AppState;

/// Dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Configured business profile (possibly empty).
    pub business: BusinessProfile,
    /// Number of bills in the ledger.
    pub bill_count: usize,
    /// Sum of all stored grand totals.
    pub total_revenue: f64,
}

/// Display the dashboard.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<HomeTemplate> {
    let doc = state.store().read().await?;
    let summary = BillLedger::new(state.store()).summary().await?;

    Ok(HomeTemplate {
        business: doc.business,
        bill_count: summary.bill_count,
        total_revenue: summary.total_revenue,
    })
}

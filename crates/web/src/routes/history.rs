//! Bill history route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use billbook_core::Bill;

use crate::error::Result;
use crate::filters;
use crate::ledger::BillLedger;
use crate::state::AppState;

/// Bill history template.
///
/// Renders an explicit "no bills yet" state instead of an empty table.
#[derive(Template, WebTemplate)]
#[template(path = "history.html")]
pub struct HistoryTemplate {
    /// All bills, most recent first.
    pub bills: Vec<Bill>,
}

/// Display all bills, newest first.
#[instrument(skip(state))]
pub async fn history(State(state): State<AppState>) -> Result<HistoryTemplate> {
    let bills = BillLedger::new(state.store()).list().await?;
    Ok(HistoryTemplate { bills })
}

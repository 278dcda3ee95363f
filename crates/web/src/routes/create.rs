//! Bill creation route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;
use uuid::Uuid;

use billbook_core::{BillInput, BusinessProfile};

use crate::error::{AppError, Result};
use crate::filters;
use crate::ledger::BillLedger;
use crate::state::AppState;

/// Bill creation form template.
#[derive(Template, WebTemplate)]
#[template(path = "create.html")]
pub struct CreateTemplate {
    pub business: BusinessProfile,
}

/// Acknowledgment returned after a bill is stored.
#[derive(Debug, Serialize)]
pub struct CreateResponse {
    pub success: bool,
    pub id: Uuid,
}

/// Display the bill creation form.
///
/// Redirects to settings until the business profile is configured; there is
/// nothing sensible to put on an invoice before that.
#[instrument(skip(state))]
pub async fn create_page(State(state): State<AppState>) -> Result<CreateTemplate> {
    let doc = state.store().read().await?;
    if !doc.business.is_configured() {
        return Err(AppError::MissingBusinessProfile);
    }
    Ok(CreateTemplate {
        business: doc.business,
    })
}

/// Store a submitted bill and acknowledge with its generated id.
///
/// The payload is trusted as-is, including the client-computed grand total
/// (see the ledger for the mismatch warning).
#[instrument(skip(state, input), fields(bill_number = %input.bill_number))]
pub async fn create_bill(
    State(state): State<AppState>,
    Json(input): Json<BillInput>,
) -> Result<Json<CreateResponse>> {
    let doc = state.store().read().await?;
    if !doc.business.is_configured() {
        return Err(AppError::MissingBusinessProfile);
    }

    let bill = BillLedger::new(state.store()).append(input).await?;
    Ok(Json(CreateResponse {
        success: true,
        id: bill.id,
    }))
}

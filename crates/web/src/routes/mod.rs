//! HTTP route handlers for the invoicing application.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Dashboard (business summary, bill count, revenue)
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (store must be readable)
//!
//! # Settings
//! GET  /settings               - Business profile form
//! POST /settings               - Update profile (multipart, optional logo upload)
//!
//! # Bills
//! GET  /create                 - Bill creation form (redirects to settings until configured)
//! POST /create                 - Submit a new bill (JSON payload)
//! GET  /history                - All bills, newest first
//!
//! # Upload API
//! POST /api/upload-signature   - Upload a signature image (multipart field `signature`)
//! ```

pub mod api;
pub mod create;
pub mod history;
pub mod home;
pub mod settings;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use crate::state::AppState;

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the store.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies the store document is readable before returning OK.
/// Returns 503 Service Unavailable if the document is corrupt or unreadable.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.store().read().await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Create the upload API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/upload-signature", post(api::upload_signature))
}

/// Create all routes for the application.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Health checks
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        // Dashboard
        .route("/", get(home::home))
        // Business profile
        .route(
            "/settings",
            get(settings::settings_page).post(settings::update_settings),
        )
        // Bills
        .route("/create", get(create::create_page).post(create::create_bill))
        .route("/history", get(history::history))
        // Upload API
        .nest("/api", api_routes())
}

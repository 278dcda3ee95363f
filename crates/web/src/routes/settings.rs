//! Business profile settings route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Multipart, State},
    response::Redirect,
};
use tracing::instrument;

use billbook_core::BusinessProfile;

use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;
use crate::uploads::{UploadError, UploadStore};

/// Settings form template.
#[derive(Template, WebTemplate)]
#[template(path = "settings.html")]
pub struct SettingsTemplate {
    pub business: BusinessProfile,
}

/// Display the settings form, prefilled from the store.
#[instrument(skip(state))]
pub async fn settings_page(State(state): State<AppState>) -> Result<SettingsTemplate> {
    let doc = state.store().read().await?;
    Ok(SettingsTemplate {
        business: doc.business,
    })
}

/// Update the business profile from a multipart form submission.
///
/// Text fields replace the profile wholesale; the logo is replaced only when
/// a new file is submitted and passes upload validation, otherwise the
/// existing logo path carries forward (an invalid logo is ignored, matching
/// the replace-or-keep contract).
#[instrument(skip(state, multipart))]
pub async fn update_settings(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Redirect> {
    let submission = read_settings_form(multipart, state.uploads()).await?;

    state
        .store()
        .update(move |doc| {
            let logo = submission
                .logo
                .unwrap_or_else(|| doc.business.logo.clone());
            doc.business = BusinessProfile {
                logo,
                ..submission.profile
            };
        })
        .await?;

    tracing::info!("Business profile updated");
    Ok(Redirect::to("/"))
}

/// Parsed settings submission: the text fields plus an optional new logo path.
struct SettingsSubmission {
    profile: BusinessProfile,
    logo: Option<String>,
}

async fn read_settings_form(
    mut multipart: Multipart,
    uploads: &UploadStore,
) -> Result<SettingsSubmission> {
    let mut profile = BusinessProfile::default();
    let mut logo = None;

    while let Some(field) = multipart.next_field().await.map_err(AppError::from)? {
        let Some(name) = field.name().map(ToString::to_string) else {
            continue;
        };

        if name == "logo" {
            let filename = field.file_name().unwrap_or_default().to_string();
            let bytes = field.bytes().await.map_err(AppError::from)?;
            if filename.is_empty() || bytes.is_empty() {
                continue;
            }
            match uploads.save(&filename, &bytes) {
                Ok(path) => logo = Some(path),
                // A logo that fails validation is ignored; the old one stays.
                Err(UploadError::InvalidFileType | UploadError::NoFileProvided) => {
                    tracing::warn!(file = %filename, "Ignoring logo with disallowed file type");
                }
                Err(err) => return Err(err.into()),
            }
            continue;
        }

        let value = field.text().await.map_err(AppError::from)?;
        match name.as_str() {
            "shopName" => profile.shop_name = value,
            "shopAddress" => profile.shop_address = value,
            "phone" => profile.phone = value,
            "email" => profile.email = value,
            "gstin" => profile.gstin = value,
            _ => {}
        }
    }

    Ok(SettingsSubmission { profile, logo })
}

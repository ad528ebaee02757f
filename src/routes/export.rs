use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use crate::constants::ERR_DESIGN_ID_REQUIRED;
use crate::error::{AppError, Result};
use crate::models::{ExportDescriptor, ExportFormat};
use crate::routes::validation::{non_empty, AppJson};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub design_id: Option<String>,
    pub format: Option<String>,
}

/// Export a design for email
///
/// Stateless: builds a download descriptor without touching any collection.
pub async fn export_email(
    AppJson(payload): AppJson<ExportRequest>,
) -> Result<Json<ExportDescriptor>> {
    let Some(design_id) = non_empty(payload.design_id) else {
        return Err(AppError::InvalidInput(ERR_DESIGN_ID_REQUIRED.to_string()));
    };

    let format = match non_empty(payload.format) {
        Some(raw) => raw.parse::<ExportFormat>().map_err(AppError::InvalidInput)?,
        None => ExportFormat::default(),
    };

    tracing::info!("Export of design {} as {} ready", design_id, format);

    Ok(Json(ExportDescriptor::new(design_id, format, Utc::now())))
}

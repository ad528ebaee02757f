use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde::Deserialize;

use crate::constants::ERR_DESIGN_ID_REQUIRED;
use crate::error::{AppError, Result};
use crate::models::HistoryRecord;
use crate::routes::validation::{non_empty, AppJson};
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    pub design_id: Option<String>,
    pub caption: Option<String>,
}

/// Publish a design to Instagram
///
/// Only records the attempt: the entry is stored as `pending` with the
/// missing-credentials error and returned with 202 Accepted. Nothing picks
/// it up afterwards.
pub async fn publish_instagram(
    State(state): State<AppState>,
    AppJson(payload): AppJson<PublishRequest>,
) -> Result<(StatusCode, Json<HistoryRecord>)> {
    let Some(design_id) = non_empty(payload.design_id) else {
        return Err(AppError::InvalidInput(ERR_DESIGN_ID_REQUIRED.to_string()));
    };

    let record = HistoryRecord::pending_instagram(design_id, payload.caption, Utc::now());

    let created = state
        .store
        .history
        .update(move |doc| {
            doc.history.push(record.clone());
            Ok(record)
        })
        .await?;

    tracing::warn!(
        "Instagram publish for design {} left pending: credentials not configured",
        created.design_id
    );

    Ok((StatusCode::ACCEPTED, Json(created)))
}

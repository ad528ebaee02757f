use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;

use crate::error::{AppError, Result};
use crate::models::{placeholder_designs, Design, DesignsDocument};
use crate::AppState;

/// Pull designs from the design source
///
/// Replaces the whole designs collection; designs missing from the new set
/// are gone afterwards. The source API is not called yet, the pull returns
/// a fixed catalogue.
pub async fn pull_designs(State(state): State<AppState>) -> Result<Json<DesignsDocument>> {
    if !state.config.canva_configured() {
        tracing::debug!("Canva credentials not configured, serving placeholder designs");
    }

    tracing::info!("Fetching designs from Canva API...");

    let document = state
        .store
        .designs
        .replace(placeholder_designs(Utc::now()))
        .await?;

    tracing::info!("Stored {} designs", document.designs.len());

    Ok(Json(document))
}

/// List stored designs, empty when the file cannot be read
pub async fn list_designs(State(state): State<AppState>) -> Json<DesignsDocument> {
    Json(state.store.designs.load_or_empty().await)
}

/// Get a single design
pub async fn get_design(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Design>> {
    let document = state
        .store
        .designs
        .load()
        .await
        .ok_or(AppError::DesignNotFound)?;

    document
        .find(&id)
        .cloned()
        .map(Json)
        .ok_or(AppError::DesignNotFound)
}

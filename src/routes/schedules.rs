use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::{Platform, Schedule, ScheduleSpec, ScheduleUpdate, SchedulesDocument};
use crate::routes::validation::{missing_fields, non_empty, AppJson};
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleRequest {
    pub design_id: Option<String>,
    pub platform: Option<Platform>,
    pub schedule: Option<ScheduleSpec>,
    pub timezone: Option<String>,
}

/// Create a scheduled post
///
/// `designId` is stored as given; it is not checked against the designs
/// collection.
pub async fn create_schedule(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateScheduleRequest>,
) -> Result<Json<Schedule>> {
    let (design_id, platform, spec) =
        match (non_empty(payload.design_id), payload.platform, payload.schedule) {
            (Some(design_id), Some(platform), Some(spec)) => (design_id, platform, spec),
            (design_id, platform, spec) => {
                return Err(missing_fields(&[
                    ("designId", design_id.is_none()),
                    ("platform", platform.is_none()),
                    ("schedule", spec.is_none()),
                ]));
            }
        };

    let spec = spec.validate().map_err(AppError::InvalidInput)?;
    let record = Schedule::new(design_id, platform, spec, payload.timezone, Utc::now());

    let created = state
        .store
        .schedules
        .update(move |doc| {
            doc.schedules.push(record.clone());
            Ok(record)
        })
        .await?;

    tracing::info!(
        "Schedule {} created for design {} on {}",
        created.id,
        created.design_id,
        created.platform
    );

    Ok(Json(created))
}

/// List all schedules, empty when the file cannot be read
pub async fn list_schedules(State(state): State<AppState>) -> Json<SchedulesDocument> {
    Json(state.store.schedules.load_or_empty().await)
}

/// Get a single schedule
pub async fn get_schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Schedule>> {
    let document = state
        .store
        .schedules
        .load()
        .await
        .ok_or(AppError::ScheduleNotFound)?;

    document
        .find(&id)
        .cloned()
        .map(Json)
        .ok_or(AppError::ScheduleNotFound)
}

/// Update a schedule
///
/// Fields in the body replace the stored ones. `id`, `createdAt` and
/// `status` cannot be changed.
pub async fn update_schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(mut update): AppJson<ScheduleUpdate>,
) -> Result<Json<Schedule>> {
    if let Some(spec) = update.schedule.take() {
        update.schedule = Some(spec.validate().map_err(AppError::InvalidInput)?);
    }

    let updated = state
        .store
        .schedules
        .update(move |doc| {
            let schedule = doc.find_mut(&id).ok_or(AppError::ScheduleNotFound)?;
            schedule.apply(update);
            Ok(schedule.clone())
        })
        .await?;

    tracing::info!("Schedule {} updated", updated.id);

    Ok(Json(updated))
}

/// Delete a schedule, returning the removed record
pub async fn delete_schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Schedule>> {
    let deleted = state
        .store
        .schedules
        .update(move |doc| doc.remove(&id).ok_or(AppError::ScheduleNotFound))
        .await?;

    tracing::info!("Schedule {} deleted", deleted.id);

    Ok(Json(deleted))
}

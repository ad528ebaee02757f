use axum::{extract::State, Json};
use serde::Deserialize;

use crate::models::{HistoryDocument, HistoryStatus, Platform};
use crate::routes::validation::{optional_filter, AppQuery};
use crate::AppState;

/// Optional filters for the history listing; empty or "all" matches everything
#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    #[serde(default, deserialize_with = "optional_filter")]
    pub platform: Option<Platform>,
    #[serde(default, deserialize_with = "optional_filter")]
    pub status: Option<HistoryStatus>,
}

/// Get publishing history
///
/// Without filters the stored document is returned unchanged.
pub async fn list_history(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<HistoryQuery>,
) -> Json<HistoryDocument> {
    let document = state.store.history.load_or_empty().await;

    if query.platform.is_none() && query.status.is_none() {
        return Json(document);
    }

    Json(document.filtered(query.platform, query.status))
}

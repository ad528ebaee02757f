use axum::{extract::State, Json};
use serde::Serialize;

use crate::constants::{DASHBOARD_RECENT_DESIGNS, DASHBOARD_RECENT_HISTORY};
use crate::models::{
    Design, DesignsDocument, HistoryDocument, HistoryRecord, HistoryStatus, Schedule,
    SchedulesDocument,
};
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_designs: usize,
    pub total_scheduled: usize,
    pub total_published: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub recent_designs: Vec<Design>,
    pub scheduled_posts: Vec<Schedule>,
    pub publishing_history: Vec<HistoryRecord>,
    pub stats: DashboardStats,
}

impl DashboardResponse {
    /// Compose the dashboard from the three collections
    ///
    /// "Recent" designs and history are the first entries in stored order,
    /// not sorted by `createdAt`.
    pub fn build(
        designs: DesignsDocument,
        schedules: SchedulesDocument,
        history: HistoryDocument,
    ) -> Self {
        let scheduled_posts: Vec<Schedule> = schedules.active().cloned().collect();

        let stats = DashboardStats {
            total_designs: designs.designs.len(),
            total_scheduled: scheduled_posts.len(),
            total_published: history.count_with_status(HistoryStatus::Published),
        };

        Self {
            recent_designs: designs
                .designs
                .into_iter()
                .take(DASHBOARD_RECENT_DESIGNS)
                .collect(),
            scheduled_posts,
            publishing_history: history
                .history
                .into_iter()
                .take(DASHBOARD_RECENT_HISTORY)
                .collect(),
            stats,
        }
    }
}

/// Dashboard data endpoint
pub async fn dashboard(State(state): State<AppState>) -> Json<DashboardResponse> {
    let (designs, schedules, history) = tokio::join!(
        state.store.designs.load_or_empty(),
        state.store.schedules.load_or_empty(),
        state.store.history.load_or_empty(),
    );

    Json(DashboardResponse::build(designs, schedules, history))
}

pub mod dashboard;
pub mod designs;
pub mod export;
pub mod health;
pub mod history;
pub mod publish;
pub mod sales;
pub mod schedules;
pub mod validation;

pub use dashboard::dashboard;
pub use designs::{get_design, list_designs, pull_designs};
pub use export::export_email;
pub use health::health_check;
pub use history::list_history;
pub use publish::publish_instagram;
pub use sales::sales_trends;
pub use schedules::{
    create_schedule, delete_schedule, get_schedule, list_schedules, update_schedule,
};
pub use validation::{AppJson, AppQuery};

use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;

use crate::error::AppError;
use crate::AppState;

/// Build the API router
///
/// Handler panics are turned into a 500 JSON error instead of dropping the
/// connection.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/canva/designs", get(pull_designs))
        .route("/api/designs", get(list_designs))
        .route("/api/designs/:id", get(get_design))
        .route("/api/schedules", post(create_schedule).get(list_schedules))
        .route(
            "/api/schedules/:id",
            get(get_schedule)
                .put(update_schedule)
                .delete(delete_schedule),
        )
        .route("/api/publish/instagram", post(publish_instagram))
        .route("/api/export/email", post(export_email))
        .route("/api/history", get(list_history))
        .route("/api/sales/trends", get(sales_trends))
        .route("/api/dashboard", get(dashboard))
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    };

    AppError::Internal(details).into_response()
}

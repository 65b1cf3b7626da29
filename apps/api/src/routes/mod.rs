pub mod admin;
pub mod health;
pub mod readings;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_handler))
        .route("/api/create-reading", post(readings::handle_create_reading))
        .route(
            "/api/send-report/:reading_id",
            post(readings::handle_send_report),
        )
        .route("/admin", get(admin::handle_admin_panel))
        .with_state(state)
}

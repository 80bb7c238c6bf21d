pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::guidance::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/guidance",
            post(handlers::handle_generate_guidance),
        )
        .with_state(state)
}

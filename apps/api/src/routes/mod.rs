pub mod health;
pub mod shell;

use axum::{
    routing::{get, post},
    Router,
};

use crate::letter::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(shell::shell_handler))
        .route("/health", get(health::health_handler))
        .route("/api/v1/letters", post(handlers::handle_generate_letter))
        .with_state(state)
}

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::api::{handlers, state::AppState};

pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Liveness endpoint
        .route("/", get(handlers::health_check))
        // Prediction endpoint (trailing slash matches the published contract)
        .route("/predict/", post(handlers::predict))
        // Add state and CORS
        .with_state(state)
        .layer(cors)
}

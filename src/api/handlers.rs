use axum::{extract::State, http::StatusCode, Json};
use tracing::{debug, error};

use crate::api::state::AppState;
use crate::api::types::{AcquisitionFeatures, PredictionOutput, StatusMessage};

/// Fixed status text returned by the liveness endpoint.
pub const HEALTH_MESSAGE: &str = "API health check successful";

/// GET / -- liveness check, independent of model state
pub async fn health_check() -> Json<StatusMessage> {
    Json(StatusMessage {
        message: HEALTH_MESSAGE.to_string(),
    })
}

/// POST /predict/ -- evaluate the three quantile estimators for one feature set
pub async fn predict(
    State(state): State<AppState>,
    Json(features): Json<AcquisitionFeatures>,
) -> std::result::Result<Json<PredictionOutput>, (StatusCode, String)> {
    if let Err(reason) = features.validate() {
        return Err((StatusCode::UNPROCESSABLE_ENTITY, reason));
    }

    let vector = features.to_vector();
    debug!("Predicting bid range for features {:?}", vector);

    let range = state.models.predict(&vector).map_err(|e| {
        error!("Inference failed: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    Ok(Json(PredictionOutput::from(range)))
}

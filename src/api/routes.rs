use axum::{
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::health::health_check;
use super::predict::{predict_workout, AppState};
use crate::services::PredictionService;

pub fn create_routes(prediction_service: PredictionService) -> Router {
    let state = AppState { prediction_service };

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/predict", post(predict_workout))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({ "msg": "Heyyyy!" }))
}

/// CORS configuration for the inference endpoints
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

use axum::{extract::State, response::Json};
use axum_extra::extract::WithRejection;
use tracing::{error, info};

use super::errors::ApiError;
use crate::models::{validate_profile, FitnessProfile, PredictionResponse};
use crate::services::{InsightService, PredictionService};

/// Shared handler state, constructed once at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub prediction_service: PredictionService,
}

/// Handle `POST /predict`: classify the profile and compose the insights.
pub async fn predict_workout(
    State(state): State<AppState>,
    WithRejection(Json(profile), _): WithRejection<Json<FitnessProfile>, ApiError>,
) -> Result<Json<PredictionResponse>, ApiError> {
    validate_profile(&profile).map_err(|e| ApiError::Validation(e.to_string()))?;

    // Computed once; shared by the feature vector and the response payload
    let bmi = profile.bmi();

    let workout = state
        .prediction_service
        .predict_workout(&profile, bmi)
        .map_err(|e| {
            error!("workout prediction failed: {}", e);
            ApiError::Prediction(e)
        })?;

    let response = InsightService::build_response(&profile, bmi, workout);
    info!(
        "predicted {} for profile (bmi {}, {} days to goal)",
        response.predicted_workout.as_str(),
        response.bmi,
        response.goal_progress.estimated_days_to_goal
    );

    Ok(Json(response))
}

use fitness_inference::api::routes::create_routes;
use fitness_inference::config::AppConfig;
use fitness_inference::services::{PredictionService, TrainedWorkoutModel};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env()?;

    // The classifier artifact is loaded once and shared read-only by every request
    let model = TrainedWorkoutModel::from_file(&config.model_path)?;
    info!("Loaded workout classifier from {}", config.model_path);

    let prediction_service = PredictionService::new(Arc::new(model));
    let app = create_routes(prediction_service);

    let listener = TcpListener::bind(config.server_address()).await?;
    info!("Fitness inference server starting on http://{}", config.server_address());
    info!("Health check available at http://{}/health", config.server_address());

    axum::serve(listener, app).await?;

    Ok(())
}

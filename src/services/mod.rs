// Business logic services

pub mod insight_service;
pub mod model_service;
pub mod prediction_service;

pub use insight_service::InsightService;
pub use model_service::{ModelLoadError, TrainedWorkoutModel, WorkoutClassifier};
pub use prediction_service::PredictionService;

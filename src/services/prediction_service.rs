use std::sync::Arc;

use anyhow::{anyhow, Result};
use ndarray::Array1;
use tracing::debug;

use crate::models::{FitnessProfile, WorkoutLabel};
use crate::services::WorkoutClassifier;

/// Turns a validated profile into a workout label via the trained classifier.
#[derive(Clone)]
pub struct PredictionService {
    classifier: Arc<dyn WorkoutClassifier>,
}

impl PredictionService {
    /// Create a new PredictionService around a loaded classifier.
    pub fn new(classifier: Arc<dyn WorkoutClassifier>) -> Self {
        Self { classifier }
    }

    /// Predict the workout category for a profile.
    ///
    /// `bmi` is the unrounded value computed once per request; it doubles as
    /// the fourth model feature and the basis for the response's BMI fields.
    pub fn predict_workout(&self, profile: &FitnessProfile, bmi: f64) -> Result<WorkoutLabel> {
        let features = feature_vector(profile, bmi);
        let index = self.classifier.predict_class(&features)?;

        let label = WorkoutLabel::from_class_index(index)
            .ok_or_else(|| anyhow!("classifier returned out-of-range class index {}", index))?;
        debug!("classified profile as {} (class index {})", label.as_str(), index);

        Ok(label)
    }
}

/// Feature order must match the order the classifier was trained with.
fn feature_vector(profile: &FitnessProfile, bmi: f64) -> Array1<f64> {
    Array1::from(vec![
        profile.age as f64,
        profile.height as f64,
        profile.weight as f64,
        bmi,
        profile.goal_a as f64,
        profile.goal_b as f64,
        profile.goal_c as f64,
        profile.goal_d as f64,
        profile.goal_e as f64,
        profile.goal_f as f64,
        profile.goal_g as f64,
        profile.goal_h as f64,
    ])
}

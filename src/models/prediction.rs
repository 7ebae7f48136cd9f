use serde::{Deserialize, Serialize};

use super::workout_label::WorkoutLabel;

/// BMI category bands with half-open boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitnessLevel {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl FitnessLevel {
    /// Classify an unrounded BMI value. The display value is rounded
    /// separately so that boundary cases are never misclassified.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            FitnessLevel::Underweight
        } else if bmi < 25.0 {
            FitnessLevel::Normal
        } else if bmi < 30.0 {
            FitnessLevel::Overweight
        } else {
            FitnessLevel::Obese
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessLevel::Underweight => "Underweight",
            FitnessLevel::Normal => "Normal",
            FitnessLevel::Overweight => "Overweight",
            FitnessLevel::Obese => "Obese",
        }
    }
}

/// Progress toward the requested target weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalProgress {
    pub current_weight: i32,
    pub target_weight: i32,
    pub weight_to_lose: f64,
    pub estimated_days_to_goal: i64,
}

/// Full response payload for a prediction request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// BMI rounded to two decimals for display
    pub bmi: f64,
    pub fitness_level: FitnessLevel,
    pub predicted_workout: WorkoutLabel,
    pub motivational_tip: String,
    pub goal_progress: GoalProgress,
}

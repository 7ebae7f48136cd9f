use crate::models::{FitnessLevel, FitnessProfile, GoalProgress, PredictionResponse, WorkoutLabel};

/// Kilocalories that must be burned to lose one kilogram of body mass.
const KCAL_PER_KG: i64 = 7700;

/// Composes the response payload from a profile and its predicted label.
/// Pure arithmetic and static lookups; holds no state.
pub struct InsightService;

impl InsightService {
    /// Build the full response for a prediction request.
    ///
    /// `bmi` is the unrounded value already computed for the feature vector.
    /// Category classification uses it as-is; only the displayed BMI is
    /// rounded to two decimals.
    pub fn build_response(
        profile: &FitnessProfile,
        bmi: f64,
        workout: WorkoutLabel,
    ) -> PredictionResponse {
        PredictionResponse {
            bmi: round2(bmi),
            fitness_level: FitnessLevel::from_bmi(bmi),
            predicted_workout: workout,
            motivational_tip: workout.motivational_tip().to_string(),
            goal_progress: Self::goal_progress(profile, workout),
        }
    }

    /// Estimate progress toward the target weight at one session per day.
    pub fn goal_progress(profile: &FitnessProfile, workout: WorkoutLabel) -> GoalProgress {
        let weight_diff = i64::from(profile.weight) - i64::from(profile.target_weight);

        // Already at or below target: nothing to lose, zero days
        let estimated_days_to_goal = if weight_diff <= 0 {
            0
        } else {
            let total_calories_to_burn = weight_diff * KCAL_PER_KG;
            total_calories_to_burn / workout.calories_per_session()
        };

        GoalProgress {
            current_weight: profile.weight,
            target_weight: profile.target_weight,
            weight_to_lose: round2(weight_diff.max(0) as f64),
            estimated_days_to_goal,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

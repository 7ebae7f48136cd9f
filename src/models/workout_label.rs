use serde::{Deserialize, Serialize};

/// Workout categories the classifier can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkoutLabel {
    #[serde(rename = "cycling")]
    Cycling,
    #[serde(rename = "cardio")]
    Cardio,
    #[serde(rename = "hiit")]
    Hiit,
    #[serde(rename = "strength")]
    Strength,
    #[serde(rename = "yoga")]
    Yoga,
    #[serde(rename = "running")]
    Running,
}

impl WorkoutLabel {
    /// Class order used when the model was trained. Reordering this table
    /// without retraining the artifact breaks every prediction.
    pub const CLASS_ORDER: [WorkoutLabel; 6] = [
        WorkoutLabel::Cycling,
        WorkoutLabel::Cardio,
        WorkoutLabel::Hiit,
        WorkoutLabel::Strength,
        WorkoutLabel::Yoga,
        WorkoutLabel::Running,
    ];

    /// Decode a classifier output index into a label.
    pub fn from_class_index(index: usize) -> Option<Self> {
        Self::CLASS_ORDER.get(index).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutLabel::Cycling => "cycling",
            WorkoutLabel::Cardio => "cardio",
            WorkoutLabel::Hiit => "hiit",
            WorkoutLabel::Strength => "strength",
            WorkoutLabel::Yoga => "yoga",
            WorkoutLabel::Running => "running",
        }
    }

    /// Average calories burned in a single session of this workout.
    pub fn calories_per_session(&self) -> i64 {
        match self {
            WorkoutLabel::Cardio => 400,
            WorkoutLabel::Strength => 300,
            WorkoutLabel::Hiit => 500,
            WorkoutLabel::Yoga => 180,
            WorkoutLabel::Cycling => 350,
            WorkoutLabel::Running => 450,
        }
    }

    pub fn motivational_tip(&self) -> &'static str {
        match self {
            WorkoutLabel::Cardio => "Great for endurance and fat burn!",
            WorkoutLabel::Strength => "Perfect for building muscle mass.",
            WorkoutLabel::Yoga => "Excellent for flexibility and stress relief.",
            WorkoutLabel::Hiit => "Fast, effective, and intense. Go crush it!",
            WorkoutLabel::Cycling => "Low-impact and fun for calorie burn.",
            WorkoutLabel::Running => "Classic cardio – boost stamina and heart health.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_indices_in_training_order() {
        assert_eq!(WorkoutLabel::from_class_index(0), Some(WorkoutLabel::Cycling));
        assert_eq!(WorkoutLabel::from_class_index(1), Some(WorkoutLabel::Cardio));
        assert_eq!(WorkoutLabel::from_class_index(2), Some(WorkoutLabel::Hiit));
        assert_eq!(WorkoutLabel::from_class_index(3), Some(WorkoutLabel::Strength));
        assert_eq!(WorkoutLabel::from_class_index(4), Some(WorkoutLabel::Yoga));
        assert_eq!(WorkoutLabel::from_class_index(5), Some(WorkoutLabel::Running));
    }

    #[test]
    fn rejects_out_of_range_index() {
        assert_eq!(WorkoutLabel::from_class_index(6), None);
    }

    #[test]
    fn serializes_as_lowercase_name() {
        let json = serde_json::to_string(&WorkoutLabel::Hiit).unwrap();
        assert_eq!(json, "\"hiit\"");
    }

    #[test]
    fn every_label_has_session_calories() {
        assert_eq!(WorkoutLabel::Cardio.calories_per_session(), 400);
        assert_eq!(WorkoutLabel::Yoga.calories_per_session(), 180);
        assert_eq!(WorkoutLabel::Hiit.calories_per_session(), 500);
    }
}

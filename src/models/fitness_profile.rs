use serde::{Deserialize, Serialize};

/// Physical attributes and weighted goals submitted with a prediction request.
///
/// The eight goal weights are opaque numeric features carried through to the
/// classifier unchanged; their units are defined by the training pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitnessProfile {
    pub age: i32,
    /// Height in centimeters
    pub height: i32,
    /// Weight in kilograms
    pub weight: i32,
    /// Target weight in kilograms
    pub target_weight: i32,
    #[serde(rename = "goal_A")]
    pub goal_a: i32,
    #[serde(rename = "goal_B")]
    pub goal_b: i32,
    #[serde(rename = "goal_C")]
    pub goal_c: i32,
    #[serde(rename = "goal_D")]
    pub goal_d: i32,
    #[serde(rename = "goal_E")]
    pub goal_e: i32,
    #[serde(rename = "goal_F")]
    pub goal_f: i32,
    #[serde(rename = "goal_G")]
    pub goal_g: i32,
    #[serde(rename = "goal_H")]
    pub goal_h: i32,
}

impl FitnessProfile {
    /// Body Mass Index, weight(kg) / height(m)^2, unrounded.
    ///
    /// Computed once per request; the same value feeds the model feature
    /// vector, the BMI category bands, and (rounded) the response payload.
    pub fn bmi(&self) -> f64 {
        let height_m = self.height as f64 / 100.0;
        self.weight as f64 / (height_m * height_m)
    }
}

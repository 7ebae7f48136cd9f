use anyhow::{anyhow, Result};

use super::fitness_profile::FitnessProfile;

/// Validate a profile before it reaches the inference pipeline.
///
/// Height in particular must be positive: the BMI computation divides by it.
pub fn validate_profile(profile: &FitnessProfile) -> Result<()> {
    validate_positive(profile.age, "age")?;
    validate_positive(profile.height, "height")?;
    validate_positive(profile.weight, "weight")?;
    validate_positive(profile.target_weight, "target_weight")?;
    Ok(())
}

fn validate_positive(value: i32, field_name: &str) -> Result<()> {
    if value <= 0 {
        return Err(anyhow!("{} must be a positive integer", field_name));
    }
    Ok(())
}

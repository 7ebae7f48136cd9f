use fitness_inference::models::{FitnessLevel, FitnessProfile, WorkoutLabel};
use fitness_inference::services::InsightService;
use proptest::prelude::*;

fn profile(age: i32, height: i32, weight: i32, target_weight: i32) -> FitnessProfile {
    FitnessProfile {
        age,
        height,
        weight,
        target_weight,
        goal_a: 0,
        goal_b: 0,
        goal_c: 0,
        goal_d: 0,
        goal_e: 0,
        goal_f: 0,
        goal_g: 0,
        goal_h: 0,
    }
}

proptest! {
    #[test]
    fn goal_estimates_are_never_negative(
        weight in 1..500i32,
        target_weight in 1..500i32,
        class_index in 0..6usize,
    ) {
        let label = WorkoutLabel::from_class_index(class_index).unwrap();
        let progress = InsightService::goal_progress(&profile(30, 175, weight, target_weight), label);

        prop_assert!(progress.estimated_days_to_goal >= 0);
        prop_assert!(progress.weight_to_lose >= 0.0);
    }

    #[test]
    fn at_or_below_target_always_yields_zero_days(
        weight in 1..500i32,
        surplus in 0..100i32,
        class_index in 0..6usize,
    ) {
        let label = WorkoutLabel::from_class_index(class_index).unwrap();
        let progress = InsightService::goal_progress(&profile(30, 175, weight, weight + surplus), label);

        prop_assert_eq!(progress.estimated_days_to_goal, 0);
        prop_assert_eq!(progress.weight_to_lose, 0.0);
    }

    #[test]
    fn displayed_bmi_is_never_negative(
        height in 50..300i32,
        weight in 1..500i32,
    ) {
        let p = profile(30, height, weight, weight);
        let response = InsightService::build_response(&p, p.bmi(), WorkoutLabel::Yoga);

        prop_assert!(response.bmi >= 0.0);
    }

    #[test]
    fn fitness_level_is_total_over_bmi(bmi in 0.0..200.0f64) {
        let level = FitnessLevel::from_bmi(bmi);

        if bmi < 18.5 {
            prop_assert_eq!(level, FitnessLevel::Underweight);
        } else if bmi < 25.0 {
            prop_assert_eq!(level, FitnessLevel::Normal);
        } else if bmi < 30.0 {
            prop_assert_eq!(level, FitnessLevel::Overweight);
        } else {
            prop_assert_eq!(level, FitnessLevel::Obese);
        }
    }

    #[test]
    fn identical_profiles_produce_identical_responses(
        height in 50..300i32,
        weight in 1..500i32,
        target_weight in 1..500i32,
        class_index in 0..6usize,
    ) {
        let label = WorkoutLabel::from_class_index(class_index).unwrap();
        let p = profile(30, height, weight, target_weight);

        let first = InsightService::build_response(&p, p.bmi(), label);
        let second = InsightService::build_response(&p, p.bmi(), label);

        prop_assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }
}

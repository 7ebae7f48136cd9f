// Data models and request/response structures

pub mod fitness_profile;
pub mod prediction;
pub mod validation;
pub mod workout_label;

pub use fitness_profile::*;
pub use prediction::*;
pub use validation::*;
pub use workout_label::*;

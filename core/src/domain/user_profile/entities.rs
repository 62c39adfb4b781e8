use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileField {
    Weight,
    Bmi,
}

impl ProfileField {
    pub fn range_message(&self) -> &'static str {
        match self {
            ProfileField::Weight => "Weight must be between 30 and 200 kg.",
            ProfileField::Bmi => "BMI must be between 12 and 45.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Weight and BMI must be numeric values.")]
    NotNumeric,

    #[error("{}", .field.range_message())]
    OutOfRange { field: ProfileField },
}

/// Body measurements of the person a food is evaluated for.
///
/// Only obtainable through [`validate`](super::services::validate), so the
/// weight and BMI are always inside their accepted ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UserProfile {
    weight: f64,
    bmi: f64,
}

impl UserProfile {
    pub(crate) fn new(weight: f64, bmi: f64) -> Self {
        Self { weight, bmi }
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn bmi(&self) -> f64 {
        self.bmi
    }
}

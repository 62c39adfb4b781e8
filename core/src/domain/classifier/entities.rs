use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{food::entities::NutritionProfile, user_profile::entities::UserProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SuitabilityLabel {
    Suitable,
    #[serde(rename = "Not Suitable")]
    NotSuitable,
    Unknown,
}

impl SuitabilityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuitabilityLabel::Suitable => "Suitable",
            SuitabilityLabel::NotSuitable => "Not Suitable",
            SuitabilityLabel::Unknown => "Unknown",
        }
    }

    /// Maps a binary class id; `1` is the positive (suitable) class.
    pub fn from_class(class: i64) -> Self {
        if class == 1 {
            SuitabilityLabel::Suitable
        } else {
            SuitabilityLabel::NotSuitable
        }
    }
}

impl fmt::Display for SuitabilityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const FEATURE_COUNT: usize = 6;

/// Model input, in the column order the model was trained on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub const FEATURE_NAMES: [&'static str; FEATURE_COUNT] =
        ["Weight", "BMI", "Calories", "Protein", "Fat", "Carbohydrates"];

    pub fn new(user: &UserProfile, profile: &NutritionProfile) -> Self {
        Self([
            user.weight(),
            user.bmi(),
            profile.calories,
            profile.protein,
            profile.fat,
            profile.carbs,
        ])
    }

    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub label: SuitabilityLabel,
    /// Probability the model assigns to `label`.
    pub probability: f64,
}

impl Prediction {
    pub fn new(label: SuitabilityLabel, probability: f64) -> Self {
        Self { label, probability }
    }

    /// Placeholder used when no model is available.
    pub fn unknown() -> Self {
        Self {
            label: SuitabilityLabel::Unknown,
            probability: 0.0,
        }
    }
}

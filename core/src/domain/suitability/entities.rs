use serde::Serialize;

use crate::domain::{
    classifier::entities::SuitabilityLabel, common::round_to, food::entities::FoodMatch,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub label: SuitabilityLabel,
    pub confidence: f64,
    pub override_reason: Option<String>,
}

impl Verdict {
    pub fn new(label: SuitabilityLabel, confidence: f64, override_reason: Option<String>) -> Self {
        Self {
            label,
            confidence,
            override_reason,
        }
    }

    /// The model's own answer, confidence rounded to three decimals.
    pub fn baseline(label: SuitabilityLabel, confidence: f64) -> Self {
        Self::new(label, round_to(confidence, 3).clamp(0.0, 1.0), None)
    }

    pub fn overridden(label: SuitabilityLabel, confidence: f64, reason: String) -> Self {
        Self::new(label, confidence, Some(reason))
    }
}

/// A verdict together with the food it was reached for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub verdict: Verdict,
    pub food_match: FoodMatch,
}

use dietwise_core::domain::suitability::value_objects::EvaluateSuitabilityInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A measurement sent either as a JSON number or as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum RawMeasurement {
    Text(String),
    Number(f64),
}

impl RawMeasurement {
    pub fn into_raw(self) -> String {
        match self {
            RawMeasurement::Text(text) => text,
            RawMeasurement::Number(number) => number.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct EvaluateSuitabilityRequest {
    /// Body weight in kg, 30 to 200
    #[serde(default)]
    #[schema(value_type = Option<f64>, example = 70)]
    pub weight: Option<RawMeasurement>,
    /// Body mass index, 12 to 45
    #[serde(default)]
    #[schema(value_type = Option<f64>, example = 22)]
    pub bmi: Option<RawMeasurement>,
    #[serde(default)]
    #[schema(example = "apple")]
    #[validate(length(max = 200, message = "food must be at most 200 characters"))]
    pub food: String,
}

impl From<EvaluateSuitabilityRequest> for EvaluateSuitabilityInput {
    fn from(request: EvaluateSuitabilityRequest) -> Self {
        EvaluateSuitabilityInput::new(
            request.weight.map(RawMeasurement::into_raw).unwrap_or_default(),
            request.bmi.map(RawMeasurement::into_raw).unwrap_or_default(),
            request.food,
        )
    }
}

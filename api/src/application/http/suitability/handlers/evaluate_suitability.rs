use axum::extract::State;
use dietwise_core::domain::{
    classifier::entities::SuitabilityLabel,
    food::entities::FoodCategory,
    suitability::{entities::Assessment, ports::SuitabilityService},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ErrorBody, ValidatedPayload},
            response::Response,
        },
        app_state::AppState,
    },
    suitability::validators::EvaluateSuitabilityRequest,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EvaluateSuitabilityResponse {
    pub result: SuitabilityLabel,
    pub confidence: f64,
    /// Dataset food or category the input resolved to
    pub food: String,
    /// How the food was resolved
    #[schema(example = "category-name")]
    pub source: String,
    pub category: Option<FoodCategory>,
    /// Set when a hard rule replaced the model output
    pub reason: Option<String>,
}

impl From<Assessment> for EvaluateSuitabilityResponse {
    fn from(assessment: Assessment) -> Self {
        Self {
            result: assessment.verdict.label,
            confidence: assessment.verdict.confidence,
            food: assessment.food_match.matched_name,
            source: assessment.food_match.provenance.as_str().to_string(),
            category: assessment.food_match.provenance.category(),
            reason: assessment.verdict.override_reason,
        }
    }
}

#[utoipa::path(
    post,
    path = "/evaluate",
    tag = "suitability",
    summary = "Evaluate food suitability",
    description = "Resolves the food, runs the suitability model and applies the override rules. Accepts JSON or form-encoded bodies.",
    request_body = EvaluateSuitabilityRequest,
    responses(
        (status = 200, body = EvaluateSuitabilityResponse),
        (status = 400, body = ErrorBody, description = "Weight or BMI missing, not numeric or out of range"),
        (status = 404, body = ErrorBody, description = "Food could not be resolved"),
        (status = 500, body = ErrorBody)
    )
)]
pub async fn evaluate_suitability(
    State(state): State<AppState>,
    ValidatedPayload(payload): ValidatedPayload<EvaluateSuitabilityRequest>,
) -> Result<Response<EvaluateSuitabilityResponse>, ApiError> {
    let assessment = state
        .service
        .assess(payload.into())
        .map_err(ApiError::from)?;

    Ok(Response::OK(EvaluateSuitabilityResponse::from(assessment)))
}

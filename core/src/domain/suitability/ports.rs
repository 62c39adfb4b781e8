use crate::domain::{
    common::entities::app_errors::CoreError,
    suitability::{
        entities::{Assessment, Verdict},
        value_objects::EvaluateSuitabilityInput,
    },
};

/// Service trait for the full suitability pipeline
pub trait SuitabilityService: Send + Sync {
    /// Validates, resolves, classifies and applies overrides, stopping at the
    /// first failure.
    fn assess(&self, input: EvaluateSuitabilityInput) -> Result<Assessment, CoreError>;

    fn evaluate(&self, input: EvaluateSuitabilityInput) -> Result<Verdict, CoreError> {
        self.assess(input).map(|assessment| assessment.verdict)
    }
}

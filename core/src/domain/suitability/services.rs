use tracing::info;

use crate::domain::{
    classifier::{ports::SuitabilityClassifier, services::classify},
    common::{entities::app_errors::CoreError, services::Service},
    food::services::resolve,
    suitability::{
        entities::Assessment, policies::apply_overrides, ports::SuitabilityService,
        value_objects::EvaluateSuitabilityInput,
    },
    user_profile::services::validate,
};

impl<M> SuitabilityService for Service<M>
where
    M: SuitabilityClassifier,
{
    fn assess(&self, input: EvaluateSuitabilityInput) -> Result<Assessment, CoreError> {
        // 1. Validate user
        let user = validate(&input.weight, &input.bmi)?;

        // 2. Resolve food
        let food_match = resolve(&self.reference_data, &input.food)?;

        // 3. Model prediction
        let prediction = classify(self.classifier.as_ref(), &user, &food_match.profile)?;

        // 4. Rule overrides
        let verdict = apply_overrides(
            &user,
            &food_match.profile,
            &food_match.provenance,
            prediction.label,
            prediction.probability,
        );

        info!(
            weight = user.weight(),
            bmi = user.bmi(),
            food = %food_match.matched_name,
            source = %food_match.provenance,
            result = %verdict.label,
            reason = ?verdict.override_reason,
            "suitability evaluated"
        );

        Ok(Assessment {
            verdict,
            food_match,
        })
    }
}

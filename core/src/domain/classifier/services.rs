use tracing::warn;

use crate::domain::{
    classifier::{
        entities::{FeatureVector, Prediction},
        ports::SuitabilityClassifier,
    },
    common::entities::app_errors::CoreError,
    food::entities::NutritionProfile,
    user_profile::entities::UserProfile,
};

/// Runs the model for one user and food.
///
/// A missing model degrades to [`Prediction::unknown`] so the rule engine can
/// still decide; any other model failure is returned.
pub fn classify<M>(
    classifier: &M,
    user: &UserProfile,
    profile: &NutritionProfile,
) -> Result<Prediction, CoreError>
where
    M: SuitabilityClassifier + ?Sized,
{
    let features = FeatureVector::new(user, profile);

    match classifier.predict(&features) {
        Ok(prediction) => Ok(prediction),
        Err(CoreError::ClassifierUnavailable) => {
            warn!("suitability classifier unavailable, continuing with rules only");
            Ok(Prediction::unknown())
        }
        Err(e) => Err(e),
    }
}

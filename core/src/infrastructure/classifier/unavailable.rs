use crate::domain::{
    classifier::{
        entities::{FeatureVector, Prediction},
        ports::SuitabilityClassifier,
    },
    common::entities::app_errors::CoreError,
};

/// Stand-in used when no model artifact could be loaded.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableClassifier;

impl SuitabilityClassifier for UnavailableClassifier {
    fn predict(&self, _features: &FeatureVector) -> Result<Prediction, CoreError> {
        Err(CoreError::ClassifierUnavailable)
    }

    fn is_available(&self) -> bool {
        false
    }
}

use crate::domain::{
    classifier::entities::{FeatureVector, Prediction},
    common::entities::app_errors::CoreError,
};

/// Pre-trained binary suitability model.
#[cfg_attr(test, mockall::automock)]
pub trait SuitabilityClassifier: Send + Sync {
    /// Returns `CoreError::ClassifierUnavailable` when no model is loaded.
    fn predict(&self, features: &FeatureVector) -> Result<Prediction, CoreError>;

    fn is_available(&self) -> bool;
}

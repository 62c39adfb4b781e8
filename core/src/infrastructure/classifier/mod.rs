use std::path::Path;

use tracing::{info, warn};

use crate::domain::{
    classifier::{
        entities::{FeatureVector, Prediction},
        ports::SuitabilityClassifier,
    },
    common::entities::app_errors::CoreError,
};

pub mod random_forest;
pub mod unavailable;

pub use random_forest::RandomForestModel;
pub use unavailable::UnavailableClassifier;

/// The classifier picked at startup, depending on whether the artifact loaded.
#[derive(Debug, Clone)]
pub enum ModelClassifier {
    RandomForest(RandomForestModel),
    Unavailable(UnavailableClassifier),
}

impl ModelClassifier {
    /// Loads the artifact at `path`, falling back to [`UnavailableClassifier`].
    pub async fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match RandomForestModel::load(path).await {
            Ok(model) => {
                info!(
                    "Loaded classifier with {} trees from {:?}",
                    model.tree_count(),
                    path
                );
                ModelClassifier::RandomForest(model)
            }
            Err(e) => {
                warn!("Error loading classifier: {}", e);
                ModelClassifier::Unavailable(UnavailableClassifier)
            }
        }
    }
}

impl SuitabilityClassifier for ModelClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<Prediction, CoreError> {
        match self {
            ModelClassifier::RandomForest(model) => model.predict(features),
            ModelClassifier::Unavailable(fallback) => fallback.predict(features),
        }
    }

    fn is_available(&self) -> bool {
        match self {
            ModelClassifier::RandomForest(model) => model.is_available(),
            ModelClassifier::Unavailable(fallback) => fallback.is_available(),
        }
    }
}

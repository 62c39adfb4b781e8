use std::sync::Arc;

use crate::domain::{classifier::ports::SuitabilityClassifier, food::entities::ReferenceData};

/// Request-scoped operations run against this shared, read-only state.
pub struct Service<M>
where
    M: SuitabilityClassifier,
{
    pub(crate) reference_data: Arc<ReferenceData>,
    pub(crate) classifier: Arc<M>,
}

impl<M> Service<M>
where
    M: SuitabilityClassifier,
{
    pub fn new(reference_data: ReferenceData, classifier: M) -> Self {
        Self {
            reference_data: Arc::new(reference_data),
            classifier: Arc::new(classifier),
        }
    }

    pub fn reference_data(&self) -> &ReferenceData {
        &self.reference_data
    }
}

impl<M> Clone for Service<M>
where
    M: SuitabilityClassifier,
{
    fn clone(&self) -> Self {
        Self {
            reference_data: Arc::clone(&self.reference_data),
            classifier: Arc::clone(&self.classifier),
        }
    }
}

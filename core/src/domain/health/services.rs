use crate::domain::{
    classifier::ports::SuitabilityClassifier,
    common::services::Service,
    health::{entities::ReferenceDataHealthStatus, ports::HealthCheckService},
};

impl<M> HealthCheckService for Service<M>
where
    M: SuitabilityClassifier,
{
    fn readiness(&self) -> ReferenceDataHealthStatus {
        ReferenceDataHealthStatus {
            dataset_rows: self.reference_data.dataset.len(),
            categories: self.reference_data.categories.entries().len(),
            classifier_available: self.classifier.is_available(),
        }
    }
}

use crate::domain::health::entities::ReferenceDataHealthStatus;

pub trait HealthCheckService: Send + Sync {
    fn readiness(&self) -> ReferenceDataHealthStatus;
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReferenceDataHealthStatus {
    pub dataset_rows: usize,
    pub categories: usize,
    pub classifier_available: bool,
}

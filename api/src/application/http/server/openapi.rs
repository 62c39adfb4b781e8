use crate::application::http::{
    health::router::HealthApiDoc, suitability::router::SuitabilityApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dietwise API",
        description = "Estimates whether a food suits a person given their weight and BMI."
    ),
    tags(
        (name = "suitability", description = "Food suitability evaluation"),
        (name = "health", description = "Service readiness")
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Full document with every route group, paths relative to the root path.
    pub fn merged() -> utoipa::openapi::OpenApi {
        ApiDoc::openapi()
            .merge_from(SuitabilityApiDoc::openapi())
            .merge_from(HealthApiDoc::openapi())
    }
}

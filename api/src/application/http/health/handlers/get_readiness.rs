use axum::extract::State;
use dietwise_core::domain::health::{
    entities::ReferenceDataHealthStatus, ports::HealthCheckService,
};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Reference data readiness",
    responses(
        (status = 200, body = ReferenceDataHealthStatus)
    )
)]
pub async fn get_readiness(
    State(state): State<AppState>,
) -> Result<Response<ReferenceDataHealthStatus>, ApiError> {
    Ok(Response::OK(state.service.readiness()))
}

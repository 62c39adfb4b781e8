use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::get_readiness::{__path_get_readiness, get_readiness};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_readiness))]
pub struct HealthApiDoc;

pub fn health_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/health", state.args.server.root_path),
        get(get_readiness),
    )
}

use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::evaluate_suitability::{__path_evaluate_suitability, evaluate_suitability};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(evaluate_suitability))]
pub struct SuitabilityApiDoc;

pub fn suitability_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/", state.args.server.root_path),
            post(evaluate_suitability),
        )
        .route(
            &format!("{}/evaluate", state.args.server.root_path),
            post(evaluate_suitability),
        )
}

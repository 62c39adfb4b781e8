use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use dietwise_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

/// Message shown for failures whose details stay in the logs.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    BadRequest { kind: &'static str, message: String },

    #[error("{message}")]
    NotFound { kind: &'static str, message: String },

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub kind: String,
    pub message: String,
}

impl ApiError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            kind: "invalid_request",
            message: message.into(),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(_) => ApiError::BadRequest {
                kind: error.kind(),
                message: error.to_string(),
            },
            CoreError::FoodNotFound => ApiError::NotFound {
                kind: error.kind(),
                message: error.to_string(),
            },
            CoreError::ClassifierUnavailable
            | CoreError::ReferenceData(_)
            | CoreError::InternalServerError => ApiError::InternalServerError(error.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest { kind, message } => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    kind: kind.to_string(),
                    message,
                },
            ),
            ApiError::NotFound { kind, message } => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    kind: kind.to_string(),
                    message,
                },
            ),
            ApiError::InternalServerError(detail) => {
                tracing::error!("Request failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        kind: "internal_error".to_string(),
                        message: GENERIC_ERROR_MESSAGE.to_string(),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Request body read as JSON when the content type says so, as a
/// url-encoded form otherwise, then validated.
pub struct ValidatedPayload<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedPayload<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"));

        let payload = if is_json {
            let Json(payload) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| ApiError::invalid_request(e.body_text()))?;
            payload
        } else {
            let Form(payload) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| ApiError::invalid_request(e.body_text()))?;
            payload
        };

        payload
            .validate()
            .map_err(|e| ApiError::invalid_request(e.to_string()))?;

        Ok(ValidatedPayload(payload))
    }
}

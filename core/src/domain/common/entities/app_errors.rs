use thiserror::Error;

use crate::domain::user_profile::entities::ValidationError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Food not found. Try 'Apple', 'Rice', etc.")]
    FoodNotFound,

    #[error("Suitability classifier is unavailable")]
    ClassifierUnavailable,

    #[error("Failed to load reference data: {0}")]
    ReferenceData(String),

    #[error("Something went wrong.")]
    InternalServerError,
}

impl CoreError {
    /// Stable machine-readable identifier, used as the `kind` of error payloads.
    pub fn kind(&self) -> &'static str {
        match self {
            CoreError::Validation(ValidationError::NotNumeric) => "not_numeric",
            CoreError::Validation(ValidationError::OutOfRange { .. }) => "out_of_range",
            CoreError::FoodNotFound => "food_not_found",
            CoreError::ClassifierUnavailable => "classifier_unavailable",
            CoreError::ReferenceData(_) => "reference_data",
            CoreError::InternalServerError => "internal_error",
        }
    }
}

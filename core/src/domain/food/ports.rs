use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food::entities::{FoodDataset, FoodMatch},
};

/// Source of the reference food dataset, read once at startup.
pub trait FoodDatasetRepository: Send + Sync {
    fn load(&self) -> impl Future<Output = Result<FoodDataset, CoreError>> + Send;
}

/// Service trait for turning free-text food names into nutrition profiles
pub trait FoodService: Send + Sync {
    fn resolve_food(&self, food_name: &str) -> Result<FoodMatch, CoreError>;
}

use serde::Deserialize;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food::entities::{FoodRecord, NutritionProfile},
};

/// Columns every dataset file must provide.
pub const REQUIRED_COLUMNS: [&str; 5] = ["Food", "Calories", "Protein", "Fat", "Carbohydrates"];

/// One CSV row; extra columns are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct FoodRow {
    #[serde(rename = "Food")]
    pub food: String,
    #[serde(rename = "Calories")]
    pub calories: f64,
    #[serde(rename = "Protein")]
    pub protein: f64,
    #[serde(rename = "Fat")]
    pub fat: f64,
    #[serde(rename = "Carbohydrates")]
    pub carbohydrates: f64,
}

impl TryFrom<FoodRow> for FoodRecord {
    type Error = CoreError;

    fn try_from(row: FoodRow) -> Result<Self, Self::Error> {
        let profile = NutritionProfile::new(row.calories, row.protein, row.fat, row.carbohydrates);
        if !profile.is_valid() {
            return Err(CoreError::ReferenceData(format!(
                "invalid nutrition values for '{}'",
                row.food
            )));
        }

        Ok(FoodRecord::new(&row.food, profile))
    }
}

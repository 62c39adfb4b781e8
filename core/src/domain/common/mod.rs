use std::cmp::Ordering;

pub mod entities;
pub mod services;

pub const DEFAULT_DATASET_PATH: &str = "data/dataset_B_cleaned.csv";
pub const DEFAULT_MODEL_PATH: &str = "model/random_forest_food_suitability_model_v1.json";
pub const DEFAULT_FUZZY_CUTOFF: f64 = 0.6;

#[derive(Clone, Debug)]
pub struct DietwiseConfig {
    pub reference_data: ReferenceDataConfig,
}

#[derive(Clone, Debug)]
pub struct ReferenceDataConfig {
    pub dataset_path: String,
    pub model_path: String,
    pub fuzzy_cutoff: f64,
}

impl Default for ReferenceDataConfig {
    fn default() -> Self {
        Self {
            dataset_path: DEFAULT_DATASET_PATH.to_string(),
            model_path: DEFAULT_MODEL_PATH.to_string(),
            fuzzy_cutoff: DEFAULT_FUZZY_CUTOFF,
        }
    }
}

/// Rounds `value` to the given number of decimal places, judged on its exact
/// binary value. Exact halves go to the even digit.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let scaled = value * factor;

    if scaled - scaled.floor() != 0.5 {
        return scaled.round() / factor;
    }

    // The product landed on a half; its rounding error tells which side the
    // exact value is on.
    let error = value.mul_add(factor, -scaled);
    let rounded = match error.partial_cmp(&0.0) {
        Some(Ordering::Greater) => scaled.ceil(),
        Some(Ordering::Less) => scaled.floor(),
        _ => scaled.round_ties_even(),
    };
    rounded / factor
}

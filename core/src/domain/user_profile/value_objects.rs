use std::ops::RangeInclusive;

/// Accepted body weight in kilograms, bounds inclusive.
pub const WEIGHT_RANGE_KG: RangeInclusive<f64> = 30.0..=200.0;

/// Accepted body mass index, bounds inclusive.
pub const BMI_RANGE: RangeInclusive<f64> = 12.0..=45.0;

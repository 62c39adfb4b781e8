use crate::domain::user_profile::{
    entities::{ProfileField, UserProfile, ValidationError},
    value_objects::{BMI_RANGE, WEIGHT_RANGE_KG},
};

/// Parses raw weight and BMI values into a [`UserProfile`].
///
/// Both values must parse as numbers before either range is checked, and the
/// weight range is checked before the BMI range.
pub fn validate(weight_raw: &str, bmi_raw: &str) -> Result<UserProfile, ValidationError> {
    let weight = parse_measurement(weight_raw)?;
    let bmi = parse_measurement(bmi_raw)?;

    if !WEIGHT_RANGE_KG.contains(&weight) {
        return Err(ValidationError::OutOfRange {
            field: ProfileField::Weight,
        });
    }

    if !BMI_RANGE.contains(&bmi) {
        return Err(ValidationError::OutOfRange {
            field: ProfileField::Bmi,
        });
    }

    Ok(UserProfile::new(weight, bmi))
}

fn parse_measurement(raw: &str) -> Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::NotNumeric)
}

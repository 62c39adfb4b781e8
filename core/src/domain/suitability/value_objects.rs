#[derive(Debug, Clone, Default)]
pub struct EvaluateSuitabilityInput {
    pub weight: String,
    pub bmi: String,
    pub food: String,
}

impl EvaluateSuitabilityInput {
    pub fn new(weight: impl Into<String>, bmi: impl Into<String>, food: impl Into<String>) -> Self {
        Self {
            weight: weight.into(),
            bmi: bmi.into(),
            food: food.into(),
        }
    }
}

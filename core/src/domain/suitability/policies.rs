use tracing::debug;

use crate::domain::{
    classifier::entities::SuitabilityLabel,
    food::entities::{FoodCategory, NutritionProfile, Provenance},
    suitability::entities::Verdict,
    user_profile::entities::UserProfile,
};

pub const HIGH_RISK_CATEGORIES: [FoodCategory; 3] = [
    FoodCategory::Fried,
    FoodCategory::FastFood,
    FoodCategory::Sweet,
];

pub const ALWAYS_SAFE_CATEGORIES: [FoodCategory; 2] =
    [FoodCategory::Fruit, FoodCategory::Vegetable];

pub const OBESE_BMI: f64 = 30.0;
pub const RISKY_FAT_GRAMS: f64 = 15.0;
pub const RISKY_CALORIES: f64 = 400.0;
pub const UNDERWEIGHT_BMI: f64 = 18.5;
pub const LOW_CALORIES: f64 = 100.0;

pub const BMI_RISK_CONFIDENCE: f64 = 0.95;
pub const CATEGORY_CONFIDENCE: f64 = 1.0;

pub const BMI_RISK_REASON: &str = "High Calorie/Fat food is risky for BMI > 30";

#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub user: &'a UserProfile,
    pub profile: &'a NutritionProfile,
    pub provenance: &'a Provenance,
}

/// Hard rules layered over the model output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideRule {
    BmiRisk,
    UnderweightLowCalorie,
    HighRiskCategory,
    AlwaysSafeCategory,
}

impl OverrideRule {
    /// Evaluation order. A rule that fires replaces the whole verdict, so
    /// later rules take precedence.
    pub const ORDERED: [OverrideRule; 4] = [
        OverrideRule::BmiRisk,
        OverrideRule::UnderweightLowCalorie,
        OverrideRule::HighRiskCategory,
        OverrideRule::AlwaysSafeCategory,
    ];

    /// Returns the replacement verdict when the rule fires.
    pub fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Verdict> {
        match self {
            OverrideRule::BmiRisk => {
                let risky_food =
                    ctx.profile.fat > RISKY_FAT_GRAMS || ctx.profile.calories > RISKY_CALORIES;
                (ctx.user.bmi() > OBESE_BMI && risky_food).then(|| {
                    Verdict::overridden(
                        SuitabilityLabel::NotSuitable,
                        BMI_RISK_CONFIDENCE,
                        BMI_RISK_REASON.to_string(),
                    )
                })
            }
            OverrideRule::UnderweightLowCalorie => {
                // Detected only; whether to warn here is still undecided.
                if ctx.user.bmi() < UNDERWEIGHT_BMI && ctx.profile.calories < LOW_CALORIES {
                    debug!(
                        bmi = ctx.user.bmi(),
                        calories = ctx.profile.calories,
                        "underweight user with low-calorie food, no override applied"
                    );
                }
                None
            }
            OverrideRule::HighRiskCategory => ctx
                .provenance
                .category()
                .filter(|category| HIGH_RISK_CATEGORIES.contains(category))
                .map(|category| {
                    Verdict::overridden(
                        SuitabilityLabel::NotSuitable,
                        CATEGORY_CONFIDENCE,
                        format!("Category '{}' is generally unhealthy", category),
                    )
                }),
            OverrideRule::AlwaysSafeCategory => ctx
                .provenance
                .category()
                .filter(|category| ALWAYS_SAFE_CATEGORIES.contains(category))
                .map(|category| {
                    Verdict::overridden(
                        SuitabilityLabel::Suitable,
                        CATEGORY_CONFIDENCE,
                        format!("Category '{}' is generally healthy", category),
                    )
                }),
        }
    }
}

/// Combines the model output with the override rules into the final verdict.
pub fn apply_overrides(
    user: &UserProfile,
    profile: &NutritionProfile,
    provenance: &Provenance,
    ml_label: SuitabilityLabel,
    ml_confidence: f64,
) -> Verdict {
    let ctx = RuleContext {
        user,
        profile,
        provenance,
    };

    OverrideRule::ORDERED
        .iter()
        .fold(Verdict::baseline(ml_label, ml_confidence), |verdict, rule| {
            rule.evaluate(&ctx).unwrap_or(verdict)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user_profile::services::validate;

    const LEAN: NutritionProfile = NutritionProfile::new(120.0, 10.0, 3.0, 12.0);
    const RICH: NutritionProfile = NutritionProfile::new(450.0, 25.0, 20.0, 15.0);

    fn user(bmi: &str) -> UserProfile {
        validate("70", bmi).unwrap()
    }

    #[test]
    fn test_baseline_keeps_model_output_rounded() {
        let verdict = apply_overrides(
            &user("22"),
            &LEAN,
            &Provenance::Dataset,
            SuitabilityLabel::Suitable,
            0.87654,
        );

        assert_eq!(
            verdict,
            Verdict::new(SuitabilityLabel::Suitable, 0.877, None)
        );
    }

    #[test]
    fn test_baseline_rounds_exact_halves_to_even() {
        // mean of [0.75, 0.875] from a two-tree forest
        let verdict = apply_overrides(
            &user("22"),
            &LEAN,
            &Provenance::Dataset,
            SuitabilityLabel::Suitable,
            0.8125,
        );

        assert_eq!(verdict.confidence, 0.812);
    }

    #[test]
    fn test_baseline_passes_unknown_through() {
        let verdict = apply_overrides(
            &user("22"),
            &LEAN,
            &Provenance::Dataset,
            SuitabilityLabel::Unknown,
            0.0,
        );

        assert_eq!(verdict, Verdict::new(SuitabilityLabel::Unknown, 0.0, None));
    }

    #[test]
    fn test_bmi_risk_on_fat() {
        let profile = NutritionProfile::new(200.0, 10.0, 15.5, 10.0);
        let verdict = apply_overrides(
            &user("32"),
            &profile,
            &Provenance::Dataset,
            SuitabilityLabel::Suitable,
            0.9,
        );

        assert_eq!(verdict.label, SuitabilityLabel::NotSuitable);
        assert_eq!(verdict.confidence, 0.95);
        assert_eq!(verdict.override_reason.as_deref(), Some(BMI_RISK_REASON));
    }

    #[test]
    fn test_bmi_risk_on_calories() {
        let profile = NutritionProfile::new(401.0, 10.0, 5.0, 10.0);
        let verdict = apply_overrides(
            &user("30.5"),
            &profile,
            &Provenance::DatasetFuzzy,
            SuitabilityLabel::Suitable,
            0.9,
        );

        assert_eq!(verdict.confidence, 0.95);
    }

    #[test]
    fn test_bmi_risk_thresholds_are_strict() {
        let borderline = NutritionProfile::new(400.0, 10.0, 15.0, 10.0);
        let verdict = apply_overrides(
            &user("31"),
            &borderline,
            &Provenance::Dataset,
            SuitabilityLabel::Suitable,
            0.7,
        );
        assert_eq!(verdict.override_reason, None);

        let verdict = apply_overrides(
            &user("30"),
            &RICH,
            &Provenance::Dataset,
            SuitabilityLabel::Suitable,
            0.7,
        );
        assert_eq!(verdict.override_reason, None);
    }

    #[test]
    fn test_underweight_low_calorie_is_a_no_op() {
        let profile = NutritionProfile::new(40.0, 1.0, 0.1, 9.0);
        let verdict = apply_overrides(
            &user("16"),
            &profile,
            &Provenance::Dataset,
            SuitabilityLabel::NotSuitable,
            0.61,
        );

        assert_eq!(
            verdict,
            Verdict::new(SuitabilityLabel::NotSuitable, 0.61, None)
        );
    }

    #[test]
    fn test_high_risk_category_overrides_bmi_rule() {
        let verdict = apply_overrides(
            &user("35"),
            &FoodCategory::Fried.default_profile(),
            &Provenance::CategoryKeyword(FoodCategory::Fried),
            SuitabilityLabel::Suitable,
            0.99,
        );

        assert_eq!(verdict.label, SuitabilityLabel::NotSuitable);
        assert_eq!(verdict.confidence, 1.0);
        assert_eq!(
            verdict.override_reason.as_deref(),
            Some("Category 'fried' is generally unhealthy")
        );
    }

    #[test]
    fn test_always_safe_category_overrides_bmi_rule() {
        // Category profile fed alongside a risky BMI still ends up safe
        let verdict = apply_overrides(
            &user("40"),
            &RICH,
            &Provenance::CategoryName(FoodCategory::Vegetable),
            SuitabilityLabel::NotSuitable,
            0.8,
        );

        assert_eq!(verdict.label, SuitabilityLabel::Suitable);
        assert_eq!(verdict.confidence, 1.0);
        assert_eq!(
            verdict.override_reason.as_deref(),
            Some("Category 'vegetable' is generally healthy")
        );
    }

    #[test]
    fn test_high_risk_categories_always_not_suitable() {
        for category in HIGH_RISK_CATEGORIES {
            for provenance in [
                Provenance::CategoryName(category),
                Provenance::CategoryKeyword(category),
            ] {
                for (label, confidence) in [
                    (SuitabilityLabel::Suitable, 0.99),
                    (SuitabilityLabel::NotSuitable, 0.51),
                    (SuitabilityLabel::Unknown, 0.0),
                ] {
                    let verdict = apply_overrides(
                        &user("22"),
                        &category.default_profile(),
                        &provenance,
                        label,
                        confidence,
                    );
                    assert_eq!(verdict.label, SuitabilityLabel::NotSuitable);
                    assert_eq!(verdict.confidence, 1.0);
                }
            }
        }
    }

    #[test]
    fn test_always_safe_categories_always_suitable() {
        for category in ALWAYS_SAFE_CATEGORIES {
            for bmi in ["13", "22", "44"] {
                let verdict = apply_overrides(
                    &user(bmi),
                    &category.default_profile(),
                    &Provenance::CategoryKeyword(category),
                    SuitabilityLabel::NotSuitable,
                    0.97,
                );
                assert_eq!(verdict.label, SuitabilityLabel::Suitable);
                assert_eq!(verdict.confidence, 1.0);
            }
        }
    }

    #[test]
    fn test_neutral_category_keeps_model_output() {
        let verdict = apply_overrides(
            &user("22"),
            &FoodCategory::Grain.default_profile(),
            &Provenance::CategoryName(FoodCategory::Grain),
            SuitabilityLabel::Suitable,
            0.66,
        );

        assert_eq!(verdict, Verdict::new(SuitabilityLabel::Suitable, 0.66, None));
    }

    #[test]
    fn test_unknown_provenance_has_no_category_rules() {
        let verdict = apply_overrides(
            &user("22"),
            &LEAN,
            &Provenance::Unknown,
            SuitabilityLabel::NotSuitable,
            0.5,
        );

        assert_eq!(verdict.override_reason, None);
    }
}

use tracing::debug;

use crate::domain::{
    classifier::ports::SuitabilityClassifier,
    common::{entities::app_errors::CoreError, services::Service},
    food::{
        entities::{FoodMatch, FoodRecord, Provenance, ReferenceData},
        ports::FoodService,
        value_objects::{normalize_food_name, similarity_ratio},
    },
};

/// Resolution strategies, from the most precise to the most lossy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionTier {
    ExactDataset,
    ExactCategoryKeyword,
    FuzzyDataset,
    LooseCategoryKeyword,
}

impl ResolutionTier {
    pub const ORDERED: [ResolutionTier; 4] = [
        ResolutionTier::ExactDataset,
        ResolutionTier::ExactCategoryKeyword,
        ResolutionTier::FuzzyDataset,
        ResolutionTier::LooseCategoryKeyword,
    ];

    /// Tries this tier alone against a normalized food name.
    pub fn attempt(&self, name: &str, reference: &ReferenceData) -> Option<FoodMatch> {
        match self {
            ResolutionTier::ExactDataset => reference
                .dataset
                .find_exact(name)
                .map(|record| FoodMatch::new(record.profile, Provenance::Dataset, name.to_string())),
            ResolutionTier::ExactCategoryKeyword => {
                reference.categories.exact_keyword(name).map(|entry| {
                    FoodMatch::new(
                        entry.profile,
                        Provenance::CategoryName(entry.category),
                        entry.category.as_str().to_string(),
                    )
                })
            }
            ResolutionTier::FuzzyDataset => {
                best_fuzzy_match(name, reference.dataset.records(), reference.fuzzy_cutoff).map(
                    |record| {
                        FoodMatch::new(record.profile, Provenance::DatasetFuzzy, record.name.clone())
                    },
                )
            }
            ResolutionTier::LooseCategoryKeyword => {
                reference.categories.contained_keyword(name).map(|entry| {
                    FoodMatch::new(
                        entry.profile,
                        Provenance::CategoryKeyword(entry.category),
                        entry.category.as_str().to_string(),
                    )
                })
            }
        }
    }
}

/// Resolves a free-text food name; the first tier that matches wins.
pub fn resolve(reference: &ReferenceData, food_name: &str) -> Result<FoodMatch, CoreError> {
    let name = normalize_food_name(food_name);
    if name.is_empty() {
        return Err(CoreError::FoodNotFound);
    }

    ResolutionTier::ORDERED
        .iter()
        .find_map(|tier| {
            let food_match = tier.attempt(&name, reference)?;
            debug!(
                food = %name,
                tier = ?tier,
                matched = %food_match.matched_name,
                "food resolved"
            );
            Some(food_match)
        })
        .ok_or(CoreError::FoodNotFound)
}

/// Highest-scoring record at or above `cutoff`.
///
/// Equal scores go to the lexically greatest name, and a repeated name keeps
/// its first row.
pub fn best_fuzzy_match<'a>(
    name: &str,
    records: &'a [FoodRecord],
    cutoff: f64,
) -> Option<&'a FoodRecord> {
    let mut best: Option<(f64, &FoodRecord)> = None;

    for record in records {
        let score = similarity_ratio(&record.name, name);
        if score < cutoff {
            continue;
        }
        match best {
            Some((best_score, current))
                if best_score > score
                    || (best_score == score && current.name >= record.name) => {}
            _ => best = Some((score, record)),
        }
    }

    best.map(|(_, record)| record)
}

impl<M> FoodService for Service<M>
where
    M: SuitabilityClassifier,
{
    fn resolve_food(&self, food_name: &str) -> Result<FoodMatch, CoreError> {
        resolve(&self.reference_data, food_name)
    }
}

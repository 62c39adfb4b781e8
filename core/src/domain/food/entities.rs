use std::{collections::HashMap, fmt};

use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

use crate::domain::{
    common::entities::app_errors::CoreError, food::value_objects::normalize_food_name,
};

/// Per-serving macronutrients. All values are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionProfile {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl NutritionProfile {
    pub const fn new(calories: f64, protein: f64, fat: f64, carbs: f64) -> Self {
        Self {
            calories,
            protein,
            fat,
            carbs,
        }
    }

    pub fn is_valid(&self) -> bool {
        [self.calories, self.protein, self.fat, self.carbs]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    Fruit,
    Vegetable,
    Grain,
    Dairy,
    Meat,
    Fried,
    FastFood,
    Sweet,
    Beverage,
}

impl FoodCategory {
    /// Enumeration order used by every keyword lookup.
    pub const ALL: [FoodCategory; 9] = [
        FoodCategory::Fruit,
        FoodCategory::Vegetable,
        FoodCategory::Grain,
        FoodCategory::Dairy,
        FoodCategory::Meat,
        FoodCategory::Fried,
        FoodCategory::FastFood,
        FoodCategory::Sweet,
        FoodCategory::Beverage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodCategory::Fruit => "fruit",
            FoodCategory::Vegetable => "vegetable",
            FoodCategory::Grain => "grain",
            FoodCategory::Dairy => "dairy",
            FoodCategory::Meat => "meat",
            FoodCategory::Fried => "fried",
            FoodCategory::FastFood => "fast_food",
            FoodCategory::Sweet => "sweet",
            FoodCategory::Beverage => "beverage",
        }
    }

    pub fn default_keywords(&self) -> &'static [&'static str] {
        match self {
            FoodCategory::Fruit => &["apple", "banana", "orange", "mango"],
            FoodCategory::Vegetable => &["spinach", "carrot", "broccoli"],
            FoodCategory::Grain => &["rice", "bread", "roti", "chapati", "oats", "pasta"],
            FoodCategory::Dairy => &["milk", "cheese", "curd", "paneer", "butter"],
            FoodCategory::Meat => &["chicken", "meat", "beef", "fish", "egg"],
            FoodCategory::Fried => &["fried", "pakora", "samosa"],
            FoodCategory::FastFood => &["pizza", "burger", "fries"],
            FoodCategory::Sweet => &["cake", "sweet", "chocolate", "ice cream"],
            FoodCategory::Beverage => &["juice", "cola", "soda", "drink"],
        }
    }

    /// Typical serving used when a food is only known by its category.
    pub fn default_profile(&self) -> NutritionProfile {
        match self {
            FoodCategory::Fruit => NutritionProfile::new(80.0, 1.0, 0.3, 20.0),
            FoodCategory::Vegetable => NutritionProfile::new(50.0, 2.0, 0.2, 10.0),
            FoodCategory::Grain => NutritionProfile::new(180.0, 5.0, 1.0, 38.0),
            FoodCategory::Dairy => NutritionProfile::new(150.0, 8.0, 8.0, 12.0),
            FoodCategory::Meat => NutritionProfile::new(250.0, 22.0, 18.0, 0.0),
            FoodCategory::Fried => NutritionProfile::new(350.0, 18.0, 22.0, 20.0),
            FoodCategory::FastFood => NutritionProfile::new(320.0, 14.0, 18.0, 30.0),
            FoodCategory::Sweet => NutritionProfile::new(400.0, 4.0, 20.0, 50.0),
            FoodCategory::Beverage => NutritionProfile::new(120.0, 1.0, 0.0, 28.0),
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a resolved nutrition profile came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Dataset,
    CategoryName(FoodCategory),
    DatasetFuzzy,
    CategoryKeyword(FoodCategory),
    Unknown,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Dataset => "dataset",
            Provenance::CategoryName(_) => "category-name",
            Provenance::DatasetFuzzy => "dataset-fuzzy",
            Provenance::CategoryKeyword(_) => "category-keyword",
            Provenance::Unknown => "unknown",
        }
    }

    /// Category carried by category-table matches; dataset rows have none.
    pub fn category(&self) -> Option<FoodCategory> {
        match self {
            Provenance::CategoryName(category) | Provenance::CategoryKeyword(category) => {
                Some(*category)
            }
            Provenance::Dataset | Provenance::DatasetFuzzy | Provenance::Unknown => None,
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Provenance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodMatch {
    pub profile: NutritionProfile,
    pub provenance: Provenance,
    pub matched_name: String,
}

impl FoodMatch {
    pub fn new(profile: NutritionProfile, provenance: Provenance, matched_name: String) -> Self {
        Self {
            profile,
            provenance,
            matched_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FoodRecord {
    pub name: String,
    pub profile: NutritionProfile,
}

impl FoodRecord {
    pub fn new(name: &str, profile: NutritionProfile) -> Self {
        Self {
            name: normalize_food_name(name),
            profile,
        }
    }
}

/// Food rows in file order, with an index on the first occurrence of each name.
#[derive(Debug, Clone, Default)]
pub struct FoodDataset {
    records: Vec<FoodRecord>,
    index: HashMap<String, usize>,
}

impl FoodDataset {
    pub fn new(records: Vec<FoodRecord>) -> Self {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            index.entry(record.name.clone()).or_insert(position);
        }

        Self { records, index }
    }

    /// Looks up an already normalized name.
    pub fn find_exact(&self, name: &str) -> Option<&FoodRecord> {
        self.index.get(name).map(|&position| &self.records[position])
    }

    pub fn records(&self) -> &[FoodRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryEntry {
    pub category: FoodCategory,
    pub keywords: Vec<String>,
    pub profile: NutritionProfile,
}

impl CategoryEntry {
    pub fn new(category: FoodCategory, keywords: &[&str], profile: NutritionProfile) -> Self {
        Self {
            category,
            keywords: keywords.iter().map(|k| normalize_food_name(k)).collect(),
            profile,
        }
    }
}

/// Keyword lists and fallback profiles, checked in entry order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTable {
    entries: Vec<CategoryEntry>,
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::new(
            FoodCategory::ALL
                .iter()
                .map(|c| CategoryEntry::new(*c, c.default_keywords(), c.default_profile()))
                .collect(),
        )
    }
}

impl CategoryTable {
    pub fn new(entries: Vec<CategoryEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CategoryEntry] {
        &self.entries
    }

    /// First category having a keyword equal to `name`.
    pub fn exact_keyword(&self, name: &str) -> Option<&CategoryEntry> {
        self.entries
            .iter()
            .find(|entry| entry.keywords.iter().any(|k| k == name))
    }

    /// First category having a keyword contained in `name`.
    pub fn contained_keyword(&self, name: &str) -> Option<&CategoryEntry> {
        self.entries
            .iter()
            .find(|entry| entry.keywords.iter().any(|k| name.contains(k.as_str())))
    }
}

/// Everything food resolution reads. Built once at startup, never mutated.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub dataset: FoodDataset,
    pub categories: CategoryTable,
    pub fuzzy_cutoff: f64,
}

impl ReferenceData {
    pub fn new(
        dataset: FoodDataset,
        categories: CategoryTable,
        fuzzy_cutoff: f64,
    ) -> Result<Self, CoreError> {
        if !(0.0..=1.0).contains(&fuzzy_cutoff) {
            return Err(CoreError::ReferenceData(format!(
                "fuzzy cutoff must be between 0 and 1, got {}",
                fuzzy_cutoff
            )));
        }

        Ok(Self {
            dataset,
            categories,
            fuzzy_cutoff,
        })
    }
}

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        food::{
            entities::{FoodDataset, FoodRecord},
            ports::FoodDatasetRepository,
        },
    },
    infrastructure::dataset::mappers::{FoodRow, REQUIRED_COLUMNS},
};

#[derive(Debug, Clone)]
pub struct CsvFoodDatasetRepository {
    path: PathBuf,
}

impl CsvFoodDatasetRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FoodDatasetRepository for CsvFoodDatasetRepository {
    async fn load(&self) -> Result<FoodDataset, CoreError> {
        debug!("Loading food dataset from {:?}", self.path);

        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            CoreError::ReferenceData(format!("cannot read {}: {}", self.path.display(), e))
        })?;

        let dataset = parse_food_dataset(&content)?;
        info!("Loaded {} foods from {:?}", dataset.len(), self.path);

        Ok(dataset)
    }
}

/// Parses dataset CSV content. Unusable rows are skipped with a warning.
pub fn parse_food_dataset(content: &str) -> Result<FoodDataset, CoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| CoreError::ReferenceData(format!("invalid dataset header: {}", e)))?;

    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|h| h == **column))
    {
        return Err(CoreError::ReferenceData(format!(
            "dataset is missing the '{}' column",
            missing
        )));
    }

    let mut records = Vec::new();
    for (line, result) in reader.deserialize::<FoodRow>().enumerate() {
        let record = result
            .map_err(|e| CoreError::ReferenceData(e.to_string()))
            .and_then(FoodRecord::try_from);

        match record {
            Ok(record) => records.push(record),
            Err(e) => warn!("Skipping dataset row {}: {}", line + 2, e),
        }
    }

    Ok(FoodDataset::new(records))
}

use tracing::error;

use crate::{
    domain::{
        common::{DietwiseConfig, entities::app_errors::CoreError, services::Service},
        food::{
            entities::{CategoryTable, FoodDataset, ReferenceData},
            ports::FoodDatasetRepository,
        },
    },
    infrastructure::{classifier::ModelClassifier, dataset::CsvFoodDatasetRepository},
};

pub type DietwiseService = Service<ModelClassifier>;

/// Loads the reference data and classifier artifact once and wires the service.
///
/// A missing dataset leaves only the category tiers available and a missing
/// artifact leaves only the override rules; neither stops the service.
pub async fn create_service(config: DietwiseConfig) -> Result<DietwiseService, CoreError> {
    let reference = config.reference_data;

    let dataset = match CsvFoodDatasetRepository::new(&reference.dataset_path)
        .load()
        .await
    {
        Ok(dataset) => dataset,
        Err(e) => {
            error!("Error loading dataset: {}", e);
            FoodDataset::default()
        }
    };

    let classifier = ModelClassifier::load(&reference.model_path).await;

    let reference_data =
        ReferenceData::new(dataset, CategoryTable::default(), reference.fuzzy_cutoff)?;

    Ok(Service::new(reference_data, classifier))
}

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::domain::{
    classifier::{
        entities::{FEATURE_COUNT, FeatureVector, Prediction, SuitabilityLabel},
        ports::SuitabilityClassifier,
    },
    common::entities::app_errors::CoreError,
};

/// Serialized forest as exported from the training pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct RandomForestArtifact {
    pub feature_names: Vec<String>,
    pub classes: Vec<i64>,
    pub trees: Vec<TreeArtifact>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreeArtifact {
    pub nodes: Vec<TreeNode>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// Samples with `features[feature] <= threshold` go left.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Per-class sample weights, in `classes` order.
    Leaf { value: Vec<f64> },
}

/// A validated forest; every tree walk is guaranteed to end on a leaf.
#[derive(Debug, Clone)]
pub struct RandomForestModel {
    classes: Vec<i64>,
    trees: Vec<TreeArtifact>,
}

impl RandomForestModel {
    pub fn from_json(content: &str) -> Result<Self, CoreError> {
        let artifact: RandomForestArtifact = serde_json::from_str(content).map_err(|e| {
            CoreError::ReferenceData(format!("invalid classifier artifact: {}", e))
        })?;

        Self::try_from(artifact)
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        debug!("Loading classifier artifact from {:?}", path);

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            CoreError::ReferenceData(format!("cannot read {}: {}", path.display(), e))
        })?;

        Self::from_json(&content)
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    /// Mean of the normalized leaf distributions over all trees.
    pub fn predict_proba(&self, features: &FeatureVector) -> Vec<f64> {
        let mut totals = vec![0.0; self.classes.len()];

        for tree in &self.trees {
            let value = leaf_value(tree, features);
            let weight: f64 = value.iter().sum();
            for (total, v) in totals.iter_mut().zip(value) {
                *total += v / weight;
            }
        }

        let tree_count = self.trees.len() as f64;
        totals.iter().map(|total| total / tree_count).collect()
    }
}

fn leaf_value<'a>(tree: &'a TreeArtifact, features: &FeatureVector) -> &'a [f64] {
    let values = features.values();
    let mut index = 0;
    loop {
        match &tree.nodes[index] {
            TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                index = if values[*feature] <= *threshold {
                    *left
                } else {
                    *right
                };
            }
            TreeNode::Leaf { value } => return value,
        }
    }
}

impl TryFrom<RandomForestArtifact> for RandomForestModel {
    type Error = CoreError;

    fn try_from(artifact: RandomForestArtifact) -> Result<Self, Self::Error> {
        if artifact.feature_names != FeatureVector::FEATURE_NAMES {
            return Err(CoreError::ReferenceData(format!(
                "classifier expects features {:?}, artifact has {:?}",
                FeatureVector::FEATURE_NAMES,
                artifact.feature_names
            )));
        }

        if artifact.classes.len() != 2 {
            return Err(CoreError::ReferenceData(format!(
                "classifier must be binary, artifact has {} classes",
                artifact.classes.len()
            )));
        }

        if artifact.trees.is_empty() {
            return Err(CoreError::ReferenceData(
                "classifier artifact has no trees".to_string(),
            ));
        }

        for (tree_index, tree) in artifact.trees.iter().enumerate() {
            validate_tree(tree, artifact.classes.len()).map_err(|reason| {
                CoreError::ReferenceData(format!("tree {}: {}", tree_index, reason))
            })?;
        }

        Ok(Self {
            classes: artifact.classes,
            trees: artifact.trees,
        })
    }
}

// Children must point forward so that every walk terminates.
fn validate_tree(tree: &TreeArtifact, class_count: usize) -> Result<(), String> {
    if tree.nodes.is_empty() {
        return Err("no nodes".to_string());
    }

    for (index, node) in tree.nodes.iter().enumerate() {
        match node {
            TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                if *feature >= FEATURE_COUNT {
                    return Err(format!("node {} splits on unknown feature {}", index, feature));
                }
                if !threshold.is_finite() {
                    return Err(format!("node {} has a non-finite threshold", index));
                }
                for child in [*left, *right] {
                    if child <= index || child >= tree.nodes.len() {
                        return Err(format!("node {} has invalid child {}", index, child));
                    }
                }
            }
            TreeNode::Leaf { value } => {
                if value.len() != class_count {
                    return Err(format!(
                        "leaf {} has {} values for {} classes",
                        index,
                        value.len(),
                        class_count
                    ));
                }
                if value.iter().any(|v| !v.is_finite() || *v < 0.0)
                    || value.iter().sum::<f64>() <= 0.0
                {
                    return Err(format!("leaf {} has invalid weights", index));
                }
            }
        }
    }

    Ok(())
}

impl SuitabilityClassifier for RandomForestModel {
    fn predict(&self, features: &FeatureVector) -> Result<Prediction, CoreError> {
        let proba = self.predict_proba(features);

        // First maximum wins, matching argmax semantics.
        let (best, probability) = proba
            .iter()
            .copied()
            .enumerate()
            .fold((0, f64::MIN), |(best, best_p), (i, p)| {
                if p > best_p { (i, p) } else { (best, best_p) }
            });

        Ok(Prediction::new(
            SuitabilityLabel::from_class(self.classes[best]),
            probability,
        ))
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::{food::entities::NutritionProfile, user_profile::services::validate};

    /// Two stumps on calories and fat; low values lean towards class 1.
    pub(crate) const FOREST_JSON: &str = r#"{
        "feature_names": ["Weight", "BMI", "Calories", "Protein", "Fat", "Carbohydrates"],
        "classes": [0, 1],
        "trees": [
            {"nodes": [
                {"feature": 2, "threshold": 300.0, "left": 1, "right": 2},
                {"value": [1.0, 3.0]},
                {"value": [4.0, 0.0]}
            ]},
            {"nodes": [
                {"feature": 4, "threshold": 10.0, "left": 1, "right": 2},
                {"value": [0.0, 5.0]},
                {"value": [3.0, 2.0]}
            ]}
        ]
    }"#;

    fn features(calories: f64, fat: f64) -> FeatureVector {
        let user = validate("70", "22").unwrap();
        FeatureVector::new(&user, &NutritionProfile::new(calories, 10.0, fat, 20.0))
    }

    #[test]
    fn test_predicts_positive_class() {
        let model = RandomForestModel::from_json(FOREST_JSON).unwrap();
        assert_eq!(model.tree_count(), 2);

        // tree 1: [0.25, 0.75], tree 2: [0.0, 1.0]
        let prediction = model.predict(&features(120.0, 3.0)).unwrap();
        assert_eq!(prediction.label, SuitabilityLabel::Suitable);
        assert_eq!(prediction.probability, 0.875);
    }

    #[test]
    fn test_reports_probability_of_predicted_class() {
        let model = RandomForestModel::from_json(FOREST_JSON).unwrap();

        // tree 1: [1.0, 0.0], tree 2: [0.6, 0.4]
        let prediction = model.predict(&features(500.0, 25.0)).unwrap();
        assert_eq!(prediction.label, SuitabilityLabel::NotSuitable);
        assert!((prediction.probability - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_threshold_goes_left_when_equal() {
        let model = RandomForestModel::from_json(FOREST_JSON).unwrap();
        let proba = model.predict_proba(&features(300.0, 10.0));
        assert_eq!(proba, vec![0.125, 0.875]);
    }

    #[test]
    fn test_ties_pick_first_class() {
        let json = FOREST_JSON.replace("[1.0, 3.0]", "[2.0, 2.0]").replace(
            "{\"value\": [0.0, 5.0]}",
            "{\"value\": [1.0, 1.0]}",
        );
        let model = RandomForestModel::from_json(&json).unwrap();

        let prediction = model.predict(&features(120.0, 3.0)).unwrap();
        assert_eq!(prediction.label, SuitabilityLabel::NotSuitable);
        assert_eq!(prediction.probability, 0.5);
    }

    #[test]
    fn test_rejects_feature_schema_mismatch() {
        let json = FOREST_JSON.replace("\"BMI\", \"Calories\"", "\"Calories\", \"BMI\"");
        let result = RandomForestModel::from_json(&json);
        assert!(matches!(result, Err(CoreError::ReferenceData(_))));
    }

    #[test]
    fn test_rejects_backward_child() {
        let json = FOREST_JSON.replace("\"left\": 1, \"right\": 2}", "\"left\": 0, \"right\": 2}");
        let result = RandomForestModel::from_json(&json);
        assert!(matches!(result, Err(CoreError::ReferenceData(msg)) if msg.contains("invalid child")));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            RandomForestModel::from_json("{not json"),
            Err(CoreError::ReferenceData(_))
        ));
    }
}

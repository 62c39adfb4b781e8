use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use clap::Parser;
use dietwise_core::{
    domain::{
        common::services::Service,
        food::entities::{CategoryTable, FoodDataset, FoodRecord, NutritionProfile, ReferenceData},
        health::entities::ReferenceDataHealthStatus,
    },
    infrastructure::classifier::{ModelClassifier, RandomForestModel, UnavailableClassifier},
};
use serde_json::json;
use test_context::{AsyncTestContext, test_context};

use crate::{
    application::http::{
        server::{
            api_entities::api_error::ErrorBody, app_state::AppState, http_server::router,
        },
        suitability::handlers::evaluate_suitability::EvaluateSuitabilityResponse,
    },
    args::Args,
};

/// A single stump on calories: lighter foods lean suitable.
const FOREST_JSON: &str = r#"{
    "feature_names": ["Weight", "BMI", "Calories", "Protein", "Fat", "Carbohydrates"],
    "classes": [0, 1],
    "trees": [
        {"nodes": [
            {"feature": 2, "threshold": 300.0, "left": 1, "right": 2},
            {"value": [1.0, 4.0]},
            {"value": [3.0, 1.0]}
        ]}
    ]
}"#;

fn reference_data() -> ReferenceData {
    let dataset = FoodDataset::new(vec![
        FoodRecord::new("Lamb Korma", NutritionProfile::new(450.0, 25.0, 20.0, 15.0)),
        FoodRecord::new("Dal Tadka", NutritionProfile::new(180.0, 9.0, 6.0, 22.0)),
        FoodRecord::new("Lentil Soup", NutritionProfile::new(150.0, 9.0, 3.0, 20.0)),
    ]);
    ReferenceData::new(dataset, CategoryTable::default(), 0.6).unwrap()
}

fn test_server(classifier: ModelClassifier) -> TestServer {
    let args = Arc::new(Args::parse_from(["dietwise-api"]));
    let state = AppState::new(args, Service::new(reference_data(), classifier));
    TestServer::new(router(state).unwrap()).unwrap()
}

struct TestApp {
    server: TestServer,
}

impl AsyncTestContext for TestApp {
    async fn setup() -> Self {
        let model = RandomForestModel::from_json(FOREST_JSON).unwrap();
        Self {
            server: test_server(ModelClassifier::RandomForest(model)),
        }
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_evaluate_category_food(ctx: &mut TestApp) {
    let response = ctx
        .server
        .post("/evaluate")
        .json(&json!({"weight": "70", "bmi": "22", "food": "Apple"}))
        .await;

    response.assert_status_ok();
    let body = response.json::<EvaluateSuitabilityResponse>();
    assert_eq!(body.result.as_str(), "Suitable");
    assert_eq!(body.confidence, 1.0);
    assert_eq!(body.food, "fruit");
    assert_eq!(body.source, "category-name");
    assert_eq!(
        body.reason.as_deref(),
        Some("Category 'fruit' is generally healthy")
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_evaluate_form_body(ctx: &mut TestApp) {
    let response = ctx
        .server
        .post("/evaluate")
        .form(&[("weight", "90"), ("bmi", "33"), ("food", "pizza")])
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["result"], "Not Suitable");
    assert_eq!(body["confidence"], 1.0);
    assert_eq!(body["source"], "category-name");
    assert_eq!(body["category"], "fast_food");
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_evaluate_keyword_inside_name(ctx: &mut TestApp) {
    let response = ctx
        .server
        .post("/evaluate")
        .form(&[("weight", "75"), ("bmi", "24"), ("food", "pepperoni pizza")])
        .await;

    response.assert_status_ok();
    let body = response.json::<EvaluateSuitabilityResponse>();
    assert_eq!(body.result.as_str(), "Not Suitable");
    assert_eq!(body.confidence, 1.0);
    assert_eq!(body.food, "fast_food");
    assert_eq!(body.source, "category-keyword");
    assert_eq!(
        body.reason.as_deref(),
        Some("Category 'fast_food' is generally unhealthy")
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_evaluate_accepts_numbers(ctx: &mut TestApp) {
    let response = ctx
        .server
        .post("/evaluate")
        .json(&json!({"weight": 70, "bmi": 22.5, "food": "dal tadka"}))
        .await;

    response.assert_status_ok();
    let body = response.json::<EvaluateSuitabilityResponse>();
    assert_eq!(body.result.as_str(), "Suitable");
    assert_eq!(body.confidence, 0.8);
    assert_eq!(body.source, "dataset");
    assert_eq!(body.category, None);
    assert_eq!(body.reason, None);
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_evaluate_bmi_risk(ctx: &mut TestApp) {
    let response = ctx
        .server
        .post("/evaluate")
        .json(&json!({"weight": "60", "bmi": "32", "food": "lamb korma"}))
        .await;

    response.assert_status_ok();
    let body = response.json::<EvaluateSuitabilityResponse>();
    assert_eq!(body.result.as_str(), "Not Suitable");
    assert_eq!(body.confidence, 0.95);
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_root_route_evaluates(ctx: &mut TestApp) {
    let response = ctx
        .server
        .post("/")
        .json(&json!({"weight": "70", "bmi": "22", "food": "lentil sop"}))
        .await;

    response.assert_status_ok();
    let body = response.json::<EvaluateSuitabilityResponse>();
    assert_eq!(body.source, "dataset-fuzzy");
    assert_eq!(body.food, "lentil soup");
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_out_of_range_weight(ctx: &mut TestApp) {
    let response = ctx
        .server
        .post("/evaluate")
        .json(&json!({"weight": "15", "bmi": "22", "food": "apple"}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<ErrorBody>(),
        ErrorBody {
            kind: "out_of_range".to_string(),
            message: "Weight must be between 30 and 200 kg.".to_string(),
        }
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_non_numeric_input(ctx: &mut TestApp) {
    let response = ctx
        .server
        .post("/evaluate")
        .form(&[("weight", "abc"), ("bmi", "22"), ("food", "apple")])
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<ErrorBody>();
    assert_eq!(body.kind, "not_numeric");
    assert_eq!(body.message, "Weight and BMI must be numeric values.");
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_missing_measurements(ctx: &mut TestApp) {
    let response = ctx
        .server
        .post("/evaluate")
        .json(&json!({"food": "apple"}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<ErrorBody>().kind, "not_numeric");
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_unknown_food(ctx: &mut TestApp) {
    let response = ctx
        .server
        .post("/evaluate")
        .json(&json!({"weight": "150", "bmi": "16", "food": "xyzzy"}))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<ErrorBody>(),
        ErrorBody {
            kind: "food_not_found".to_string(),
            message: "Food not found. Try 'Apple', 'Rice', etc.".to_string(),
        }
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_health(ctx: &mut TestApp) {
    let response = ctx.server.get("/health").await;

    response.assert_status_ok();
    let status = response.json::<ReferenceDataHealthStatus>();
    assert_eq!(status.dataset_rows, 3);
    assert_eq!(status.categories, 9);
    assert!(status.classifier_available);
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_openapi_document(ctx: &mut TestApp) {
    let response = ctx.server.get("/api-docs/openapi.json").await;

    response.assert_status_ok();
    let document = response.json::<serde_json::Value>();
    assert!(document["paths"]["/evaluate"]["post"].is_object());
    assert!(document["paths"]["/health"]["get"].is_object());
}

#[tokio::test]
async fn test_unavailable_classifier_degrades() {
    let server = test_server(ModelClassifier::Unavailable(UnavailableClassifier));

    let response = server
        .post("/evaluate")
        .json(&json!({"weight": "70", "bmi": "22", "food": "dal tadka"}))
        .await;
    response.assert_status_ok();
    let body = response.json::<EvaluateSuitabilityResponse>();
    assert_eq!(body.result.as_str(), "Unknown");
    assert_eq!(body.confidence, 0.0);

    let response = server.get("/health").await;
    assert!(!response.json::<ReferenceDataHealthStatus>().classifier_available);
}

pub mod evaluate_suitability;

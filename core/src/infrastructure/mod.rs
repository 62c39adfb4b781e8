pub mod classifier;
pub mod dataset;

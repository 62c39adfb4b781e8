pub mod classifier;
pub mod common;
pub mod food;
pub mod health;
pub mod suitability;
pub mod user_profile;

//! Food suitability estimation: resolves a free-text food to a nutrition
//! profile and combines a pre-trained classifier with hard override rules.

pub mod application;
pub mod domain;
pub mod infrastructure;

//! Region Recommender - residential region recommendations from commute destinations
//!
//! This library provides the recommendation engine behind the service. Every
//! catalog region is scored by weighted travel time to one or two reference
//! locations, and the closest regions are returned with descriptive metadata.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{EngineError, HashEstimator, Recommender, TravelTimeEstimator};
pub use models::{RecommendQuery, Recommendation, Region, RegionCatalog};

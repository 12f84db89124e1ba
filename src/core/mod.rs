// Core algorithm exports
pub mod enrich;
pub mod error;
pub mod estimator;
pub mod ranking;
pub mod recommender;
pub mod scoring;
pub mod weights;

pub use enrich::{enrich, relevance_score};
pub use error::EngineError;
pub use estimator::{HashEstimator, TravelTimeEstimator, MAX_TRAVEL_MINUTES, MIN_TRAVEL_MINUTES};
pub use ranking::{rank_regions, MAX_RECOMMENDATIONS};
pub use recommender::Recommender;
pub use scoring::score_region;
pub use weights::{normalize_weights, DEFAULT_WEIGHT};

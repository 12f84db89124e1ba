// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CatalogError, NormalizedWeights, RecommendQuery, Recommendation, Region, RegionCatalog,
    RegionDetails, ScoredRegion, DEFAULT_SUMMARY, DEFAULT_TRANSPORT,
};
pub use requests::{RecommendRequest, RouteRequest};
pub use responses::{ErrorResponse, HealthResponse, RecommendResponse, RouteResponse};

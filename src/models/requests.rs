use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::RecommendQuery;

/// Request to recommend residential regions
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(length(min = 1))]
    pub location1: String,
    #[serde(default)]
    pub location2: Option<String>,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub weight1: Option<f64>,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub weight2: Option<f64>,
}

impl From<RecommendRequest> for RecommendQuery {
    fn from(req: RecommendRequest) -> Self {
        RecommendQuery {
            location1: req.location1,
            location2: req.location2,
            weight1: req.weight1,
            weight2: req.weight2,
        }
    }
}

/// Query parameters for the route duration lookup
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RouteRequest {
    #[validate(length(min = 1))]
    pub start: String,
    #[validate(length(min = 1))]
    pub end: String,
}

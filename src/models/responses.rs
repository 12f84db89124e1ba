use serde::{Deserialize, Serialize};
use crate::models::domain::Recommendation;

/// Response for the recommend endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub success: bool,
    pub recommendations: Vec<Recommendation>,
}

impl RecommendResponse {
    pub fn new(recommendations: Vec<Recommendation>) -> Self {
        Self {
            success: true,
            recommendations,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error envelope returned on any failed request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Estimated duration between two places, in minutes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteResponse {
    pub start: String,
    pub end: String,
    pub duration: u32,
}

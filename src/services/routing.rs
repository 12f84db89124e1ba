use rand::Rng;
use crate::core::{MAX_TRAVEL_MINUTES, MIN_TRAVEL_MINUTES};
use crate::models::RouteResponse;

/// Route duration client
///
/// Currently returns a uniformly random duration in the estimator's range;
/// reserved for a real routing API integration. Not used when ranking regions.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteClient;

impl RouteClient {
    pub fn new() -> Self {
        Self
    }

    /// Get the estimated duration between two places
    pub async fn get_route(&self, start: &str, end: &str) -> RouteResponse {
        let duration = rand::thread_rng().gen_range(MIN_TRAVEL_MINUTES..=MAX_TRAVEL_MINUTES);

        tracing::trace!("Route {} -> {}: {} minutes", start, end, duration);

        RouteResponse {
            start: start.to_string(),
            end: end.to_string(),
            duration,
        }
    }
}

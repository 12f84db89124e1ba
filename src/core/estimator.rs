/// Shortest estimate the hash strategy produces, in minutes
pub const MIN_TRAVEL_MINUTES: u32 = 15;

/// Longest estimate the hash strategy produces, in minutes
pub const MAX_TRAVEL_MINUTES: u32 = 60;

/// Strategy for estimating travel time from a region to a location
///
/// Implementations must be deterministic for a given (region, location) pair
/// within one process run, since ranking relies on repeatable estimates.
pub trait TravelTimeEstimator: Send + Sync {
    /// Estimated travel time in whole minutes
    fn estimate(&self, region: &str, location: &str) -> u32;
}

/// Placeholder estimator deriving a stable pseudo travel time from a string hash
///
/// Stands in until a routing API backs the estimates. Values fall in
/// [`MIN_TRAVEL_MINUTES`, `MAX_TRAVEL_MINUTES`] and are spread across the range.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashEstimator;

impl TravelTimeEstimator for HashEstimator {
    fn estimate(&self, region: &str, location: &str) -> u32 {
        let span = MAX_TRAVEL_MINUTES - MIN_TRAVEL_MINUTES + 1;
        MIN_TRAVEL_MINUTES + hash_pair(region, location).unsigned_abs() % span
    }
}

/// 31-multiplier polynomial hash over the UTF-16 units of `region + location`
#[inline]
fn hash_pair(region: &str, location: &str) -> i32 {
    region
        .encode_utf16()
        .chain(location.encode_utf16())
        .fold(0i32, |hash, unit| {
            hash.wrapping_mul(31).wrapping_add(i32::from(unit))
        })
}

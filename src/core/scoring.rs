use crate::models::NormalizedWeights;

/// Combine per-location travel times into a single region score
///
/// Lower is better. With no second location both `time2` and the second
/// weight are zero, so the score is exactly `time1`.
#[inline]
pub fn score_region(time1: u32, time2: u32, weights: &NormalizedWeights) -> f64 {
    f64::from(time1) * weights.location1 + f64::from(time2) * weights.location2
}

use crate::core::error::EngineError;
use crate::models::NormalizedWeights;

/// Weight assumed for a location when the caller gives none
pub const DEFAULT_WEIGHT: f64 = 0.5;

/// Normalize the raw location weights so they sum to 1
///
/// Without a second location the first one carries the full weight and the
/// raw weights are ignored. Missing weights default to [`DEFAULT_WEIGHT`].
/// When both weights are zero the locations are weighted equally.
pub fn normalize_weights(
    weight1: Option<f64>,
    weight2: Option<f64>,
    has_location2: bool,
) -> Result<NormalizedWeights, EngineError> {
    if !has_location2 {
        return Ok(NormalizedWeights::single());
    }

    let w1 = checked_weight("location1", weight1.unwrap_or(DEFAULT_WEIGHT))?;
    let w2 = checked_weight("location2", weight2.unwrap_or(DEFAULT_WEIGHT))?;

    let largest = w1.max(w2);
    if largest == 0.0 {
        tracing::debug!("Both weights are zero, weighting locations equally");
        return Ok(NormalizedWeights::equal());
    }

    // Scale into [0, 1] first so the sum cannot overflow
    let (w1, w2) = (w1 / largest, w2 / largest);
    let total = w1 + w2;

    Ok(NormalizedWeights {
        location1: w1 / total,
        location2: w2 / total,
    })
}

#[inline]
fn checked_weight(location: &'static str, value: f64) -> Result<f64, EngineError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(EngineError::InvalidWeight { location, value })
    }
}

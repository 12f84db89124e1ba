//! Region ranking.

use crate::models::ScoredRegion;

/// Most recommendations returned for a single request
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Order regions best-first and keep the top [`MAX_RECOMMENDATIONS`]
///
/// Sorting is ascending by score and stable, so regions with equal scores
/// keep their catalog order.
pub fn rank_regions(mut scored: Vec<ScoredRegion>) -> Vec<ScoredRegion> {
    scored.sort_by(|a, b| a.score.total_cmp(&b.score));
    scored.truncate(MAX_RECOMMENDATIONS);
    scored
}

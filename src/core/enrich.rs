use crate::models::{Recommendation, RegionCatalog, ScoredRegion, DEFAULT_SUMMARY, DEFAULT_TRANSPORT};

/// Turn a ranked region into a presentable recommendation
///
/// Transport and summary come from the catalog metadata; regions without an
/// entry get the generic defaults.
pub fn enrich(scored: &ScoredRegion, catalog: &RegionCatalog) -> Recommendation {
    let (transport, summary) = match catalog.details(&scored.region) {
        Some(details) => (details.transport.clone(), details.summary.clone()),
        None => (DEFAULT_TRANSPORT.to_string(), DEFAULT_SUMMARY.to_string()),
    };

    Recommendation {
        name: scored.region.clone(),
        average_time: average_minutes(scored.score),
        relevance: relevance_score(scored.score),
        transport,
        summary,
    }
}

/// Score rounded to the nearest whole minute
#[inline]
fn average_minutes(score: f64) -> u32 {
    score.round().max(0.0) as u32
}

/// Map a travel score onto 0-100 where higher is better
///
/// Each minute of weighted travel costs 1.5 points.
#[inline]
pub fn relevance_score(score: f64) -> u8 {
    let penalty = (score * 1.5).round();
    (100.0 - penalty).clamp(0.0, 100.0) as u8
}

use std::sync::Arc;

use crate::core::{
    enrich::enrich,
    error::EngineError,
    estimator::{HashEstimator, TravelTimeEstimator},
    ranking::rank_regions,
    scoring::score_region,
    weights::normalize_weights,
};
use crate::models::{RecommendQuery, Recommendation, RegionCatalog, ScoredRegion};

/// Recommendation orchestrator - scores every catalog region against the query
///
/// # Pipeline Stages
/// 1. Weight normalization
/// 2. Travel time estimation per region and location
/// 3. Weighted scoring
/// 4. Ranking and truncation
/// 5. Enrichment with region metadata
///
/// The catalog and estimator are shared read-only, so clones are cheap and
/// safe to use from concurrent requests.
#[derive(Clone)]
pub struct Recommender {
    catalog: Arc<RegionCatalog>,
    estimator: Arc<dyn TravelTimeEstimator>,
}

impl Recommender {
    pub fn new(catalog: RegionCatalog, estimator: Arc<dyn TravelTimeEstimator>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            estimator,
        }
    }

    pub fn with_catalog(catalog: RegionCatalog) -> Self {
        Self::new(catalog, Arc::new(HashEstimator))
    }

    pub fn with_default_catalog() -> Self {
        Self::with_catalog(RegionCatalog::builtin())
    }

    pub fn catalog(&self) -> &RegionCatalog {
        &self.catalog
    }

    /// Recommend the best regions for the given locations
    ///
    /// # Returns
    /// Up to three recommendations ordered best-first, or an error when a
    /// weight is negative or not a number.
    pub fn recommend(&self, query: &RecommendQuery) -> Result<Vec<Recommendation>, EngineError> {
        let location2 = query.second_location();
        let weights = normalize_weights(query.weight1, query.weight2, location2.is_some())?;

        let scored: Vec<ScoredRegion> = self
            .catalog
            .regions()
            .iter()
            .map(|region| {
                let time1 = self.estimator.estimate(region, &query.location1);
                let time2 = location2
                    .map(|location| self.estimator.estimate(region, location))
                    .unwrap_or(0);

                ScoredRegion {
                    region: region.clone(),
                    score: score_region(time1, time2, &weights),
                }
            })
            .collect();

        let recommendations: Vec<Recommendation> = rank_regions(scored)
            .iter()
            .map(|scored| enrich(scored, &self.catalog))
            .collect();

        tracing::debug!(
            "Scored {} regions with weights {:?}, kept {}",
            self.catalog.len(),
            weights,
            recommendations.len()
        );

        Ok(recommendations)
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_default_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ranking::MAX_RECOMMENDATIONS;
    use crate::models::Region;

    /// Estimator that charges the region name length plus the location length
    struct LengthEstimator;

    impl TravelTimeEstimator for LengthEstimator {
        fn estimate(&self, region: &str, location: &str) -> u32 {
            (region.len() + location.len()) as u32
        }
    }

    fn catalog(names: &[&str]) -> RegionCatalog {
        RegionCatalog::new(names.iter().map(|n| Region::new(*n)).collect()).unwrap()
    }

    #[test]
    fn test_recommend_orders_by_score() {
        let recommender = Recommender::new(
            catalog(&["ccccc", "a", "bbb", "dddd"]),
            Arc::new(LengthEstimator),
        );

        let result = recommender.recommend(&RecommendQuery::new("xx")).unwrap();

        let names: Vec<_> = result.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "bbb", "dddd"]);
        assert_eq!(result[0].average_time, 3);
    }

    #[test]
    fn test_respects_limit() {
        let recommender = Recommender::with_default_catalog();
        let result = recommender.recommend(&RecommendQuery::new("Seoul Station")).unwrap();

        assert_eq!(result.len(), MAX_RECOMMENDATIONS);
    }

    #[test]
    fn test_empty_catalog() {
        let recommender = Recommender::with_catalog(RegionCatalog::default());
        let result = recommender.recommend(&RecommendQuery::new("Seoul Station")).unwrap();

        assert!(result.is_empty());
    }

    #[test]
    fn test_invalid_weight_propagates() {
        let recommender = Recommender::with_default_catalog();
        let query = RecommendQuery::new("Gangnam Station")
            .with_second_location("Pangyo")
            .with_weights(-1.0, 1.0);

        assert!(recommender.recommend(&query).is_err());
    }
}

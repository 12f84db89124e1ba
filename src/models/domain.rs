use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Fallback transport description for regions without metadata
pub const DEFAULT_TRANSPORT: &str = "various transit options";

/// Fallback summary for regions without metadata
pub const DEFAULT_SUMMARY: &str = "a convenient and livable area";

/// Errors raised while building a region catalog
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("Region name must not be empty")]
    EmptyName,

    #[error("Duplicate region in catalog: {0}")]
    DuplicateRegion(String),
}

/// Candidate residential region as configured at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    #[serde(default)]
    pub transport: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl Region {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transport: None,
            summary: None,
        }
    }

    pub fn with_details(
        name: impl Into<String>,
        transport: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            transport: Some(transport.into()),
            summary: Some(summary.into()),
        }
    }
}

/// Descriptive metadata shown alongside a recommendation
#[derive(Debug, Clone, PartialEq)]
pub struct RegionDetails {
    pub transport: String,
    pub summary: String,
}

/// Immutable region catalog with its metadata table
///
/// Catalog order is significant: it breaks ties between equally scored regions.
/// A region may be listed without metadata, in which case presentation falls
/// back to [`DEFAULT_TRANSPORT`] and [`DEFAULT_SUMMARY`].
#[derive(Debug, Clone, Default)]
pub struct RegionCatalog {
    regions: Vec<String>,
    details: HashMap<String, RegionDetails>,
}

impl RegionCatalog {
    /// Build a catalog, rejecting empty and duplicate names
    pub fn new(regions: Vec<Region>) -> Result<Self, CatalogError> {
        let mut names = Vec::with_capacity(regions.len());
        let mut details = HashMap::new();

        for region in regions {
            if region.name.trim().is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if names.contains(&region.name) {
                return Err(CatalogError::DuplicateRegion(region.name));
            }

            // Partial metadata still fills the missing half with defaults
            if region.transport.is_some() || region.summary.is_some() {
                details.insert(
                    region.name.clone(),
                    RegionDetails {
                        transport: region
                            .transport
                            .unwrap_or_else(|| DEFAULT_TRANSPORT.to_string()),
                        summary: region
                            .summary
                            .unwrap_or_else(|| DEFAULT_SUMMARY.to_string()),
                    },
                );
            }
            names.push(region.name);
        }

        Ok(Self {
            regions: names,
            details,
        })
    }

    /// Seoul metropolitan regions served out of the box
    pub fn builtin() -> Self {
        let regions = vec![
            Region::with_details(
                "Gangnam",
                "Subway lines 2 and Sinbundang, express buses",
                "a lively business district with dense amenities",
            ),
            Region::with_details(
                "Songpa",
                "Subway lines 2, 8 and 9",
                "a family-friendly area around Olympic Park and Seokchon Lake",
            ),
            Region::with_details(
                "Bundang",
                "Sinbundang and Suin-Bundang lines, metropolitan buses",
                "a planned new town with quiet residential blocks",
            ),
            Region::with_details(
                "Yeouido",
                "Subway lines 5 and 9",
                "a financial hub bordered by the Han River parks",
            ),
            Region::with_details(
                "Mapo",
                "Subway lines 2, 5, 6 and the Airport Railroad",
                "a young neighbourhood with cafes and culture",
            ),
            Region::with_details(
                "Nowon",
                "Subway lines 4 and 7",
                "an affordable residential area with good schools",
            ),
            Region::with_details(
                "Yongsan",
                "Subway lines 1, 4 and 6, KTX at Yongsan Station",
                "a central district under active redevelopment",
            ),
        ];

        // Built-in names are non-empty and unique
        Self::new(regions).unwrap_or_default()
    }

    /// Region names in catalog order
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    pub fn details(&self, name: &str) -> Option<&RegionDetails> {
        self.details.get(name)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Weights for the two reference locations, summing to 1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedWeights {
    pub location1: f64,
    pub location2: f64,
}

impl NormalizedWeights {
    /// Full weight on the first location
    pub fn single() -> Self {
        Self {
            location1: 1.0,
            location2: 0.0,
        }
    }

    pub fn equal() -> Self {
        Self {
            location1: 0.5,
            location2: 0.5,
        }
    }
}

/// Region paired with its combined travel score (lower is better)
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRegion {
    pub region: String,
    pub score: f64,
}

/// Recommendation handed back to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    #[serde(rename = "averageTime")]
    pub average_time: u32,
    /// Relevance in [0, 100], higher is better
    #[serde(rename = "score")]
    pub relevance: u8,
    pub transport: String,
    pub summary: String,
}

/// Parsed recommendation input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendQuery {
    pub location1: String,
    pub location2: Option<String>,
    pub weight1: Option<f64>,
    pub weight2: Option<f64>,
}

impl RecommendQuery {
    pub fn new(location1: impl Into<String>) -> Self {
        Self {
            location1: location1.into(),
            ..Self::default()
        }
    }

    pub fn with_second_location(mut self, location2: impl Into<String>) -> Self {
        self.location2 = Some(location2.into());
        self
    }

    pub fn with_weights(mut self, weight1: f64, weight2: f64) -> Self {
        self.weight1 = Some(weight1);
        self.weight2 = Some(weight2);
        self
    }

    /// Second location, treating an empty string as absent
    pub fn second_location(&self) -> Option<&str> {
        self.location2.as_deref().filter(|location| !location.is_empty())
    }
}

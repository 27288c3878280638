//! Recommendations Data

use crate::domain::recommendations::records::RecommendationUuid;

/// New Recommendation Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecommendation {
    pub uuid: RecommendationUuid,
    pub clover_item_id: String,
    pub item_name: Option<String>,
    pub score: f64,
}

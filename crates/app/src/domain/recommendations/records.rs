//! Recommendation Records

use jiff::Timestamp;

use crate::{domain::users::records::UserUuid, uuids::TypedUuid};

/// Recommendation UUID
pub type RecommendationUuid = TypedUuid<RecommendationRecord>;

/// Recommendation Record
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationRecord {
    pub uuid: RecommendationUuid,
    pub user_uuid: UserUuid,
    pub clover_item_id: String,
    pub item_name: Option<String>,
    pub score: f64,
    pub created_at: Timestamp,
}

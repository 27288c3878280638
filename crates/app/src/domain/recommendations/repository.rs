//! Recommendations Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    recommendations::{
        data::NewRecommendation,
        records::{RecommendationRecord, RecommendationUuid},
    },
    users::records::UserUuid,
};

const CREATE_RECOMMENDATION_SQL: &str = include_str!("sql/create_recommendation.sql");
const LIST_RECOMMENDATIONS_SQL: &str = include_str!("sql/list_recommendations.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgRecommendationsRepository;

impl PgRecommendationsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_recommendation(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        recommendation: NewRecommendation,
    ) -> Result<RecommendationRecord, sqlx::Error> {
        query_as::<Postgres, RecommendationRecord>(CREATE_RECOMMENDATION_SQL)
            .bind(recommendation.uuid.into_uuid())
            .bind(user.into_uuid())
            .bind(recommendation.clover_item_id)
            .bind(recommendation.item_name)
            .bind(recommendation.score)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_recommendations(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Vec<RecommendationRecord>, sqlx::Error> {
        query_as::<Postgres, RecommendationRecord>(LIST_RECOMMENDATIONS_SQL)
            .bind(user.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for RecommendationRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: RecommendationUuid::from_uuid(row.try_get("uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            clover_item_id: row.try_get("clover_item_id")?,
            item_name: row.try_get("item_name")?,
            score: row.try_get("score")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}

//! Recommendations service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        recommendations::{
            data::NewRecommendation, errors::RecommendationsServiceError,
            records::RecommendationRecord, repository::PgRecommendationsRepository,
        },
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgRecommendationsService {
    db: Db,
    repository: PgRecommendationsRepository,
}

impl PgRecommendationsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgRecommendationsRepository::new(),
        }
    }
}

#[async_trait]
impl RecommendationsService for PgRecommendationsService {
    #[tracing::instrument(
        name = "recommendations.service.create_recommendation",
        skip(self, recommendation),
        fields(user_uuid = %user, clover_item_id = %recommendation.clover_item_id),
        err
    )]
    async fn create_recommendation(
        &self,
        user: UserUuid,
        recommendation: NewRecommendation,
    ) -> Result<RecommendationRecord, RecommendationsServiceError> {
        if !recommendation.score.is_finite() {
            return Err(RecommendationsServiceError::InvalidScore);
        }

        let mut tx = self.db.begin_transaction().await?;

        let created = self
            .repository
            .create_recommendation(&mut tx, user, recommendation)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn list_recommendations(
        &self,
        user: UserUuid,
    ) -> Result<Vec<RecommendationRecord>, RecommendationsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let recommendations = self.repository.list_recommendations(&mut tx, user).await?;

        tx.commit().await?;

        Ok(recommendations)
    }
}

#[automock]
#[async_trait]
pub trait RecommendationsService: Send + Sync {
    /// Records a scored item recommendation for a user.
    async fn create_recommendation(
        &self,
        user: UserUuid,
        recommendation: NewRecommendation,
    ) -> Result<RecommendationRecord, RecommendationsServiceError>;

    /// A user's recommendations, best score first.
    async fn list_recommendations(
        &self,
        user: UserUuid,
    ) -> Result<Vec<RecommendationRecord>, RecommendationsServiceError>;
}

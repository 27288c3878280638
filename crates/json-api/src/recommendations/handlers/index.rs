//! List Recommendations Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bitewise_app::domain::recommendations::records::RecommendationRecord;

use crate::{extensions::*, recommendations::errors::into_status_error};

/// Recommendation Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RecommendationResponse {
    /// The unique identifier of the recommendation
    pub uuid: Uuid,

    /// The Clover item being recommended
    pub clover_item_id: String,

    pub item_name: Option<String>,

    /// Higher is better
    pub score: f64,

    /// The date and time the recommendation was recorded
    pub created_at: String,
}

impl From<RecommendationRecord> for RecommendationResponse {
    fn from(recommendation: RecommendationRecord) -> Self {
        Self {
            uuid: recommendation.uuid.into(),
            clover_item_id: recommendation.clover_item_id,
            item_name: recommendation.item_name,
            score: recommendation.score,
            created_at: recommendation.created_at.to_string(),
        }
    }
}

/// List Recommendations Handler
///
/// Best score first.
#[endpoint(
    tags("recommendations"),
    summary = "List User Recommendations",
    responses(
        (status_code = StatusCode::OK, description = "Recommendations"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    user: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<Vec<RecommendationResponse>>, StatusError> {
    let state = depot.app_state()?;

    let recommendations = state
        .app
        .recommendations
        .list_recommendations(user.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(recommendations.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use bitewise_app::domain::{
        recommendations::{MockRecommendationsService, records::RecommendationUuid},
        users::records::UserUuid,
    };

    use crate::test_helpers::recommendations_service;

    use super::*;

    #[tokio::test]
    async fn test_list_recommendations_keeps_service_order() -> TestResult {
        let user = UserUuid::new();

        let records: Vec<RecommendationRecord> = [("ITEM2", 0.9), ("ITEM1", 0.4)]
            .into_iter()
            .map(|(item, score)| RecommendationRecord {
                uuid: RecommendationUuid::new(),
                user_uuid: user,
                clover_item_id: item.to_string(),
                item_name: None,
                score,
                created_at: Timestamp::UNIX_EPOCH,
            })
            .collect();

        let mut recommendations = MockRecommendationsService::new();

        recommendations
            .expect_list_recommendations()
            .once()
            .withf(move |u| *u == user)
            .return_once(move |_| Ok(records));

        let mut res = TestClient::get(format!("http://example.com/users/{user}/recommendations"))
            .send(&recommendations_service(
                recommendations,
                Router::with_path("users/{user}/recommendations").get(handler),
            ))
            .await;

        let body: Vec<RecommendationResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body.iter()
                .map(|r| r.clover_item_id.as_str())
                .collect::<Vec<_>>(),
            vec!["ITEM2", "ITEM1"]
        );

        Ok(())
    }
}

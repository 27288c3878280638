//! Create Recommendation Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bitewise_app::domain::recommendations::data::NewRecommendation;

use crate::{
    extensions::*,
    recommendations::{errors::into_status_error, index::RecommendationResponse},
};

/// Create Recommendation Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateRecommendationRequest {
    /// Client-chosen recommendation UUID; generated when omitted
    pub uuid: Option<Uuid>,

    pub clover_item_id: String,

    pub item_name: Option<String>,

    pub score: f64,
}

impl From<CreateRecommendationRequest> for NewRecommendation {
    fn from(request: CreateRecommendationRequest) -> Self {
        NewRecommendation {
            uuid: request.uuid.map(Into::into).unwrap_or_default(),
            clover_item_id: request.clover_item_id,
            item_name: request.item_name,
            score: request.score,
        }
    }
}

/// Create Recommendation Handler
#[endpoint(
    tags("recommendations"),
    summary = "Record User Recommendation",
    responses(
        (status_code = StatusCode::CREATED, description = "Recommendation recorded"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    user: PathParam<Uuid>,
    json: JsonBody<CreateRecommendationRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<RecommendationResponse>, StatusError> {
    let state = depot.app_state()?;

    let recommendation = state
        .app
        .recommendations
        .create_recommendation(user.into_inner().into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(recommendation.into()))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use bitewise_app::domain::{
        recommendations::{
            MockRecommendationsService, RecommendationsServiceError,
            records::{RecommendationRecord, RecommendationUuid},
        },
        users::records::UserUuid,
    };

    use crate::test_helpers::recommendations_service;

    use super::*;

    fn make_service(recommendations: MockRecommendationsService) -> Service {
        recommendations_service(
            recommendations,
            Router::with_path("users/{user}/recommendations").post(handler),
        )
    }

    #[tokio::test]
    async fn test_create_recommendation_success() -> TestResult {
        let user = UserUuid::new();
        let uuid = RecommendationUuid::new();

        let mut recommendations = MockRecommendationsService::new();

        recommendations
            .expect_create_recommendation()
            .once()
            .withf(move |u, new| *u == user && new.uuid == uuid && new.clover_item_id == "ITEM1")
            .returning(move |u, new| {
                Ok(RecommendationRecord {
                    uuid: new.uuid,
                    user_uuid: u,
                    clover_item_id: new.clover_item_id,
                    item_name: new.item_name,
                    score: new.score,
                    created_at: Timestamp::UNIX_EPOCH,
                })
            });

        let mut res = TestClient::post(format!("http://example.com/users/{user}/recommendations"))
            .json(&json!({
                "uuid": uuid.into_uuid(),
                "clover_item_id": "ITEM1",
                "item_name": "Margherita",
                "score": 0.8,
            }))
            .send(&make_service(recommendations))
            .await;

        let body: RecommendationResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.uuid, uuid.into_uuid());
        assert_eq!(body.item_name.as_deref(), Some("Margherita"));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_recommendation_for_unknown_user_returns_404() -> TestResult {
        let mut recommendations = MockRecommendationsService::new();

        recommendations
            .expect_create_recommendation()
            .once()
            .return_once(|_, _| Err(RecommendationsServiceError::InvalidReference));

        let res = TestClient::post(format!(
            "http://example.com/users/{}/recommendations",
            Uuid::now_v7()
        ))
        .json(&json!({ "clover_item_id": "ITEM1", "score": 0.5 }))
        .send(&make_service(recommendations))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_recommendation_invalid_score_returns_400() -> TestResult {
        let mut recommendations = MockRecommendationsService::new();

        recommendations
            .expect_create_recommendation()
            .once()
            .return_once(|_, _| Err(RecommendationsServiceError::InvalidScore));

        let res = TestClient::post(format!(
            "http://example.com/users/{}/recommendations",
            Uuid::now_v7()
        ))
        .json(&json!({ "clover_item_id": "ITEM1", "score": 1e308 }))
        .send(&make_service(recommendations))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}

//! List Merchants Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bitewise_app::domain::merchants::records::MerchantRecord;

use crate::{extensions::*, merchants::errors::into_status_error};

/// Merchant Response
///
/// The stored Clover access token is never returned.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MerchantResponse {
    /// The unique identifier of the merchant
    pub uuid: Uuid,

    /// The merchant's id in Clover
    pub clover_merchant_id: String,

    pub name: String,

    /// The date and time the merchant was registered
    pub created_at: String,

    /// The date and time the merchant was last updated
    pub updated_at: String,
}

impl From<MerchantRecord> for MerchantResponse {
    fn from(merchant: MerchantRecord) -> Self {
        Self {
            uuid: merchant.uuid.into(),
            clover_merchant_id: merchant.clover_merchant_id,
            name: merchant.name,
            created_at: merchant.created_at.to_string(),
            updated_at: merchant.updated_at.to_string(),
        }
    }
}

/// List Merchants Handler
#[endpoint(
    tags("merchants"),
    summary = "List Merchants",
    responses(
        (status_code = StatusCode::OK, description = "Registered merchants"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<MerchantResponse>>, StatusError> {
    let state = depot.app_state()?;

    let merchants = state
        .app
        .merchants
        .list_merchants()
        .await
        .map_err(into_status_error)?;

    Ok(Json(merchants.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use bitewise_app::domain::merchants::{MockMerchantsService, records::MerchantUuid};

    use crate::test_helpers::merchants_service;

    use super::{super::tests::make_merchant, *};

    #[tokio::test]
    async fn test_list_merchants_hides_access_tokens() -> TestResult {
        let uuid = MerchantUuid::new();
        let merchant = make_merchant(uuid);

        let mut merchants = MockMerchantsService::new();

        merchants
            .expect_list_merchants()
            .once()
            .return_once(move || Ok(vec![merchant]));

        let mut res = TestClient::get("http://example.com/merchants")
            .send(&merchants_service(
                merchants,
                Router::with_path("merchants").get(handler),
            ))
            .await;

        let body = res.take_string().await?;
        let parsed: Vec<MerchantResponse> = serde_json::from_str(&body)?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.first().map(|m| m.uuid), Some(uuid.into_uuid()));
        assert!(
            !body.contains("secret-token"),
            "access token leaked into response: {body}"
        );

        Ok(())
    }
}

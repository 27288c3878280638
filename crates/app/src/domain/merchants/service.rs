//! Merchants service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    clover::AccessToken,
    database::Db,
    domain::merchants::{
        data::NewMerchant,
        errors::MerchantsServiceError,
        records::{MerchantRecord, MerchantUuid},
        repository::PgMerchantsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgMerchantsService {
    db: Db,
    repository: PgMerchantsRepository,
}

impl PgMerchantsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgMerchantsRepository::new(),
        }
    }
}

#[async_trait]
impl MerchantsService for PgMerchantsService {
    #[tracing::instrument(
        name = "merchants.service.create_merchant",
        skip(self, merchant),
        fields(merchant_uuid = %merchant.uuid, clover_merchant_id = %merchant.clover_merchant_id),
        err
    )]
    async fn create_merchant(
        &self,
        merchant: NewMerchant,
    ) -> Result<MerchantRecord, MerchantsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let created = self.repository.create_merchant(&mut tx, merchant).await?;

        tx.commit().await?;

        info!("merchant registered");

        Ok(created)
    }

    async fn list_merchants(&self) -> Result<Vec<MerchantRecord>, MerchantsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let merchants = self.repository.list_merchants(&mut tx).await?;

        tx.commit().await?;

        Ok(merchants)
    }

    async fn get_merchant(
        &self,
        merchant: MerchantUuid,
    ) -> Result<MerchantRecord, MerchantsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let merchant = self.repository.get_merchant(&mut tx, merchant).await?;

        tx.commit().await?;

        Ok(merchant)
    }

    async fn resolve_remote_id(
        &self,
        merchant: MerchantUuid,
    ) -> Result<String, MerchantsServiceError> {
        Ok(self.get_merchant(merchant).await?.clover_merchant_id)
    }

    async fn get_access_token(
        &self,
        clover_merchant_id: &str,
    ) -> Result<AccessToken, MerchantsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let merchant = self
            .repository
            .get_merchant_by_clover_id(&mut tx, clover_merchant_id)
            .await?;

        tx.commit().await?;

        Ok(merchant.access_token)
    }
}

/// Directory of merchants registered with the service, and the Clover
/// credentials used to reach their inventory.
#[automock]
#[async_trait]
pub trait MerchantsService: Send + Sync {
    /// Registers a merchant.
    async fn create_merchant(
        &self,
        merchant: NewMerchant,
    ) -> Result<MerchantRecord, MerchantsServiceError>;

    /// Lists all merchants, oldest first.
    async fn list_merchants(&self) -> Result<Vec<MerchantRecord>, MerchantsServiceError>;

    /// Retrieve a single merchant.
    async fn get_merchant(
        &self,
        merchant: MerchantUuid,
    ) -> Result<MerchantRecord, MerchantsServiceError>;

    /// Maps a local merchant to its Clover merchant id.
    async fn resolve_remote_id(
        &self,
        merchant: MerchantUuid,
    ) -> Result<String, MerchantsServiceError>;

    /// Looks up the stored API token for a Clover merchant id.
    async fn get_access_token(
        &self,
        clover_merchant_id: &str,
    ) -> Result<AccessToken, MerchantsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::{TestContext, helpers};

    use super::*;

    #[tokio::test]
    async fn create_merchant_persists_fields() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = MerchantUuid::new();

        let merchant = ctx
            .merchants
            .create_merchant(NewMerchant {
                uuid,
                clover_merchant_id: "CLOVER123".to_string(),
                name: "Luigi's".to_string(),
                access_token: AccessToken::new("tok_123"),
            })
            .await?;

        assert_eq!(merchant.uuid, uuid);
        assert_eq!(merchant.clover_merchant_id, "CLOVER123");
        assert_eq!(merchant.name, "Luigi's");
        assert_eq!(merchant.access_token.expose(), "tok_123");

        Ok(())
    }

    #[tokio::test]
    async fn create_merchant_with_duplicate_clover_id_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;

        helpers::create_merchant(&ctx, "DUPLICATE").await?;

        let result = helpers::create_merchant(&ctx, "DUPLICATE").await;

        assert!(
            matches!(result, Err(MerchantsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn list_merchants_includes_created_merchants() -> TestResult {
        let ctx = TestContext::new().await;

        let created = helpers::create_merchant(&ctx, "SECOND").await?;

        let merchants = ctx.merchants.list_merchants().await?;
        let uuids: Vec<_> = merchants.iter().map(|m| m.uuid).collect();

        assert_eq!(uuids, vec![ctx.merchant_uuid, created.uuid]);

        Ok(())
    }

    #[tokio::test]
    async fn resolve_remote_id_returns_clover_merchant_id() -> TestResult {
        let ctx = TestContext::new().await;

        let remote = ctx.merchants.resolve_remote_id(ctx.merchant_uuid).await?;

        assert_eq!(remote, helpers::DEFAULT_CLOVER_MERCHANT_ID);

        Ok(())
    }

    #[tokio::test]
    async fn resolve_remote_id_unknown_merchant_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.merchants.resolve_remote_id(MerchantUuid::new()).await;

        assert!(
            matches!(result, Err(MerchantsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn get_access_token_returns_stored_token() -> TestResult {
        let ctx = TestContext::new().await;

        let token = ctx
            .merchants
            .get_access_token(helpers::DEFAULT_CLOVER_MERCHANT_ID)
            .await?;

        assert_eq!(token.expose(), helpers::DEFAULT_ACCESS_TOKEN);

        Ok(())
    }

    #[tokio::test]
    async fn get_access_token_unknown_merchant_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.merchants.get_access_token("MISSING").await;

        assert!(
            matches!(result, Err(MerchantsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}

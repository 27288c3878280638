//! Catalog service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    clover::{
        AccessToken, CloverClient,
        models::{CloverModifierGroup, Expanded},
    },
    domain::{
        catalog::{
            errors::CatalogServiceError,
            records::{Category, Modifier, ModifierGroup, minor_units_to_price},
            tree::build_category_tree,
        },
        merchants::{MerchantsService, records::MerchantUuid},
    },
};

/// [`CatalogService`] reading live inventory from Clover.
#[derive(Clone)]
pub struct RemoteCatalogService {
    merchants: Arc<dyn MerchantsService>,
    clover: Arc<dyn CloverClient>,
}

impl RemoteCatalogService {
    #[must_use]
    pub fn new(merchants: Arc<dyn MerchantsService>, clover: Arc<dyn CloverClient>) -> Self {
        Self { merchants, clover }
    }

    /// Clover merchant id and API token for a local merchant.
    async fn credentials(
        &self,
        merchant: MerchantUuid,
    ) -> Result<(String, AccessToken), CatalogServiceError> {
        let remote_id = self.merchants.resolve_remote_id(merchant).await?;
        let token = self.merchants.get_access_token(&remote_id).await?;

        Ok((remote_id, token))
    }
}

impl Debug for RemoteCatalogService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("RemoteCatalogService").finish_non_exhaustive()
    }
}

#[async_trait]
impl CatalogService for RemoteCatalogService {
    #[tracing::instrument(
        name = "catalog.service.build_category_tree",
        skip(self),
        fields(merchant_uuid = %merchant),
        err
    )]
    async fn build_category_tree(
        &self,
        merchant: MerchantUuid,
    ) -> Result<Vec<Category>, CatalogServiceError> {
        let (remote_id, token) = self.credentials(merchant).await?;

        let (categories, items) = tokio::try_join!(
            self.clover.fetch_categories(&remote_id, &token),
            self.clover.fetch_items(&remote_id, &token),
        )?;

        info!(
            categories = categories.len(),
            items = items.len(),
            "fetched clover catalog"
        );

        Ok(build_category_tree(categories, items))
    }

    #[tracing::instrument(
        name = "catalog.service.list_modifier_groups",
        skip(self),
        fields(merchant_uuid = %merchant),
        err
    )]
    async fn list_modifier_groups(
        &self,
        merchant: MerchantUuid,
    ) -> Result<Vec<ModifierGroup>, CatalogServiceError> {
        let (remote_id, token) = self.credentials(merchant).await?;

        let groups = self
            .clover
            .fetch_modifier_groups(&remote_id, &token)
            .await?;

        Ok(groups.into_iter().map(ModifierGroup::from).collect())
    }
}

impl From<CloverModifierGroup> for ModifierGroup {
    fn from(group: CloverModifierGroup) -> Self {
        Self {
            id: group.id,
            name: group.name,
            min_required: group.min_required,
            max_allowed: group.max_allowed,
            modifiers: group
                .modifiers
                .map(Expanded::into_vec)
                .unwrap_or_default()
                .into_iter()
                .map(|modifier| Modifier {
                    id: modifier.id,
                    name: modifier.name,
                    price: minor_units_to_price(modifier.price),
                })
                .collect(),
        }
    }
}

/// Merchant inventory, shaped for ordering clients.
#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Categories with their purchasable variations, in Clover's order.
    async fn build_category_tree(
        &self,
        merchant: MerchantUuid,
    ) -> Result<Vec<Category>, CatalogServiceError>;

    /// Modifier groups with their modifiers.
    async fn list_modifier_groups(
        &self,
        merchant: MerchantUuid,
    ) -> Result<Vec<ModifierGroup>, CatalogServiceError>;
}

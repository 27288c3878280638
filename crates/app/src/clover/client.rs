//! HTTP Clover client

use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{
    errors::CloverClientError,
    models::{CloverCategory, CloverItem, CloverModifierGroup, Elements},
    token::AccessToken,
};

/// Sandbox host used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://apisandbox.dev.clover.com";

/// Largest page Clover serves for list endpoints.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Connection settings for the Clover REST API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloverConfig {
    /// Scheme and host, e.g. `"https://api.clover.com"`.
    pub base_url: String,

    /// `limit` sent on every list request.
    pub page_size: usize,
}

impl Default for CloverConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Read access to a merchant's Clover inventory.
#[automock]
#[async_trait]
pub trait CloverClient: Send + Sync {
    /// All categories, in Clover's order.
    async fn fetch_categories(
        &self,
        merchant_id: &str,
        token: &AccessToken,
    ) -> Result<Vec<CloverCategory>, CloverClientError>;

    /// All items with their variants and category references expanded.
    async fn fetch_items(
        &self,
        merchant_id: &str,
        token: &AccessToken,
    ) -> Result<Vec<CloverItem>, CloverClientError>;

    /// All modifier groups with their modifiers expanded.
    async fn fetch_modifier_groups(
        &self,
        merchant_id: &str,
        token: &AccessToken,
    ) -> Result<Vec<CloverModifierGroup>, CloverClientError>;
}

/// [`CloverClient`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpCloverClient {
    config: CloverConfig,
    http: Client,
}

impl HttpCloverClient {
    #[must_use]
    pub fn new(config: CloverConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Walk a list endpoint with `limit`/`offset` until a short page comes back.
    async fn fetch_all<T: DeserializeOwned>(
        &self,
        merchant_id: &str,
        token: &AccessToken,
        resource: &str,
        expand: Option<&str>,
    ) -> Result<Vec<T>, CloverClientError> {
        let url = format!(
            "{}/v3/merchants/{merchant_id}/{resource}",
            self.config.base_url.trim_end_matches('/')
        );

        let limit = self.config.page_size.max(1);
        let mut offset = 0_usize;
        let mut elements = Vec::new();

        loop {
            let mut request = self
                .http
                .get(&url)
                .bearer_auth(token.expose())
                .query(&[("limit", limit), ("offset", offset)]);

            if let Some(expand) = expand {
                request = request.query(&[("expand", expand)]);
            }

            let response = request.send().await.map_err(CloverClientError::Transport)?;
            let status = response.status();

            if !status.is_success() {
                let body = match response.text().await {
                    Ok(body) => Some(body),
                    Err(source) => {
                        warn!(%status, resource, "failed to read clover error body: {source}");
                        None
                    }
                };

                warn!(%status, resource, "clover request rejected");

                return Err(CloverClientError::Upstream {
                    status: status.as_u16(),
                    message: upstream_message(status, body),
                });
            }

            let page: Elements<T> = response.json().await.map_err(CloverClientError::Decode)?;
            let fetched = page.elements.len();

            debug!(resource, offset, fetched, "fetched clover page");

            elements.extend(page.elements);

            if fetched < limit {
                break;
            }

            offset = offset.saturating_add(limit);
        }

        Ok(elements)
    }
}

/// Clover's error body, or the status reason when the body is empty or
/// unreadable.
fn upstream_message(status: StatusCode, body: Option<String>) -> String {
    body.filter(|body| !body.trim().is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string()
        })
}

#[async_trait]
impl CloverClient for HttpCloverClient {
    #[tracing::instrument(name = "clover.fetch_categories", skip(self, token), err)]
    async fn fetch_categories(
        &self,
        merchant_id: &str,
        token: &AccessToken,
    ) -> Result<Vec<CloverCategory>, CloverClientError> {
        self.fetch_all(merchant_id, token, "categories", None).await
    }

    #[tracing::instrument(name = "clover.fetch_items", skip(self, token), err)]
    async fn fetch_items(
        &self,
        merchant_id: &str,
        token: &AccessToken,
    ) -> Result<Vec<CloverItem>, CloverClientError> {
        self.fetch_all(merchant_id, token, "items", Some("variants,categories"))
            .await
    }

    #[tracing::instrument(name = "clover.fetch_modifier_groups", skip(self, token), err)]
    async fn fetch_modifier_groups(
        &self,
        merchant_id: &str,
        token: &AccessToken,
    ) -> Result<Vec<CloverModifierGroup>, CloverClientError> {
        self.fetch_all(merchant_id, token, "modifier_groups", Some("modifiers"))
            .await
    }
}

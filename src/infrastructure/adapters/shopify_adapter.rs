use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::config::ShopifyConfig;
use crate::ports::shopify_port::{ShopifyOrder, ShopifyPort};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, error};

/// Per-request deadline for Admin API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Admin API envelope for a single order resource.
#[derive(Debug, Deserialize)]
struct OrderEnvelope {
    order: ShopifyOrder,
}

/// Shopify Admin API adapter.
#[derive(Clone)]
pub struct ShopifyAdapter {
    base_url: String,
    access_token: String,
    client: Client,
}

impl ShopifyAdapter {
    pub fn new(config: ShopifyConfig) -> Self {
        Self {
            base_url: config.admin_url(),
            access_token: config.access_token,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl ShopifyPort for ShopifyAdapter {
    async fn fetch_order(&self, order_id: &str) -> DomainResult<Option<ShopifyOrder>> {
        let url = format!("{}/orders/{}.json", self.base_url, order_id);
        debug!(order_id = %order_id, "fetching order from Shopify");

        let response = self
            .client
            .get(&url)
            .header("X-Shopify-Access-Token", &self.access_token)
            .header("Accept", "application/json")
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!(%status, body = %error_text, "Shopify order lookup failed");
            return Err(DomainError::UpstreamError(format!(
                "order lookup returned {}: {}",
                status, error_text
            )));
        }

        let envelope: OrderEnvelope = response.json().await?;
        Ok(Some(envelope.order))
    }

    async fn create_transaction(&self, order_id: &str, amount: Option<&str>) -> DomainResult<()> {
        let url = format!("{}/orders/{}/transactions.json", self.base_url, order_id);

        // Shopify falls back to the order total when amount is omitted.
        let mut transaction = json!({
            "kind": "sale",
            "status": "success",
        });
        if let Some(amount) = amount {
            transaction["amount"] = json!(amount);
        }
        let body = json!({ "transaction": transaction });

        debug!(order_id = %order_id, "posting sale transaction to Shopify");

        let response = self
            .client
            .post(&url)
            .header("X-Shopify-Access-Token", &self.access_token)
            .json(&body)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!(%status, body = %error_text, "Shopify transaction create failed");
            return Err(DomainError::UpstreamError(format!(
                "transaction create returned {}: {}",
                status, error_text
            )));
        }

        Ok(())
    }
}

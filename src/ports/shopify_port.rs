use crate::domain::DomainResult;
use async_trait::async_trait;
use serde::Deserialize;

/// Order as returned by the Shopify Admin API, reduced to the fields the
/// relay reads.
#[derive(Debug, Clone, Deserialize)]
pub struct ShopifyOrder {
    pub id: u64,
    pub email: Option<String>,
    pub total_price: Option<String>,
    pub customer: Option<ShopifyCustomer>,
    pub shipping_address: Option<ShopifyAddress>,
    pub billing_address: Option<ShopifyAddress>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShopifyCustomer {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShopifyAddress {
    pub address1: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
}

/// Commerce platform operations the relay depends on.
#[async_trait]
pub trait ShopifyPort: Send + Sync {
    /// Look up an order by its numeric id. Returns `None` when the store
    /// has no such order.
    async fn fetch_order(&self, order_id: &str) -> DomainResult<Option<ShopifyOrder>>;

    /// Record a captured payment against an order. `amount` is the settled
    /// amount reported by the gateway; when absent, Shopify applies the
    /// order total.
    async fn create_transaction(&self, order_id: &str, amount: Option<&str>) -> DomainResult<()>;
}

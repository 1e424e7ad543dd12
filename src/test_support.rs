//! Test doubles and fixtures shared by the service and handler tests.

use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::config::AbakaConfig;
use crate::ports::shopify_port::{ShopifyAddress, ShopifyCustomer, ShopifyOrder, ShopifyPort};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Gateway settings used across tests. The shared secret matches the one
/// pinned by the signing unit tests.
pub fn gateway_config() -> AbakaConfig {
    AbakaConfig {
        merchant_id: "M-1001".to_string(),
        shared_secret: "secret".to_string(),
        checkout_url: "https://checkout.abaka.example/pay".to_string(),
    }
}

/// Order with no customer or address data.
pub fn bare_order(id: u64) -> ShopifyOrder {
    ShopifyOrder {
        id,
        email: None,
        total_price: None,
        customer: None,
        shipping_address: None,
        billing_address: None,
    }
}

/// Order with a full customer and both addresses.
pub fn full_order(id: u64) -> ShopifyOrder {
    ShopifyOrder {
        id,
        email: Some("orders@example.com".to_string()),
        total_price: Some("49.99".to_string()),
        customer: Some(ShopifyCustomer {
            first_name: Some("Jane".to_string()),
            last_name: Some("Doe".to_string()),
            email: Some("jane@example.com".to_string()),
            phone: Some("555-0100".to_string()),
        }),
        shipping_address: Some(ShopifyAddress {
            address1: Some("1 Main St".to_string()),
            city: Some("Springfield".to_string()),
            province: Some("IL".to_string()),
            zip: Some("62701".to_string()),
            country: Some("US".to_string()),
            phone: None,
        }),
        billing_address: Some(ShopifyAddress {
            address1: Some("2 Oak Ave".to_string()),
            city: Some("Chicago".to_string()),
            province: Some("IL".to_string()),
            zip: Some("60601".to_string()),
            country: Some("US".to_string()),
            phone: None,
        }),
    }
}

/// Call-recording stand-in for the Shopify adapter.
pub struct MockShopify {
    orders: HashMap<String, ShopifyOrder>,
    pub fetch_calls: Mutex<Vec<String>>,
    pub transactions: Mutex<Vec<(String, Option<String>)>>,
    pub fail_transactions: bool,
}

impl MockShopify {
    pub fn new() -> Self {
        Self {
            orders: HashMap::new(),
            fetch_calls: Mutex::new(Vec::new()),
            transactions: Mutex::new(Vec::new()),
            fail_transactions: false,
        }
    }

    pub fn with_order(order_id: &str, order: ShopifyOrder) -> Self {
        let mut mock = Self::new();
        mock.orders.insert(order_id.to_string(), order);
        mock
    }
}

#[async_trait]
impl ShopifyPort for MockShopify {
    async fn fetch_order(&self, order_id: &str) -> DomainResult<Option<ShopifyOrder>> {
        self.fetch_calls.lock().unwrap().push(order_id.to_string());
        Ok(self.orders.get(order_id).cloned())
    }

    async fn create_transaction(&self, order_id: &str, amount: Option<&str>) -> DomainResult<()> {
        self.transactions
            .lock()
            .unwrap()
            .push((order_id.to_string(), amount.map(String::from)));
        if self.fail_transactions {
            return Err(DomainError::UpstreamError(
                "transaction create returned 500: mock failure".to_string(),
            ));
        }
        Ok(())
    }
}

use serde::{Deserialize, Serialize};

/// Shopify Admin API version the relay is pinned to.
const SHOPIFY_API_VERSION: &str = "2023-01";

/// Abaka gateway settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbakaConfig {
    /// Merchant account id, carried in every signed payload
    pub merchant_id: String,

    /// Shared secret; travels in the payload as `key` and drives the signature
    pub shared_secret: String,

    /// Hosted checkout URL the browser form posts to
    pub checkout_url: String,
}

/// Shopify Admin API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopifyConfig {
    /// Store subdomain, as in `{store}.myshopify.com`
    pub store: String,

    /// Admin API access token
    pub access_token: String,
}

impl ShopifyConfig {
    /// Versioned Admin API base URL for this store.
    pub fn admin_url(&self) -> String {
        format!(
            "https://{}.myshopify.com/admin/api/{}",
            self.store, SHOPIFY_API_VERSION
        )
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Everything the relay reads from the environment, resolved once at startup
/// and injected; business code never touches `std::env`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub abaka: AbakaConfig,
    pub shopify: ShopifyConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            abaka: AbakaConfig {
                merchant_id: std::env::var("ABAKA_MERCHANT_ID")
                    .expect("ABAKA_MERCHANT_ID must be set"),
                shared_secret: std::env::var("ABAKA_SHARED_SECRET")
                    .expect("ABAKA_SHARED_SECRET must be set"),
                checkout_url: std::env::var("ABAKA_CHECKOUT_URL")
                    .unwrap_or_else(|_| "https://checkout.abaka.com/pay".to_string()),
            },
            shopify: ShopifyConfig {
                store: std::env::var("SHOPIFY_STORE").expect("SHOPIFY_STORE must be set"),
                access_token: std::env::var("SHOPIFY_ACCESS_TOKEN")
                    .expect("SHOPIFY_ACCESS_TOKEN must be set"),
            },
            server: ServerConfig {
                host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("SERVER_PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .expect("SERVER_PORT must be a number"),
            },
        }
    }
}

pub mod adapters;
pub mod config;

pub use adapters::ShopifyAdapter;
pub use config::AppConfig;

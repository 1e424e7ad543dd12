pub mod shopify_port;

pub use shopify_port::{ShopifyOrder, ShopifyPort};

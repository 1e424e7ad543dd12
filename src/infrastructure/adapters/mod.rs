pub mod shopify_adapter;

pub use shopify_adapter::ShopifyAdapter;

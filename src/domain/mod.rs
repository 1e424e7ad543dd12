pub mod errors;
pub mod payment;
pub mod redirect;
pub mod signing;

pub use errors::{DomainError, DomainResult};

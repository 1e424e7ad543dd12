use crate::domain::errors::DomainResult;
use base64::{engine::general_purpose, Engine as _};
use sha1::{Digest, Sha1};
use std::collections::BTreeMap;

/// Payload ready for submission to the gateway: the encoded request plus
/// the digest that proves it came from this merchant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedPayload {
    /// Base64 of the canonical JSON object built from the request fields.
    pub data: String,
    /// Base64 of SHA-1(secret || data || secret).
    pub signature: String,
}

/// Sign a flattened payment request with the merchant's shared secret.
///
/// The gateway recomputes the digest over exactly the same bytes, so the
/// JSON form has to be canonical: keys sorted, no whitespace. `BTreeMap`
/// gives the ordering and `serde_json` emits compact JSON by default.
pub fn sign(fields: &BTreeMap<String, String>, shared_secret: &str) -> DomainResult<SignedPayload> {
    let canonical = serde_json::to_string(fields)?;
    let data = general_purpose::STANDARD.encode(canonical.as_bytes());

    let mut hasher = Sha1::new();
    hasher.update(shared_secret.as_bytes());
    hasher.update(data.as_bytes());
    hasher.update(shared_secret.as_bytes());
    let signature = general_purpose::STANDARD.encode(hasher.finalize());

    Ok(SignedPayload { data, signature })
}

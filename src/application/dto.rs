use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Query parameters accepted by the checkout hand-off endpoint.
///
/// Everything is optional at the extraction layer so missing values surface
/// as our own validation errors instead of the framework's rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ProcessPaymentParams {
    /// Numeric Shopify order id
    pub order_id: Option<String>,

    /// Amount to charge, decimal string
    pub amount: Option<String>,

    /// Payer name override, "First Last"
    pub name: Option<String>,

    /// Payer email override
    pub email: Option<String>,
}

/// Notification body posted by the gateway after a checkout attempt.
///
/// Every field is optional on the wire; the reconciler validates the shape
/// itself so a malformed delivery gets our error body.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayNotification {
    /// Delivery-level status, informational only
    pub status: Option<String>,

    /// Outcome of the payment attempt
    pub result: Option<NotificationResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationResult {
    /// Order id the payment was taken for
    pub ext_order_id: Option<String>,

    /// Gateway decision; "Approved" is the only one that settles
    pub status: Option<String>,

    /// Settled amount; a decimal string, though bare numbers are tolerated
    #[serde(default, deserialize_with = "amount_as_string")]
    pub amount: Option<String>,
}

/// The gateway documents `amount` as a decimal string but deliveries may
/// carry a bare JSON number; accept both and keep the text form.
fn amount_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(amount)) => Ok(Some(amount)),
        Some(serde_json::Value::Number(amount)) => Ok(Some(amount.to_string())),
        Some(other) => Err(de::Error::custom(format!("invalid amount: {}", other))),
    }
}

/// Acknowledgement returned to the gateway.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReconcileAck {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ReconcileAck {
    pub fn settled() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn not_approved() -> Self {
        Self {
            success: false,
            message: Some("Payment not approved".to_string()),
        }
    }
}

/// Error body for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: String) -> Self {
        Self { error }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> GatewayNotification {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_amount_accepts_string_or_number() {
        let parsed = parse(r#"{"result":{"ext_order_id":"1","status":"Approved","amount":"49.99"}}"#);
        assert_eq!(parsed.result.unwrap().amount.as_deref(), Some("49.99"));

        let parsed = parse(r#"{"result":{"ext_order_id":"1","status":"Approved","amount":49.99}}"#);
        assert_eq!(parsed.result.unwrap().amount.as_deref(), Some("49.99"));

        let parsed = parse(r#"{"result":{"ext_order_id":"1","status":"Approved","amount":120}}"#);
        assert_eq!(parsed.result.unwrap().amount.as_deref(), Some("120"));
    }

    #[test]
    fn test_amount_absent_or_null_is_none() {
        let parsed = parse(r#"{"result":{"ext_order_id":"1","status":"Approved"}}"#);
        assert_eq!(parsed.result.unwrap().amount, None);

        let parsed = parse(r#"{"result":{"ext_order_id":"1","status":"Approved","amount":null}}"#);
        assert_eq!(parsed.result.unwrap().amount, None);
    }

    #[test]
    fn test_amount_of_wrong_shape_is_rejected() {
        let body = r#"{"result":{"ext_order_id":"1","status":"Approved","amount":true}}"#;
        assert!(serde_json::from_str::<GatewayNotification>(body).is_err());
    }
}

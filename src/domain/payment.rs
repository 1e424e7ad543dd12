use crate::domain::errors::{DomainError, DomainResult};
use std::collections::BTreeMap;
use std::fmt;

/// The gateway settles everything in US dollars.
pub const CURRENCY: &str = "USD";

/// Fixed operation code the gateway expects in every payment payload.
const GATEWAY_ACTION: &str = "pay";

/// Payment amount, kept in the decimal string form it arrived in.
///
/// The relay never does arithmetic on amounts; it validates them once and
/// echoes the original text to the gateway and the commerce platform, so a
/// value like "49.99" survives untouched instead of picking up float noise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amount(String);

impl Amount {
    /// Parse a caller-supplied amount. Must be a finite decimal greater
    /// than zero.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| DomainError::ValidationError("invalid amount".to_string()))?;
        if !value.is_finite() || value <= 0.0 {
            return Err(DomainError::ValidationError("invalid amount".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validate an external order id. Shopify order ids are numeric.
pub fn validate_order_id(raw: &str) -> DomainResult<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DomainError::ValidationError(
            "missing or invalid order id".to_string(),
        ));
    }
    Ok(trimmed)
}

/// Person paying for the order.
#[derive(Debug, Clone)]
pub struct Payer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

/// Billing address in the gateway's flat shape.
#[derive(Debug, Clone)]
pub struct Address {
    pub line1: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

/// Card details in the gateway schema. The relay itself never collects
/// these (the gateway hosts card capture), so they are optional and absent
/// on every request this service builds.
#[derive(Debug, Clone)]
pub struct CardDetails {
    pub number: String,
    pub card_type: String,
    pub expiry_month: String,
    pub expiry_year: String,
    pub cvv: String,
}

/// One payment request in the gateway's field schema, assembled per
/// incoming checkout call and discarded once the redirect is rendered.
#[derive(Debug, Clone)]
pub struct PaymentRequest {
    pub merchant_id: String,
    /// Merchant key; the gateway protocol carries it inside the signed
    /// payload rather than in a header.
    pub key: String,
    pub ext_order_id: String,
    pub amount: Amount,
    pub payer: Payer,
    pub billing_address: Address,
    pub card: Option<CardDetails>,
}

impl PaymentRequest {
    /// Flatten into the gateway's wire schema. A `BTreeMap` keeps the key
    /// order stable, which the signature depends on.
    pub fn to_fields(&self) -> BTreeMap<String, String> {
        let mut fields = BTreeMap::new();
        fields.insert("action".to_string(), GATEWAY_ACTION.to_string());
        fields.insert("merchant_id".to_string(), self.merchant_id.clone());
        fields.insert("key".to_string(), self.key.clone());
        fields.insert("ext_order_id".to_string(), self.ext_order_id.clone());
        fields.insert("amount".to_string(), self.amount.as_str().to_string());
        fields.insert("currency".to_string(), CURRENCY.to_string());
        fields.insert("first_name".to_string(), self.payer.first_name.clone());
        fields.insert("last_name".to_string(), self.payer.last_name.clone());
        fields.insert("email".to_string(), self.payer.email.clone());
        fields.insert("phone".to_string(), self.payer.phone.clone());
        fields.insert("address".to_string(), self.billing_address.line1.clone());
        fields.insert("city".to_string(), self.billing_address.city.clone());
        fields.insert("state".to_string(), self.billing_address.state.clone());
        fields.insert("zip".to_string(), self.billing_address.zip.clone());
        fields.insert("country".to_string(), self.billing_address.country.clone());
        if let Some(card) = &self.card {
            fields.insert("card_number".to_string(), card.number.clone());
            fields.insert("card_type".to_string(), card.card_type.clone());
            fields.insert("expiry_month".to_string(), card.expiry_month.clone());
            fields.insert("expiry_year".to_string(), card.expiry_year.clone());
            fields.insert("cvv".to_string(), card.cvv.clone());
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> PaymentRequest {
        PaymentRequest {
            merchant_id: "M-1001".to_string(),
            key: "s3cret".to_string(),
            ext_order_id: "450789469".to_string(),
            amount: Amount::parse("49.99").unwrap(),
            payer: Payer {
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
                email: "jane@example.com".to_string(),
                phone: "555-0100".to_string(),
            },
            billing_address: Address {
                line1: "1 Main St".to_string(),
                city: "Springfield".to_string(),
                state: "IL".to_string(),
                zip: "62701".to_string(),
                country: "US".to_string(),
            },
            card: None,
        }
    }

    #[test]
    fn test_amount_accepts_positive_decimal() {
        let amount = Amount::parse("49.99").unwrap();
        assert_eq!(amount.as_str(), "49.99");
        assert_eq!(format!("{}", amount), "49.99");
    }

    #[test]
    fn test_amount_trims_whitespace() {
        let amount = Amount::parse(" 10.00 ").unwrap();
        assert_eq!(amount.as_str(), "10.00");
    }

    #[test]
    fn test_amount_rejects_bad_input() {
        for raw in ["-5", "abc", "0", "", "NaN", "inf"] {
            let result = Amount::parse(raw);
            assert!(result.is_err(), "expected {:?} to be rejected", raw);
        }
    }

    #[test]
    fn test_order_id_must_be_numeric() {
        assert_eq!(validate_order_id(" 450789469 ").unwrap(), "450789469");
        assert!(validate_order_id("").is_err());
        assert!(validate_order_id("abc").is_err());
        assert!(validate_order_id("123abc").is_err());
        assert!(validate_order_id("12 34").is_err());
    }

    #[test]
    fn test_fields_cover_gateway_schema() {
        let fields = sample_request().to_fields();

        assert_eq!(fields["action"], "pay");
        assert_eq!(fields["currency"], "USD");
        assert_eq!(fields["merchant_id"], "M-1001");
        assert_eq!(fields["key"], "s3cret");
        assert_eq!(fields["ext_order_id"], "450789469");
        assert_eq!(fields["amount"], "49.99");
        assert_eq!(fields["first_name"], "Jane");
        assert_eq!(fields["address"], "1 Main St");
        assert_eq!(fields["country"], "US");
        assert_eq!(fields.len(), 15);
        assert!(!fields.contains_key("card_number"));
    }

    #[test]
    fn test_fields_include_card_when_present() {
        let mut request = sample_request();
        request.card = Some(CardDetails {
            number: "4111111111111111".to_string(),
            card_type: "visa".to_string(),
            expiry_month: "12".to_string(),
            expiry_year: "2030".to_string(),
            cvv: "123".to_string(),
        });

        let fields = request.to_fields();
        assert_eq!(fields["card_number"], "4111111111111111");
        assert_eq!(fields["expiry_year"], "2030");
        assert_eq!(fields.len(), 20);
    }
}

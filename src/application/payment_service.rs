use crate::application::dto::{GatewayNotification, ProcessPaymentParams, ReconcileAck};
use crate::domain::payment::{self, Address, Amount, Payer, PaymentRequest};
use crate::domain::{redirect, signing, DomainError, DomainResult};
use crate::infrastructure::config::AbakaConfig;
use crate::ports::{ShopifyOrder, ShopifyPort};
use std::sync::Arc;
use tracing::{debug, info};

/// Sentinel the gateway schema tolerates for unknown payer fields.
const UNKNOWN: &str = "unknown";

/// Sentinel for address subfields the order does not carry.
const NOT_AVAILABLE: &str = "N/A";

/// Relay service: turns checkout calls into signed gateway hand-offs and
/// gateway notifications into Shopify transactions.
pub struct PaymentService<S: ShopifyPort> {
    gateway: AbakaConfig,
    shopify: Arc<S>,
}

impl<S: ShopifyPort> PaymentService<S> {
    pub fn new(gateway: AbakaConfig, shopify: Arc<S>) -> Self {
        Self { gateway, shopify }
    }

    /// Build, sign, and wrap one payment request. Returns the HTML document
    /// that posts the payload to the gateway's hosted checkout.
    pub async fn process_payment(&self, params: ProcessPaymentParams) -> DomainResult<String> {
        info!(order_id = ?params.order_id, "payment request received");

        // 1. Validate before touching anything upstream
        let order_id = payment::validate_order_id(params.order_id.as_deref().unwrap_or(""))?
            .to_string();
        let amount = Amount::parse(params.amount.as_deref().unwrap_or(""))?;
        debug!(order_id = %order_id, amount = %amount, "payment request validated");

        // 2. The order must exist before anything gets signed
        let order = self
            .shopify
            .fetch_order(&order_id)
            .await?
            .ok_or_else(|| DomainError::OrderNotFound(order_id.clone()))?;
        debug!(order_id = %order.id, total_price = ?order.total_price, "order resolved");

        // 3. Payer and billing data: caller overrides, then the order, then sentinels
        let payer = resolve_payer(
            &order,
            present(params.name.as_deref()),
            present(params.email.as_deref()),
        );
        let billing_address = resolve_address(&order);

        // 4. Assemble, sign, render
        let request = PaymentRequest {
            merchant_id: self.gateway.merchant_id.clone(),
            key: self.gateway.shared_secret.clone(),
            ext_order_id: order_id.clone(),
            amount,
            payer,
            billing_address,
            card: None,
        };
        let signed = signing::sign(&request.to_fields(), &self.gateway.shared_secret)?;
        let page = redirect::render_redirect(&signed, &self.gateway.checkout_url);

        info!(order_id = %order_id, amount = %request.amount, "checkout hand-off rendered");
        Ok(page)
    }

    /// Apply one gateway notification to the Shopify order it references.
    pub async fn reconcile(&self, notification: GatewayNotification) -> DomainResult<ReconcileAck> {
        info!(status = ?notification.status, "gateway notification received");

        // 1. Shape check; anything malformed gets our 400 body
        let result = notification
            .result
            .ok_or_else(|| DomainError::ValidationError("Invalid webhook payload".to_string()))?;
        let order_id = present(result.ext_order_id.as_deref())
            .ok_or_else(|| DomainError::ValidationError("Invalid webhook payload".to_string()))?
            .to_string();
        let status = present(result.status.as_deref())
            .ok_or_else(|| DomainError::ValidationError("Invalid webhook payload".to_string()))?
            .to_string();
        debug!(order_id = %order_id, status = %status, "notification validated");

        // 2. Look the order up whether or not the payment was approved
        self.shopify
            .fetch_order(&order_id)
            .await?
            .ok_or_else(|| DomainError::OrderNotFound(order_id.clone()))?;

        // 3. Only an exact "Approved" settles the order
        if status != "Approved" {
            info!(order_id = %order_id, status = %status, "payment not approved");
            return Ok(ReconcileAck::not_approved());
        }

        // TODO: redelivered approvals post a second sale; needs a seen-delivery check
        self.shopify
            .create_transaction(&order_id, result.amount.as_deref())
            .await?;

        info!(order_id = %order_id, "order marked paid");
        Ok(ReconcileAck::settled())
    }
}

/// Trim and drop empty strings so blank order fields fall through.
fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn pick_field(primary: Option<&str>, fallback: Option<&str>) -> String {
    present(primary)
        .or_else(|| present(fallback))
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

/// Payer resolution. Caller-supplied name/email win; order data fills the
/// rest; whatever is still missing gets the `unknown` sentinel.
fn resolve_payer(order: &ShopifyOrder, name: Option<&str>, email: Option<&str>) -> Payer {
    let customer = order.customer.as_ref();

    let (first_override, last_override) = match name {
        Some(name) => match name.split_once(char::is_whitespace) {
            Some((first, rest)) => (present(Some(first)), present(Some(rest))),
            None => (Some(name), None),
        },
        None => (None, None),
    };

    let first_name = first_override
        .or_else(|| customer.and_then(|c| present(c.first_name.as_deref())))
        .unwrap_or(UNKNOWN)
        .to_string();
    let last_name = last_override
        .or_else(|| customer.and_then(|c| present(c.last_name.as_deref())))
        .unwrap_or(UNKNOWN)
        .to_string();
    let email = email
        .or_else(|| customer.and_then(|c| present(c.email.as_deref())))
        .or_else(|| present(order.email.as_deref()))
        .unwrap_or(UNKNOWN)
        .to_string();
    let phone = customer
        .and_then(|c| present(c.phone.as_deref()))
        .or_else(|| {
            order
                .shipping_address
                .as_ref()
                .and_then(|a| present(a.phone.as_deref()))
        })
        .or_else(|| {
            order
                .billing_address
                .as_ref()
                .and_then(|a| present(a.phone.as_deref()))
        })
        .unwrap_or(UNKNOWN)
        .to_string();

    Payer {
        first_name,
        last_name,
        email,
        phone,
    }
}

/// Billing block for the gateway, resolved per subfield: shipping address
/// first, billing address second, `N/A` last.
fn resolve_address(order: &ShopifyOrder) -> Address {
    let shipping = order.shipping_address.as_ref();
    let billing = order.billing_address.as_ref();

    Address {
        line1: pick_field(
            shipping.and_then(|a| a.address1.as_deref()),
            billing.and_then(|a| a.address1.as_deref()),
        ),
        city: pick_field(
            shipping.and_then(|a| a.city.as_deref()),
            billing.and_then(|a| a.city.as_deref()),
        ),
        state: pick_field(
            shipping.and_then(|a| a.province.as_deref()),
            billing.and_then(|a| a.province.as_deref()),
        ),
        zip: pick_field(
            shipping.and_then(|a| a.zip.as_deref()),
            billing.and_then(|a| a.zip.as_deref()),
        ),
        country: pick_field(
            shipping.and_then(|a| a.country.as_deref()),
            billing.and_then(|a| a.country.as_deref()),
        ),
    }
}

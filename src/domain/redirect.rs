use crate::domain::signing::SignedPayload;

/// Render the browser hand-off page for a signed payment.
///
/// The gateway's hosted checkout only accepts a form POST, so the relay
/// answers the storefront with a page that carries the payload in hidden
/// fields and submits itself on load. The visible button is the fallback
/// for clients with scripting disabled.
pub fn render_redirect(signed: &SignedPayload, gateway_url: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Redirecting to payment...</title>
</head>
<body onload="document.forms[0].submit()">
  <p>Redirecting to the payment page...</p>
  <form method="POST" action="{action}">
    <input type="hidden" name="data" value="{data}">
    <input type="hidden" name="signature" value="{signature}">
    <button type="submit">Continue to payment</button>
  </form>
</body>
</html>
"#,
        action = escape_attr(gateway_url),
        data = escape_attr(&signed.data),
        signature = escape_attr(&signed.signature),
    )
}

/// Escape a value for use inside a double-quoted HTML attribute.
fn escape_attr(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

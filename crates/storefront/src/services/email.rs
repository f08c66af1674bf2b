//! Transactional email delivery.
//!
//! Invoices are sent through a Resend-compatible HTTP API with the PDF and
//! JSON documents attached. Bodies are rendered from Askama templates in
//! HTML and plain text.

use askama::Template;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::config::EmailConfig;
use crate::services::invoice::{self, Invoice, InvoiceError, InvoiceLine, SaleKind};

/// Errors that can occur when sending email.
#[derive(Debug, Error)]
pub enum EmailError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse a response or build a request.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Template rendering error.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// Invoice documents could not be rendered.
    #[error("Invoice error: {0}")]
    Invoice(#[from] InvoiceError),
}

// =============================================================================
// Templates
// =============================================================================

/// One invoice line, pre-formatted for display.
#[derive(Debug, Clone)]
pub struct LineView {
    pub name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub total: String,
    pub color: Option<String>,
    pub size: Option<String>,
}

impl From<&InvoiceLine> for LineView {
    fn from(line: &InvoiceLine) -> Self {
        Self {
            name: line.name.clone(),
            quantity: line.quantity,
            unit_price: line.unit_price.to_string(),
            total: line.total().to_string(),
            color: line.color.clone().filter(|c| !c.is_empty()),
            size: line.size.clone().filter(|s| !s.is_empty()),
        }
    }
}

/// Amount tendered and change for counter sales.
#[derive(Debug, Clone)]
pub struct PaymentView {
    pub amount_paid: String,
    pub change: String,
}

/// Invoice data shared by all email templates.
#[derive(Debug, Clone)]
pub struct InvoiceView {
    pub customer_name: String,
    pub order_number: String,
    pub date: String,
    pub address: String,
    pub items: Vec<LineView>,
    pub subtotal: String,
    /// `"GRATIS"` when shipping is free, otherwise the amount with currency.
    pub shipping: String,
    pub tax: String,
    pub total: String,
    pub payment: Option<PaymentView>,
}

impl From<&Invoice> for InvoiceView {
    fn from(invoice: &Invoice) -> Self {
        let payment = match invoice.sale {
            SaleKind::Online => None,
            SaleKind::InStore {
                amount_paid,
                change,
            } => Some(PaymentView {
                amount_paid: amount_paid.to_string(),
                change: change.to_string(),
            }),
        };
        let shipping = if invoice.shipping.is_zero() {
            "GRATIS".to_string()
        } else {
            invoice.shipping.with_code()
        };

        Self {
            customer_name: invoice.customer_name.clone(),
            order_number: invoice.order_number.to_string(),
            date: invoice.date_label(),
            address: invoice.billing_address.clone(),
            items: invoice.items.iter().map(LineView::from).collect(),
            subtotal: invoice.subtotal().to_string(),
            shipping,
            tax: invoice.tax.to_string(),
            total: invoice.total().to_string(),
            payment,
        }
    }
}

/// HTML body for online orders.
#[derive(Template)]
#[template(path = "email/order_invoice.html")]
struct OrderInvoiceHtml<'a> {
    invoice: &'a InvoiceView,
}

/// Plain text body for online orders.
#[derive(Template)]
#[template(path = "email/order_invoice.txt")]
struct OrderInvoiceText<'a> {
    invoice: &'a InvoiceView,
}

/// HTML body for in-store sales.
#[derive(Template)]
#[template(path = "email/pos_invoice.html")]
struct PosInvoiceHtml<'a> {
    invoice: &'a InvoiceView,
    payment: &'a PaymentView,
}

/// Plain text body for in-store sales.
#[derive(Template)]
#[template(path = "email/pos_invoice.txt")]
struct PosInvoiceText<'a> {
    invoice: &'a InvoiceView,
    payment: &'a PaymentView,
}

// =============================================================================
// API Types
// =============================================================================

/// A file attached to an email, base64-encoded.
#[derive(Debug, Clone, Serialize)]
pub struct Attachment {
    pub filename: String,
    pub content: String,
}

/// Request body for `POST /emails`.
#[derive(Debug, Clone, Serialize)]
pub struct SendEmailRequest {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    pub text: String,
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: String,
}

// =============================================================================
// Client
// =============================================================================

/// Email API client.
#[derive(Clone)]
pub struct EmailClient {
    client: reqwest::Client,
    endpoint: Url,
    from: String,
}

impl EmailClient {
    /// Create a new email API client.
    ///
    /// # Errors
    ///
    /// Returns error if the API key is not a valid header value, the API
    /// URL cannot take a path, or the HTTP client fails to build.
    pub fn new(config: &EmailConfig) -> Result<Self, EmailError> {
        let mut headers = HeaderMap::new();
        let auth_value = format!("Bearer {}", config.api_key.expose_secret());
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth_value)
                .map_err(|e| EmailError::Parse(format!("Invalid API key format: {e}")))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        let mut endpoint = config.api_url.clone();
        endpoint
            .path_segments_mut()
            .map_err(|()| EmailError::Parse(format!("Invalid API URL: {}", config.api_url)))?
            .pop_if_empty()
            .push("emails");

        Ok(Self {
            client,
            endpoint,
            from: config.from.clone(),
        })
    }

    /// Render an invoice and email it with its PDF and JSON attachments.
    ///
    /// Returns the provider's message id.
    ///
    /// # Errors
    ///
    /// Returns error if rendering fails or the API rejects the message.
    #[tracing::instrument(skip(self, invoice), fields(order_number = %invoice.order_number))]
    pub async fn send_invoice(&self, invoice: &Invoice, to: &str) -> Result<String, EmailError> {
        let request = build_invoice_email(invoice, &self.from, to)?;
        self.send(&request).await
    }

    /// Send a prepared message.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails or returns a non-success status.
    pub async fn send(&self, request: &SendEmailRequest) -> Result<String, EmailError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(EmailError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: SendEmailResponse = response
            .json()
            .await
            .map_err(|e| EmailError::Parse(e.to_string()))?;

        tracing::info!(
            to = ?request.to,
            subject = %request.subject,
            email_id = %body.id,
            "Email sent successfully"
        );
        Ok(body.id)
    }
}

/// Build the invoice email: rendered bodies plus both documents attached.
///
/// # Errors
///
/// Returns error if the invoice or a template fails to render.
pub fn build_invoice_email(
    invoice: &Invoice,
    from: &str,
    to: &str,
) -> Result<SendEmailRequest, EmailError> {
    let rendered = invoice::render(invoice)?;
    let view = InvoiceView::from(invoice);

    let (html, text) = match &view.payment {
        None => (
            OrderInvoiceHtml { invoice: &view }.render()?,
            OrderInvoiceText { invoice: &view }.render()?,
        ),
        Some(payment) => (
            PosInvoiceHtml {
                invoice: &view,
                payment,
            }
            .render()?,
            PosInvoiceText {
                invoice: &view,
                payment,
            }
            .render()?,
        ),
    };

    let stem = invoice.file_stem();
    Ok(SendEmailRequest {
        from: from.to_string(),
        to: vec![to.to_string()],
        subject: invoice.subject(),
        html,
        text,
        attachments: vec![
            Attachment {
                filename: format!("{stem}.pdf"),
                content: BASE64.encode(&rendered.pdf),
            },
            Attachment {
                filename: format!("{stem}.json"),
                content: BASE64.encode(rendered.json.as_bytes()),
            },
        ],
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use secrecy::SecretString;

    use super::*;
    use crate::services::invoice::tests::{in_store_invoice, online_invoice};

    const FROM: &str = "Adventure Works <onboarding@resend.dev>";

    fn config(api_url: &str) -> EmailConfig {
        EmailConfig {
            api_url: Url::parse(api_url).unwrap(),
            api_key: SecretString::from("re_test_key"),
            from: FROM.to_string(),
        }
    }

    #[test]
    fn test_online_invoice_email() {
        let email = build_invoice_email(&online_invoice(), FROM, "maria@example.com").unwrap();

        assert_eq!(email.to, ["maria@example.com"]);
        assert_eq!(email.subject, "Factura Electrónica - Orden AW88123456");
        assert!(email.html.contains("¡Gracias por tu compra, María López!"));
        assert!(email.html.contains("GRATIS"));
        assert!(email.html.contains("Color: Matte Black"));
        assert!(email.html.contains("2-3 días hábiles"));
        assert!(!email.html.contains("Monto Pagado"));
        assert!(email.text.contains("AW88123456"));
        assert!(email.text.contains("$2290.98"));
    }

    #[test]
    fn test_pos_invoice_email() {
        let email = build_invoice_email(&in_store_invoice(), FROM, "ventas@adventureworks.com")
            .unwrap();

        assert_eq!(email.subject, "Factura Venta en Tienda - Orden POS-1760888123456");
        assert!(email.html.contains("VENTA EN TIENDA"));
        assert!(email.html.contains("IVA (13%)"));
        assert!(email.html.contains("Monto Pagado"));
        assert!(email.html.contains("$3.52"));
        assert!(email.text.contains("Cambio: $3.52"));
    }

    #[test]
    fn test_html_body_escapes_customer_input() {
        let mut invoice = online_invoice();
        invoice.customer_name = "<script>alert(1)</script>".to_string();
        let email = build_invoice_email(&invoice, FROM, "maria@example.com").unwrap();
        assert!(!email.html.contains("<script>"));
    }

    #[test]
    fn test_attachments() {
        let email = build_invoice_email(&online_invoice(), FROM, "maria@example.com").unwrap();

        assert_eq!(email.attachments.len(), 2);
        assert_eq!(email.attachments[0].filename, "factura-AW88123456.pdf");
        assert_eq!(email.attachments[1].filename, "factura-AW88123456.json");

        let pdf = BASE64.decode(&email.attachments[0].content).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
        let json = String::from_utf8(BASE64.decode(&email.attachments[1].content).unwrap()).unwrap();
        assert!(json.contains("\"empresa\""));
    }

    #[test]
    fn test_endpoint_appends_emails_path() {
        let client = EmailClient::new(&config("https://api.resend.com")).unwrap();
        assert_eq!(client.endpoint.as_str(), "https://api.resend.com/emails");

        let client = EmailClient::new(&config("http://localhost:8025/v1/")).unwrap();
        assert_eq!(client.endpoint.as_str(), "http://localhost:8025/v1/emails");
    }

    #[tokio::test]
    async fn test_send_to_unreachable_api_fails() {
        let client = EmailClient::new(&config("http://127.0.0.1:9")).unwrap();
        let result = client.send_invoice(&online_invoice(), "maria@example.com").await;
        assert!(matches!(result, Err(EmailError::Http(_))));
    }
}

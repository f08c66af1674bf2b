//! Electronic invoices for online orders and in-store sales.
//!
//! An [`Invoice`] is rendered twice: as an A4 PDF for people and as a JSON
//! document for accounting systems. Both are attached to the invoice email.

pub mod json;
pub mod pdf;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use adventure_works_core::{OrderNumber, Price, ProductId};

/// Company block printed on every invoice.
pub const COMPANY_NAME: &str = "Adventure Works";
pub const COMPANY_ADDRESS: &str = "Calle Principal #123, San Salvador, El Salvador";
pub const COMPANY_PHONE: &str = "+503 2222-3333";
pub const COMPANY_EMAIL: &str = "ventas@adventureworks.com";
pub const COMPANY_NIT: &str = "0614-123456-001-7";

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Errors that can occur while rendering an invoice.
#[derive(Debug, Error)]
pub enum InvoiceError {
    /// PDF generation failed.
    #[error("PDF error: {0}")]
    Pdf(String),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One invoice line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl InvoiceLine {
    /// Unit price × quantity.
    #[must_use]
    pub fn total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }

    /// `"Color: X, Tamaño: Y"` detail text, if the line has either.
    #[must_use]
    pub fn details(&self) -> Option<String> {
        let mut details = Vec::with_capacity(2);
        if let Some(color) = self.color.as_deref().filter(|c| !c.is_empty()) {
            details.push(format!("Color: {color}"));
        }
        if let Some(size) = self.size.as_deref().filter(|s| !s.is_empty()) {
            details.push(format!("Tamaño: {size}"));
        }
        (!details.is_empty()).then(|| details.join(", "))
    }
}

/// Where the sale happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SaleKind {
    /// Web checkout.
    Online,
    /// Point-of-sale sale paid at the counter.
    InStore {
        amount_paid: Price,
        change: Price,
    },
}

/// Everything printed on an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub order_number: OrderNumber,
    pub date: NaiveDate,
    pub customer_name: String,
    pub customer_email: String,
    pub billing_address: String,
    pub items: Vec<InvoiceLine>,
    #[serde(default)]
    pub shipping: Price,
    #[serde(default)]
    pub tax: Price,
    pub sale: SaleKind,
}

impl Invoice {
    /// Sum of line totals, always recomputed from the items.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.items.iter().map(InvoiceLine::total).sum()
    }

    /// Subtotal + shipping + tax.
    #[must_use]
    pub fn total(&self) -> Price {
        self.subtotal() + self.shipping + self.tax
    }

    /// Issue date in Spanish long form (`"19 de octubre de 2026"`).
    #[must_use]
    pub fn date_label(&self) -> String {
        spanish_long_date(self.date)
    }

    /// Invoice type printed in the JSON document.
    #[must_use]
    pub const fn kind_label(&self) -> &'static str {
        match self.sale {
            SaleKind::Online => "Factura Electrónica",
            SaleKind::InStore { .. } => "Factura Electrónica - Venta Física",
        }
    }

    /// Email subject line.
    #[must_use]
    pub fn subject(&self) -> String {
        match self.sale {
            SaleKind::Online => format!("Factura Electrónica - Orden {}", self.order_number),
            SaleKind::InStore { .. } => {
                format!("Factura Venta en Tienda - Orden {}", self.order_number)
            }
        }
    }

    /// Attachment file name without extension.
    #[must_use]
    pub fn file_stem(&self) -> String {
        format!("factura-{}", self.order_number)
    }
}

/// Both renderings of an invoice.
#[derive(Debug, Clone)]
pub struct RenderedInvoice {
    pub pdf: Vec<u8>,
    pub json: String,
}

/// Render the PDF and JSON documents for an invoice.
///
/// # Errors
///
/// Returns `InvoiceError` if either document fails to render.
#[tracing::instrument(skip(invoice), fields(order_number = %invoice.order_number))]
pub fn render(invoice: &Invoice) -> Result<RenderedInvoice, InvoiceError> {
    let pdf = pdf::render(invoice)?;
    let json = json::render(invoice)?;
    tracing::debug!(pdf_bytes = pdf.len(), json_bytes = json.len(), "Invoice rendered");
    Ok(RenderedInvoice { pdf, json })
}

/// Format a date the way Salvadoran invoices print it.
#[must_use]
pub fn spanish_long_date(date: NaiveDate) -> String {
    let month = usize::try_from(date.month0())
        .ok()
        .and_then(|i| MONTHS_ES.get(i))
        .copied()
        .unwrap_or_default();
    format!("{} de {} de {}", date.day(), month, date.year())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use rust_decimal::Decimal;

    use super::*;

    pub(crate) fn usd(cents: i64) -> Price {
        Price::usd(Decimal::new(cents, 2))
    }

    pub(crate) fn line(id: &str, name: &str, quantity: u32, cents: i64) -> InvoiceLine {
        InvoiceLine {
            id: ProductId::new(id),
            name: name.to_string(),
            quantity,
            unit_price: usd(cents),
            color: None,
            size: None,
        }
    }

    pub(crate) fn online_invoice() -> Invoice {
        Invoice {
            order_number: OrderNumber::new("AW88123456"),
            date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            customer_name: "María López".to_string(),
            customer_email: "maria@example.com".to_string(),
            billing_address: "Colonia Escalón, Calle 3, San Salvador".to_string(),
            items: vec![
                InvoiceLine {
                    color: Some("Matte Black".to_string()),
                    size: Some("M".to_string()),
                    ..line("touring-1000", "Touring-1000", 1, 219_900)
                },
                line("tire-road-700c", "Llanta Road Pro 700c", 2, 4599),
            ],
            shipping: Price::zero(),
            tax: Price::zero(),
            sale: SaleKind::Online,
        }
    }

    pub(crate) fn in_store_invoice() -> Invoice {
        Invoice {
            order_number: OrderNumber::new("POS-1760888123456"),
            customer_name: "Consumidor final".to_string(),
            customer_email: "ventas@adventureworks.com".to_string(),
            billing_address: "Venta en tienda física".to_string(),
            items: vec![line("chain-kmc-10sp", "Cadena KMC 10 Velocidades", 2, 2499)],
            tax: usd(650),
            sale: SaleKind::InStore {
                amount_paid: usd(6000),
                change: usd(352),
            },
            ..online_invoice()
        }
    }

    #[test]
    fn test_subtotal_is_sum_of_line_totals() {
        let invoice = online_invoice();
        let expected: Price = invoice.items.iter().map(|l| l.unit_price.times(l.quantity)).sum();
        assert_eq!(invoice.subtotal(), expected);
        assert_eq!(invoice.subtotal(), usd(229_098));
        assert_eq!(invoice.total(), usd(229_098));
    }

    #[test]
    fn test_total_adds_shipping_and_tax() {
        let invoice = in_store_invoice();
        assert_eq!(invoice.subtotal(), usd(4998));
        assert_eq!(invoice.total(), usd(5648));
    }

    #[test]
    fn test_line_details() {
        let invoice = online_invoice();
        assert_eq!(
            invoice.items[0].details().as_deref(),
            Some("Color: Matte Black, Tamaño: M")
        );
        assert_eq!(invoice.items[1].details(), None);

        let size_only = InvoiceLine {
            size: Some("25".to_string()),
            ..invoice.items[1].clone()
        };
        assert_eq!(size_only.details().as_deref(), Some("Tamaño: 25"));
    }

    #[test]
    fn test_subjects_and_labels() {
        let online = online_invoice();
        assert_eq!(online.subject(), "Factura Electrónica - Orden AW88123456");
        assert_eq!(online.kind_label(), "Factura Electrónica");
        assert_eq!(online.file_stem(), "factura-AW88123456");

        let in_store = in_store_invoice();
        assert_eq!(
            in_store.subject(),
            "Factura Venta en Tienda - Orden POS-1760888123456"
        );
        assert_eq!(in_store.kind_label(), "Factura Electrónica - Venta Física");
    }

    #[test]
    fn test_spanish_long_date() {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        assert_eq!(spanish_long_date(date(2026, 10, 19)), "19 de octubre de 2026");
        assert_eq!(spanish_long_date(date(2027, 1, 1)), "1 de enero de 2027");
        assert_eq!(spanish_long_date(date(2025, 9, 30)), "30 de septiembre de 2025");
    }

    #[test]
    fn test_render_produces_both_documents() {
        let rendered = render(&online_invoice()).unwrap();
        assert!(rendered.pdf.starts_with(b"%PDF"));
        assert!(rendered.json.contains("\"numero\": \"AW88123456\""));
    }
}

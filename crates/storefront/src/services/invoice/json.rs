//! JSON invoice document.
//!
//! Keys are Spanish to match what Salvadoran accounting tools expect.
//! Amounts are JSON numbers rounded to cents.

use rust_decimal::Decimal;
use serde::Serialize;

use super::{
    COMPANY_ADDRESS, COMPANY_EMAIL, COMPANY_NAME, COMPANY_NIT, COMPANY_PHONE, Invoice,
    InvoiceError, InvoiceLine, SaleKind,
};

const IN_STORE_SALE_LABEL: &str = "Venta en Tienda Física";

#[derive(Debug, Serialize)]
struct Document<'a> {
    empresa: Company,
    factura: Header<'a>,
    cliente: Customer<'a>,
    productos: Vec<Product<'a>>,
    totales: Totals,
    #[serde(rename = "tipoVenta", skip_serializing_if = "Option::is_none")]
    tipo_venta: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct Company {
    nombre: &'static str,
    direccion: &'static str,
    telefono: &'static str,
    email: &'static str,
    nit: &'static str,
}

#[derive(Debug, Serialize)]
struct Header<'a> {
    numero: &'a str,
    fecha: String,
    tipo: &'static str,
}

#[derive(Debug, Serialize)]
struct Customer<'a> {
    nombre: &'a str,
    email: &'a str,
    direccion: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Product<'a> {
    id: &'a str,
    nombre: &'a str,
    cantidad: u32,
    #[serde(with = "rust_decimal::serde::float")]
    precio_unitario: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    total: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<&'a str>,
    #[serde(rename = "tamaño", skip_serializing_if = "Option::is_none")]
    tamano: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Totals {
    #[serde(with = "rust_decimal::serde::float")]
    subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    envio: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    impuestos: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    total: Decimal,
    #[serde(
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    monto_pagado: Option<Decimal>,
    #[serde(
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    cambio: Option<Decimal>,
    moneda: &'static str,
}

impl<'a> From<&'a InvoiceLine> for Product<'a> {
    fn from(line: &'a InvoiceLine) -> Self {
        Self {
            id: line.id.as_str(),
            nombre: &line.name,
            cantidad: line.quantity,
            precio_unitario: line.unit_price.rounded(),
            total: line.total().rounded(),
            color: line.color.as_deref().filter(|c| !c.is_empty()),
            tamano: line.size.as_deref().filter(|s| !s.is_empty()),
        }
    }
}

/// Render the invoice as a pretty-printed JSON document.
///
/// # Errors
///
/// Returns `InvoiceError::Json` if serialization fails.
pub fn render(invoice: &Invoice) -> Result<String, InvoiceError> {
    let (monto_pagado, cambio, tipo_venta) = match invoice.sale {
        SaleKind::Online => (None, None, None),
        SaleKind::InStore {
            amount_paid,
            change,
        } => (
            Some(amount_paid.rounded()),
            Some(change.rounded()),
            Some(IN_STORE_SALE_LABEL),
        ),
    };

    let document = Document {
        empresa: Company {
            nombre: COMPANY_NAME,
            direccion: COMPANY_ADDRESS,
            telefono: COMPANY_PHONE,
            email: COMPANY_EMAIL,
            nit: COMPANY_NIT,
        },
        factura: Header {
            numero: invoice.order_number.as_str(),
            fecha: invoice.date_label(),
            tipo: invoice.kind_label(),
        },
        cliente: Customer {
            nombre: &invoice.customer_name,
            email: &invoice.customer_email,
            direccion: &invoice.billing_address,
        },
        productos: invoice.items.iter().map(Product::from).collect(),
        totales: Totals {
            subtotal: invoice.subtotal().rounded(),
            envio: invoice.shipping.rounded(),
            impuestos: invoice.tax.rounded(),
            total: invoice.total().rounded(),
            monto_pagado,
            cambio,
            moneda: invoice.total().currency_code.code(),
        },
        tipo_venta,
    };

    Ok(serde_json::to_string_pretty(&document)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::Value;

    use super::super::tests::{in_store_invoice, online_invoice};
    use super::*;

    fn assert_amount(value: &Value, expected: f64) {
        let actual = value.as_f64().unwrap();
        assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
    }

    fn parse(invoice: &Invoice) -> Value {
        serde_json::from_str(&render(invoice).unwrap()).unwrap()
    }

    #[test]
    fn test_online_document() {
        let doc = parse(&online_invoice());

        assert_eq!(doc["empresa"]["nombre"], "Adventure Works");
        assert_eq!(doc["empresa"]["nit"], "0614-123456-001-7");
        assert_eq!(doc["factura"]["numero"], "AW88123456");
        assert_eq!(doc["factura"]["fecha"], "19 de octubre de 2026");
        assert_eq!(doc["factura"]["tipo"], "Factura Electrónica");
        assert_eq!(doc["cliente"]["nombre"], "María López");

        let bike = &doc["productos"][0];
        assert_eq!(bike["id"], "touring-1000");
        assert_eq!(bike["cantidad"], 1);
        assert_amount(&bike["precioUnitario"], 2199.0);
        assert_eq!(bike["color"], "Matte Black");
        assert_eq!(bike["tamaño"], "M");

        let tire = &doc["productos"][1];
        assert_amount(&tire["total"], 91.98);
        assert!(tire.get("color").is_none());
        assert!(tire.get("tamaño").is_none());

        let totals = &doc["totales"];
        assert_amount(&totals["subtotal"], 2290.98);
        assert_amount(&totals["envio"], 0.0);
        assert_amount(&totals["total"], 2290.98);
        assert_eq!(totals["moneda"], "USD");
        assert!(totals.get("montoPagado").is_none());
        assert!(doc.get("tipoVenta").is_none());
    }

    #[test]
    fn test_in_store_document() {
        let doc = parse(&in_store_invoice());

        assert_eq!(doc["factura"]["tipo"], "Factura Electrónica - Venta Física");
        assert_eq!(doc["tipoVenta"], "Venta en Tienda Física");

        let totals = &doc["totales"];
        assert_amount(&totals["impuestos"], 6.5);
        assert_amount(&totals["total"], 56.48);
        assert_amount(&totals["montoPagado"], 60.0);
        assert_amount(&totals["cambio"], 3.52);
    }

    #[test]
    fn test_output_is_pretty_printed() {
        let json = render(&online_invoice()).unwrap();
        assert!(json.contains("\n  \"empresa\": {"));
    }
}

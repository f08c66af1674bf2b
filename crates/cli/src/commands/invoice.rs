//! Offline invoice rendering.
//!
//! Renders the same PDF and JSON documents the storefront attaches to
//! invoice emails, without sending anything.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use rust_decimal::Decimal;

use adventure_works_core::{OrderNumber, Price, ProductId};
use adventure_works_storefront::services::invoice::{self, Invoice, InvoiceLine, SaleKind};
use adventure_works_storefront::services::pos::IVA_RATE;

/// Errors from the invoice commands.
#[derive(Debug, thiserror::Error)]
pub enum InvoiceCommandError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid invoice file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Render(#[from] invoice::InvoiceError),

    #[error("Order number {0:?} cannot be used in a file name")]
    UnsafeOrderNumber(String),
}

/// Order numbers end up in output file names, so only letters, digits and
/// `-` are accepted.
fn check_order_number(order_number: &OrderNumber) -> Result<(), InvoiceCommandError> {
    let value = order_number.as_str();
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        Ok(())
    } else {
        Err(InvoiceCommandError::UnsafeOrderNumber(value.to_string()))
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> InvoiceCommandError + '_ {
    move |source| InvoiceCommandError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Render `input` into `factura-<order>.pdf` and `.json` under `out_dir`.
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed, rendering fails,
/// or the output cannot be written.
pub fn render(input: &Path, out_dir: &Path) -> Result<(), InvoiceCommandError> {
    let raw = fs::read_to_string(input).map_err(io_error(input))?;
    let invoice: Invoice = serde_json::from_str(&raw)?;
    check_order_number(&invoice.order_number)?;
    let rendered = invoice::render(&invoice)?;

    fs::create_dir_all(out_dir).map_err(io_error(out_dir))?;
    let pdf_path = out_dir.join(format!("{}.pdf", invoice.file_stem()));
    let json_path = out_dir.join(format!("{}.json", invoice.file_stem()));
    fs::write(&pdf_path, &rendered.pdf).map_err(io_error(&pdf_path))?;
    fs::write(&json_path, &rendered.json).map_err(io_error(&json_path))?;

    tracing::info!(
        pdf = %pdf_path.display(),
        json = %json_path.display(),
        total = %invoice.total(),
        "Invoice rendered"
    );
    Ok(())
}

/// Print an example invoice file to stdout.
///
/// # Errors
///
/// Returns an error if the example cannot be serialized.
#[allow(clippy::print_stdout)]
pub fn sample(in_store: bool) -> Result<(), InvoiceCommandError> {
    let invoice = sample_invoice(in_store);

    println!("{}", serde_json::to_string_pretty(&invoice)?);
    Ok(())
}

fn sample_invoice(in_store: bool) -> Invoice {
    let items = vec![
        InvoiceLine {
            id: ProductId::new("touring-1000"),
            name: "Touring-1000".to_string(),
            quantity: 1,
            unit_price: Price::usd(Decimal::new(219_900, 2)),
            color: Some("Matte Black".to_string()),
            size: Some("M".to_string()),
        },
        InvoiceLine {
            id: ProductId::new("chain-kmc-10sp"),
            name: "Cadena KMC 10 Velocidades".to_string(),
            quantity: 2,
            unit_price: Price::usd(Decimal::new(2_499, 2)),
            color: None,
            size: None,
        },
    ];
    let subtotal: Price = items.iter().map(InvoiceLine::total).sum();

    if in_store {
        let tax = subtotal.scaled(IVA_RATE);
        let amount_paid = Price::usd(Decimal::new(300_000, 2));
        Invoice {
            order_number: OrderNumber::point_of_sale_now(),
            date: Utc::now().date_naive(),
            customer_name: "Consumidor final".to_string(),
            customer_email: "ventas@adventureworks.com".to_string(),
            billing_address: "Venta en tienda física".to_string(),
            items,
            shipping: Price::zero(),
            tax,
            sale: SaleKind::InStore {
                amount_paid,
                change: amount_paid - (subtotal + tax),
            },
        }
    } else {
        Invoice {
            order_number: OrderNumber::online_now(),
            date: Utc::now().date_naive(),
            customer_name: "María López".to_string(),
            customer_email: "maria.lopez@example.com".to_string(),
            billing_address: "Colonia Escalón, Calle La Mascota #45, San Salvador".to_string(),
            items,
            shipping: Price::zero(),
            tax: Price::zero(),
            sale: SaleKind::Online,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_invoices_parse_back() {
        for in_store in [false, true] {
            let invoice = sample_invoice(in_store);
            let json = serde_json::to_string(&invoice).unwrap();
            let parsed: Invoice = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, invoice);
        }
    }

    #[test]
    fn test_in_store_sample_change() {
        let invoice = sample_invoice(true);
        let SaleKind::InStore { change, .. } = invoice.sale else {
            panic!("expected an in-store sale");
        };
        assert!(!change.is_negative());
        assert_eq!(invoice.subtotal().to_string(), "$2248.98");
    }

    #[test]
    fn test_order_number_must_be_file_safe() {
        assert!(check_order_number(&OrderNumber::new("AW12345678")).is_ok());
        assert!(check_order_number(&OrderNumber::new("POS-1760000000000")).is_ok());
        for bad in ["../x", "a/b", "a\\b", "", ".."] {
            assert!(matches!(
                check_order_number(&OrderNumber::new(bad)),
                Err(InvoiceCommandError::UnsafeOrderNumber(_))
            ));
        }
    }

    #[test]
    fn test_render_rejects_path_in_order_number() {
        let dir = std::env::temp_dir().join(format!("aw-cli-unsafe-{}", std::process::id()));
        let input = dir.join("invoice.json");
        fs::create_dir_all(&dir).unwrap();
        let mut invoice = sample_invoice(false);
        invoice.order_number = OrderNumber::new("../escaped");
        fs::write(&input, serde_json::to_string(&invoice).unwrap()).unwrap();

        let result = render(&input, &dir.join("out"));

        assert!(matches!(result, Err(InvoiceCommandError::UnsafeOrderNumber(_))));
        assert!(!dir.join("escaped.pdf").exists());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_render_writes_both_files() {
        let dir = std::env::temp_dir().join(format!("aw-cli-test-{}", std::process::id()));
        let input = dir.join("invoice.json");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            &input,
            serde_json::to_string(&sample_invoice(false)).unwrap(),
        )
        .unwrap();

        render(&input, &dir.join("out")).unwrap();

        let files: Vec<_> = fs::read_dir(dir.join("out"))
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.starts_with("factura-AW") && f.ends_with(".pdf")));
        assert!(files.iter().any(|f| f.ends_with(".json")));

        fs::remove_dir_all(&dir).unwrap();
    }
}

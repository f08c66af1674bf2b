//! Point-of-sale ticket for counter sales.
//!
//! The operator scans product codes into a ticket, takes payment in cash and
//! the customer gets an emailed invoice. Unlike the online cart, lines are
//! keyed by product code alone and totals carry 13% IVA.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use adventure_works_core::{Email, OrderNumber, Price, ProductId};

use crate::catalog;
use crate::models::session_keys;
use crate::services::invoice::{Invoice, InvoiceLine, SaleKind};

/// Salvadoran VAT (IVA).
pub const IVA_RATE: Decimal = Decimal::from_parts(13, 0, 0, false, 2);

/// Customer name printed when none is given.
pub const DEFAULT_CUSTOMER_NAME: &str = "Consumidor final";

/// Address printed when none is given.
pub const DEFAULT_CUSTOMER_ADDRESS: &str = "Venta en tienda física";

/// Errors raised by ticket operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PosError {
    #[error("No se encontró el producto con código: {0}")]
    UnknownProduct(String),
    #[error("Agrega productos antes de procesar el pago")]
    EmptyTicket,
    #[error("El monto pagado debe ser mayor o igual al total")]
    InsufficientPayment,
    #[error("Correo electrónico inválido: {0}")]
    InvalidEmail(String),
}

impl PosError {
    /// Short heading shown to the operator.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::UnknownProduct(_) => "Producto no encontrado",
            Self::EmptyTicket => "Carrito vacío",
            Self::InsufficientPayment => "Monto insuficiente",
            Self::InvalidEmail(_) => "Correo inválido",
        }
    }
}

/// One ticket line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosItem {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub quantity: u32,
}

impl PosItem {
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// Optional customer details captured at the counter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaleCustomer {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
}

/// A completed counter sale, ready to be emailed.
#[derive(Debug, Clone)]
pub struct PosSale {
    pub invoice: Invoice,
    /// Invoice recipient: the customer, or the store mailbox.
    pub recipient: Email,
    pub change: Price,
}

/// The ticket being rung up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosTicket {
    items: Vec<PosItem>,
}

impl PosTicket {
    #[must_use]
    pub fn items(&self) -> &[PosItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add one unit of the product with this code.
    ///
    /// # Errors
    ///
    /// Returns `PosError::UnknownProduct` if the code is not in the catalog.
    pub fn scan(&mut self, code: &str) -> Result<&PosItem, PosError> {
        let code = code.trim();
        let unknown = || PosError::UnknownProduct(code.to_string());
        let product = catalog::find(code).ok_or_else(unknown)?;

        match self.position(code) {
            Some(index) => {
                let line = self.items.get_mut(index).ok_or_else(unknown)?;
                line.quantity = line.quantity.saturating_add(1);
                Ok(&*line)
            }
            None => {
                self.items.push(PosItem {
                    id: ProductId::new(product.id),
                    name: product.name.to_string(),
                    price: product.price(),
                    quantity: 1,
                });
                self.items.last().ok_or_else(unknown)
            }
        }
    }

    /// Set a line's quantity; zero or less removes it.
    pub fn update_quantity(&mut self, code: &str, quantity: i64) {
        match u32::try_from(quantity) {
            Ok(0) | Err(_) if quantity <= 0 => self.remove(code),
            Ok(quantity) => {
                if let Some(line) = self.items.iter_mut().find(|l| l.id.as_str() == code) {
                    line.quantity = quantity;
                }
            }
            Err(_) => {}
        }
    }

    pub fn remove(&mut self, code: &str) {
        self.items.retain(|line| line.id.as_str() != code);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of quantities.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |sum, line| sum.saturating_add(line.quantity))
    }

    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.items.iter().map(PosItem::line_total).sum()
    }

    /// IVA on the subtotal, unrounded.
    #[must_use]
    pub fn tax(&self) -> Price {
        self.subtotal().scaled(IVA_RATE)
    }

    #[must_use]
    pub fn total(&self) -> Price {
        self.subtotal() + self.tax()
    }

    /// Change owed for a tendered amount. Negative when short.
    #[must_use]
    pub fn change(&self, tendered: Price) -> Price {
        tendered - self.total()
    }

    /// Close the sale and build its invoice. The ticket is left untouched;
    /// clear it once the invoice is delivered.
    ///
    /// # Errors
    ///
    /// Returns `PosError::EmptyTicket` for an empty ticket,
    /// `PosError::InsufficientPayment` if `tendered` does not cover the
    /// total, or `PosError::InvalidEmail` for a malformed customer email.
    pub fn complete(
        &self,
        tendered: Option<Price>,
        customer: &SaleCustomer,
        fallback_recipient: &Email,
        order_number: OrderNumber,
        date: NaiveDate,
    ) -> Result<PosSale, PosError> {
        if self.is_empty() {
            return Err(PosError::EmptyTicket);
        }

        let total = self.total();
        let tendered = tendered
            .filter(|amount| amount.amount >= total.amount)
            .ok_or(PosError::InsufficientPayment)?;
        let change = self.change(tendered);

        let email = customer.email.trim();
        let recipient = if email.is_empty() {
            fallback_recipient.clone()
        } else {
            Email::parse(email).map_err(|_| PosError::InvalidEmail(email.to_string()))?
        };

        let items = self
            .items
            .iter()
            .map(|item| InvoiceLine {
                id: item.id.clone(),
                name: item.name.clone(),
                quantity: item.quantity,
                unit_price: item.price,
                color: None,
                size: None,
            })
            .collect();

        let invoice = Invoice {
            order_number,
            date,
            customer_name: non_empty_or(&customer.name, DEFAULT_CUSTOMER_NAME),
            customer_email: recipient.to_string(),
            billing_address: non_empty_or(&customer.address, DEFAULT_CUSTOMER_ADDRESS),
            items,
            shipping: Price::zero(),
            tax: self.tax(),
            sale: SaleKind::InStore {
                amount_paid: tendered,
                change,
            },
        };

        Ok(PosSale {
            invoice,
            recipient,
            change,
        })
    }

    fn position(&self, code: &str) -> Option<usize> {
        self.items.iter().position(|line| line.id.as_str() == code)
    }
}

/// Parse an amount typed at the counter (`"60"`, `"60.5"`, `"$60.50"`).
#[must_use]
pub fn parse_amount(input: &str) -> Option<Price> {
    let cleaned = input.trim().trim_start_matches('$').trim();
    Decimal::from_str(cleaned)
        .ok()
        .filter(|amount| !amount.is_sign_negative())
        .map(Price::usd)
}

fn non_empty_or(value: &str, default: &str) -> String {
    let value = value.trim();
    if value.is_empty() { default } else { value }.to_string()
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the ticket from the session, or an empty ticket if there is none.
///
/// # Errors
///
/// Returns an error if the session store cannot be read.
pub async fn load(session: &Session) -> Result<PosTicket, tower_sessions::session::Error> {
    Ok(session
        .get::<PosTicket>(session_keys::POS_TICKET)
        .await?
        .unwrap_or_default())
}

/// Persist the ticket to the session.
///
/// # Errors
///
/// Returns an error if the session store cannot be written.
pub async fn save(
    session: &Session,
    ticket: &PosTicket,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::POS_TICKET, ticket).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn usd(cents: i64) -> Price {
        Price::usd(Decimal::new(cents, 2))
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn store_mailbox() -> Email {
        Email::parse("ventas@adventureworks.com").unwrap()
    }

    fn ticket_with_chains() -> PosTicket {
        let mut ticket = PosTicket::default();
        ticket.scan("chain-kmc-10sp").unwrap();
        ticket.scan("chain-kmc-10sp").unwrap();
        ticket
    }

    #[test]
    fn test_scan_adds_then_increments() {
        let mut ticket = PosTicket::default();
        let line = ticket.scan("  touring-1000 ").unwrap();
        assert_eq!(line.name, "Touring-1000");
        assert_eq!(line.quantity, 1);

        let line = ticket.scan("touring-1000").unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(ticket.items().len(), 1);
    }

    #[test]
    fn test_scan_unknown_code() {
        let mut ticket = PosTicket::default();
        let err = ticket.scan("XYZ-999").unwrap_err();
        assert_eq!(err, PosError::UnknownProduct("XYZ-999".to_string()));
        assert_eq!(err.title(), "Producto no encontrado");
        assert_eq!(
            err.to_string(),
            "No se encontró el producto con código: XYZ-999"
        );
        assert!(ticket.is_empty());
    }

    #[test]
    fn test_update_and_remove() {
        let mut ticket = ticket_with_chains();
        ticket.scan("lights-rear-usb").unwrap();

        ticket.update_quantity("chain-kmc-10sp", 5);
        assert_eq!(ticket.items()[0].quantity, 5);

        ticket.update_quantity("chain-kmc-10sp", 0);
        assert_eq!(ticket.items().len(), 1);

        ticket.update_quantity("lights-rear-usb", -1);
        assert!(ticket.is_empty());

        ticket.scan("lights-rear-usb").unwrap();
        ticket.remove("lights-rear-usb");
        assert!(ticket.is_empty());
    }

    #[test]
    fn test_totals_with_iva() {
        let ticket = ticket_with_chains();
        // 2 × 24.99
        assert_eq!(ticket.subtotal(), usd(4998));
        assert_eq!(ticket.tax().amount, Decimal::new(64_974, 4));
        assert_eq!(ticket.total().amount, Decimal::new(564_774, 4));
        assert_eq!(ticket.total().to_string(), "$56.48");
        assert_eq!(ticket.change(usd(6000)).to_string(), "$3.52");
        assert_eq!(ticket.total_items(), 2);
    }

    #[test]
    fn test_complete_empty_ticket() {
        let err = PosTicket::default()
            .complete(
                Some(usd(1000)),
                &SaleCustomer::default(),
                &store_mailbox(),
                OrderNumber::point_of_sale(1),
                today(),
            )
            .unwrap_err();
        assert_eq!(err, PosError::EmptyTicket);
        assert_eq!(err.title(), "Carrito vacío");
    }

    #[test]
    fn test_complete_insufficient_payment() {
        let ticket = ticket_with_chains();
        for tendered in [None, Some(usd(5647))] {
            let err = ticket
                .complete(
                    tendered,
                    &SaleCustomer::default(),
                    &store_mailbox(),
                    OrderNumber::point_of_sale(1),
                    today(),
                )
                .unwrap_err();
            assert_eq!(err, PosError::InsufficientPayment);
        }
    }

    #[test]
    fn test_complete_with_defaults() {
        let ticket = ticket_with_chains();
        let sale = ticket
            .complete(
                Some(usd(6000)),
                &SaleCustomer::default(),
                &store_mailbox(),
                OrderNumber::point_of_sale(1_760_888_123_456),
                today(),
            )
            .unwrap();

        assert_eq!(sale.recipient, store_mailbox());
        assert_eq!(sale.change.to_string(), "$3.52");
        assert_eq!(sale.invoice.order_number.as_str(), "POS-1760888123456");
        assert_eq!(sale.invoice.customer_name, "Consumidor final");
        assert_eq!(sale.invoice.billing_address, "Venta en tienda física");
        assert_eq!(sale.invoice.total(), ticket.total());
        assert!(matches!(sale.invoice.sale, SaleKind::InStore { .. }));
    }

    #[test]
    fn test_complete_exact_payment_with_customer() {
        let ticket = ticket_with_chains();
        let customer = SaleCustomer {
            name: "Carlos Rivas".to_string(),
            email: "carlos@example.com".to_string(),
            address: "Santa Tecla".to_string(),
        };
        let sale = ticket
            .complete(
                Some(ticket.total()),
                &customer,
                &store_mailbox(),
                OrderNumber::point_of_sale(2),
                today(),
            )
            .unwrap();

        assert_eq!(sale.recipient.as_str(), "carlos@example.com");
        assert!(sale.change.is_zero());
        assert_eq!(sale.invoice.customer_name, "Carlos Rivas");
    }

    #[test]
    fn test_complete_rejects_bad_email() {
        let customer = SaleCustomer {
            email: "not-an-email".to_string(),
            ..SaleCustomer::default()
        };
        let err = ticket_with_chains()
            .complete(
                Some(usd(10_000)),
                &customer,
                &store_mailbox(),
                OrderNumber::point_of_sale(3),
                today(),
            )
            .unwrap_err();
        assert!(matches!(err, PosError::InvalidEmail(_)));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("60"), Some(usd(6000)));
        assert_eq!(parse_amount(" $60.50 "), Some(usd(6050)));
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("-5"), None);
    }
}

//! Online checkout: card validation, simulated payment, invoice assembly.
//!
//! No payment processor is involved. Card fields are validated for input
//! hygiene only, then a simulated processor approves the charge with a
//! configurable probability after a fixed delay.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use adventure_works_core::{
    CardNumber, Cvv, ExpiryDate, OrderNumber, Price, format_card_number, format_expiry_date,
};

use crate::config::CheckoutConfig;
use crate::models::CurrentCustomer;
use crate::services::cart::Cart;
use crate::services::invoice::{Invoice, InvoiceLine, SaleKind};

/// Field-level validation messages keyed by form field name.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

/// Raw checkout form as submitted.
#[derive(Debug, Default, Deserialize)]
pub struct CheckoutForm {
    #[serde(default)]
    pub card_number: String,
    #[serde(default)]
    pub expiry_date: String,
    #[serde(default)]
    pub cvv: String,
    #[serde(default)]
    pub billing_address: String,
}

/// Card details that passed validation.
#[derive(Debug, Clone)]
pub struct ValidatedPayment {
    pub card: CardNumber,
    pub expiry: ExpiryDate,
    pub cvv: Cvv,
    pub billing_address: String,
}

/// Form values sent back with field errors so the form can be refilled in
/// display format. The CVV is never echoed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutFormValues {
    pub card_number: String,
    pub expiry_date: String,
    pub billing_address: String,
}

impl CheckoutForm {
    /// The submitted values in display format: card number grouped in fours,
    /// expiry as `MM/YY`.
    #[must_use]
    pub fn display_values(&self) -> CheckoutFormValues {
        CheckoutFormValues {
            card_number: format_card_number(&self.card_number),
            expiry_date: format_expiry_date(&self.expiry_date),
            billing_address: self.billing_address.trim().to_string(),
        }
    }

    /// Validate every field, collecting one message per invalid field.
    ///
    /// # Errors
    ///
    /// Returns the field errors if any field is missing or invalid.
    pub fn validate(&self, today: NaiveDate) -> Result<ValidatedPayment, FieldErrors> {
        let mut errors = FieldErrors::new();

        let card = if self.card_number.trim().is_empty() {
            errors.insert("card_number", "El número de tarjeta es requerido");
            None
        } else {
            CardNumber::parse(&self.card_number)
                .map_err(|_| errors.insert("card_number", "Número de tarjeta inválido"))
                .ok()
        };

        let expiry = if self.expiry_date.trim().is_empty() {
            errors.insert("expiry_date", "La fecha de vencimiento es requerida");
            None
        } else {
            ExpiryDate::parse(&self.expiry_date)
                .ok()
                .filter(|expiry| expiry.is_valid_on(today))
                .or_else(|| {
                    errors.insert("expiry_date", "Fecha de vencimiento inválida o expirada");
                    None
                })
        };

        let cvv = if self.cvv.trim().is_empty() {
            errors.insert("cvv", "El CVV es requerido");
            None
        } else {
            Cvv::parse(&self.cvv)
                .map_err(|_| errors.insert("cvv", "CVV inválido"))
                .ok()
        };

        let billing_address = self.billing_address.trim();
        if billing_address.is_empty() {
            errors.insert(
                "billing_address",
                "La dirección de facturación es requerida",
            );
        }

        match (card, expiry, cvv) {
            (Some(card), Some(expiry), Some(cvv)) if errors.is_empty() => Ok(ValidatedPayment {
                card,
                expiry,
                cvv,
                billing_address: billing_address.to_string(),
            }),
            _ => Err(errors),
        }
    }
}

/// Result of a simulated charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentOutcome {
    Approved,
    Declined,
}

/// Stand-in for a payment processor.
#[derive(Debug, Clone, Copy)]
pub struct PaymentSimulator {
    approval_rate: f64,
    delay: Duration,
}

impl PaymentSimulator {
    #[must_use]
    pub const fn new(config: CheckoutConfig) -> Self {
        Self {
            approval_rate: config.approval_rate,
            delay: config.processing_delay,
        }
    }

    /// Wait out the processing delay, then approve or decline at random.
    #[tracing::instrument(skip(self, payment), fields(card_last_four = %payment.card.last_four()))]
    pub async fn charge(&self, payment: &ValidatedPayment, amount: Price) -> PaymentOutcome {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let outcome = if rand::random_bool(self.approval_rate.clamp(0.0, 1.0)) {
            PaymentOutcome::Approved
        } else {
            PaymentOutcome::Declined
        };
        tracing::info!(%amount, ?outcome, "Simulated charge");
        outcome
    }
}

/// Build the invoice for an approved online order.
///
/// Shipping is free and online orders carry no tax.
#[must_use]
pub fn build_invoice(
    cart: &Cart,
    order_number: OrderNumber,
    date: NaiveDate,
    customer: &CurrentCustomer,
    billing_address: &str,
) -> Invoice {
    let items = cart
        .items()
        .iter()
        .map(|item| InvoiceLine {
            id: item.id.clone(),
            name: item.name.clone(),
            quantity: item.quantity,
            unit_price: item.price,
            color: Some(item.color.clone()).filter(|c| !c.is_empty()),
            size: Some(item.size.clone()).filter(|s| !s.is_empty()),
        })
        .collect();

    Invoice {
        order_number,
        date,
        customer_name: customer.display_name(),
        customer_email: customer.email.to_string(),
        billing_address: billing_address.to_string(),
        items,
        shipping: Price::zero(),
        tax: Price::zero(),
        sale: SaleKind::Online,
    }
}

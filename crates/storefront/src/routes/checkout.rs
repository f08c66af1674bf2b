//! Checkout route handlers.
//!
//! `POST /checkout` validates the card form, runs the simulated charge and,
//! on approval, emails the invoice to a signed-in customer and clears the
//! cart. The attempt's [`PaymentStatus`] is kept in the session so a second
//! submission cannot start while one is processing.

use axum::{Form, Json, extract::State};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use adventure_works_core::{OrderNumber, PaymentStatus};

use crate::error::{AppError, Result, add_breadcrumb};
use crate::middleware::OptionalAuth;
use crate::models::session_keys;
use crate::services::cart;
use crate::services::checkout::{CheckoutForm, PaymentOutcome, build_invoice};
use crate::state::AppState;

/// A processing attempt older than this is considered abandoned.
const STALE_PROCESSING_MS: i64 = 60_000;

/// Checkout status as stored in the session.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct CheckoutAttempt {
    status: PaymentStatus,
    updated_at_ms: i64,
}

impl CheckoutAttempt {
    fn now(status: PaymentStatus) -> Self {
        Self {
            status,
            updated_at_ms: Utc::now().timestamp_millis(),
        }
    }

    /// Status with abandoned processing attempts (client went away
    /// mid-charge) treated as errors.
    fn effective_status(&self, now_ms: i64) -> PaymentStatus {
        if self.status == PaymentStatus::Processing
            && now_ms - self.updated_at_ms > STALE_PROCESSING_MS
        {
            PaymentStatus::Error
        } else {
            self.status
        }
    }
}

async fn load_attempt(session: &Session) -> Result<CheckoutAttempt> {
    Ok(session
        .get::<CheckoutAttempt>(session_keys::CHECKOUT_STATUS)
        .await?
        .unwrap_or_default())
}

async fn save_status(session: &Session, status: PaymentStatus) -> Result<()> {
    session
        .insert(session_keys::CHECKOUT_STATUS, CheckoutAttempt::now(status))
        .await?;
    Ok(())
}

/// Checkout status response.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: PaymentStatus,
}

/// Successful checkout response.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub status: PaymentStatus,
    pub order_number: OrderNumber,
    pub total: String,
    /// Whether the invoice email was accepted by the email API.
    pub invoice_sent: bool,
    pub message: String,
}

/// Pay for the cart.
#[instrument(skip_all)]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    OptionalAuth(customer): OptionalAuth,
    Form(form): Form<CheckoutForm>,
) -> Result<Json<CheckoutResponse>> {
    let now = Utc::now();
    let attempt = load_attempt(&session).await?;
    if !attempt
        .effective_status(now.timestamp_millis())
        .can_submit()
    {
        return Err(AppError::Conflict(
            "Ya hay un pago en proceso".to_string(),
        ));
    }

    let mut cart = cart::load(&session).await?;
    if cart.is_empty() {
        return Err(AppError::BadRequest("El carrito está vacío".to_string()));
    }

    let payment = form
        .validate(now.date_naive())
        .map_err(|errors| AppError::CheckoutValidation {
            errors,
            values: form.display_values(),
        })?;

    // Persist now so a concurrent submission sees the attempt in flight.
    save_status(&session, PaymentStatus::Processing).await?;
    session.save().await?;

    let total = cart.total_price();
    add_breadcrumb("checkout", "Payment submitted", None);

    if state.payments().charge(&payment, total).await == PaymentOutcome::Declined {
        save_status(&session, PaymentStatus::Error).await?;
        return Err(AppError::PaymentDeclined(
            "El pago fue rechazado. Por favor, intenta de nuevo.".to_string(),
        ));
    }

    let order_number = OrderNumber::online_now();
    let invoice_sent = match &customer {
        Some(customer) => {
            let invoice = build_invoice(
                &cart,
                order_number.clone(),
                now.date_naive(),
                customer,
                &payment.billing_address,
            );
            match state
                .email()
                .send_invoice(&invoice, customer.email.as_str())
                .await
            {
                Ok(_) => true,
                Err(e) => {
                    tracing::warn!(
                        order_number = %order_number,
                        error = %e,
                        "Invoice email failed; order kept"
                    );
                    false
                }
            }
        }
        None => false,
    };

    cart.clear();
    cart::save(&session, &cart).await?;
    save_status(&session, PaymentStatus::Success).await?;

    tracing::info!(order_number = %order_number, %total, invoice_sent, "Order paid");

    Ok(Json(CheckoutResponse {
        status: PaymentStatus::Success,
        message: format!("¡Pago exitoso! Tu número de orden es {order_number}"),
        order_number,
        total: total.to_string(),
        invoice_sent,
    }))
}

/// Report the last checkout status.
#[instrument(skip(session))]
pub async fn status(session: Session) -> Result<Json<StatusResponse>> {
    let attempt = load_attempt(&session).await?;
    Ok(Json(StatusResponse {
        status: attempt.effective_status(Utc::now().timestamp_millis()),
    }))
}

/// Return a finished attempt to idle so the form can be resubmitted.
#[instrument(skip(session))]
pub async fn reset(session: Session) -> Result<Json<StatusResponse>> {
    let attempt = load_attempt(&session).await?;
    let status = attempt
        .effective_status(Utc::now().timestamp_millis())
        .reset();
    save_status(&session, status).await?;
    Ok(Json(StatusResponse { status }))
}

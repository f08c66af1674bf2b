//! Point-of-sale route handlers.
//!
//! Only signed-in operators (`POS_OPERATOR_EMAILS`) reach these handlers.
//! The operator's ticket lives in their session. Every mutation answers with
//! the updated ticket; errors carry a short `title` for the operator toast.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, Json, extract::State, response::IntoResponse};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use adventure_works_core::OrderNumber;

use crate::error::{Result, add_breadcrumb};
use crate::middleware::RequireOperator;
use crate::services::pos::{self, PosItem, PosTicket, SaleCustomer, parse_amount};
use crate::state::AppState;

// =============================================================================
// Views
// =============================================================================

/// Ticket line display data.
#[derive(Clone, Serialize)]
pub struct PosItemView {
    pub code: String,
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

impl From<&PosItem> for PosItemView {
    fn from(item: &PosItem) -> Self {
        Self {
            code: item.id.to_string(),
            name: item.name.clone(),
            quantity: item.quantity,
            price: item.price.to_string(),
            line_price: item.line_total().to_string(),
        }
    }
}

/// Ticket display data, also the JSON body of every ticket mutation.
#[derive(Clone, Serialize)]
pub struct TicketView {
    pub items: Vec<PosItemView>,
    pub item_count: u32,
    pub subtotal: String,
    pub tax: String,
    pub total: String,
}

impl From<&PosTicket> for TicketView {
    fn from(ticket: &PosTicket) -> Self {
        Self {
            items: ticket.items().iter().map(PosItemView::from).collect(),
            item_count: ticket.total_items(),
            subtotal: ticket.subtotal().to_string(),
            tax: ticket.tax().to_string(),
            total: ticket.total().to_string(),
        }
    }
}

/// Completed sale response.
#[derive(Serialize)]
pub struct SaleResponse {
    pub title: &'static str,
    pub message: String,
    pub order_number: OrderNumber,
    pub total: String,
    pub change: String,
    pub recipient: String,
    pub ticket: TicketView,
}

// =============================================================================
// Form Types
// =============================================================================

/// Scanned or typed product code.
#[derive(Debug, Deserialize)]
pub struct ScanForm {
    pub code: String,
}

/// Quantity change for a ticket line. Zero or less removes it.
#[derive(Debug, Deserialize)]
pub struct UpdateTicketForm {
    pub code: String,
    pub quantity: i64,
}

/// Payment and optional customer details.
#[derive(Debug, Deserialize)]
pub struct CompleteSaleForm {
    #[serde(default)]
    pub amount_paid: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: String,
    #[serde(default)]
    pub customer_address: String,
}

impl CompleteSaleForm {
    fn customer(&self) -> SaleCustomer {
        SaleCustomer {
            name: self.customer_name.clone(),
            email: self.customer_email.clone(),
            address: self.customer_address.clone(),
        }
    }
}

// =============================================================================
// Templates
// =============================================================================

/// POS page template.
#[derive(Template, WebTemplate)]
#[template(path = "pos/index.html")]
pub struct PosTemplate {
    pub ticket: TicketView,
}

// =============================================================================
// Routes
// =============================================================================

/// Display the POS screen.
#[instrument(skip_all)]
pub async fn index(_operator: RequireOperator, session: Session) -> Result<impl IntoResponse> {
    let ticket = pos::load(&session).await?;
    Ok(PosTemplate {
        ticket: TicketView::from(&ticket),
    })
}

/// Add one unit of a product by code.
#[instrument(skip(_operator, session))]
pub async fn scan(
    _operator: RequireOperator,
    session: Session,
    Form(form): Form<ScanForm>,
) -> Result<Json<TicketView>> {
    let mut ticket = pos::load(&session).await?;
    ticket.scan(&form.code)?;
    pos::save(&session, &ticket).await?;

    Ok(Json(TicketView::from(&ticket)))
}

/// Set the quantity of a ticket line.
#[instrument(skip(_operator, session))]
pub async fn update(
    _operator: RequireOperator,
    session: Session,
    Form(form): Form<UpdateTicketForm>,
) -> Result<Json<TicketView>> {
    let mut ticket = pos::load(&session).await?;
    ticket.update_quantity(&form.code, form.quantity);
    pos::save(&session, &ticket).await?;

    Ok(Json(TicketView::from(&ticket)))
}

/// Remove a ticket line.
#[instrument(skip(_operator, session))]
pub async fn remove(
    _operator: RequireOperator,
    session: Session,
    Form(form): Form<ScanForm>,
) -> Result<Json<TicketView>> {
    let mut ticket = pos::load(&session).await?;
    ticket.remove(&form.code);
    pos::save(&session, &ticket).await?;

    Ok(Json(TicketView::from(&ticket)))
}

/// Void the whole ticket.
#[instrument(skip_all)]
pub async fn clear(_operator: RequireOperator, session: Session) -> Result<Json<TicketView>> {
    let mut ticket = pos::load(&session).await?;
    ticket.clear();
    pos::save(&session, &ticket).await?;

    Ok(Json(TicketView::from(&ticket)))
}

/// Take payment, email the in-store invoice and start a new ticket.
///
/// If the invoice cannot be delivered the sale fails and the ticket is kept
/// so the operator can retry.
#[instrument(skip_all, fields(operator_id = %operator.id))]
pub async fn complete(
    State(state): State<AppState>,
    RequireOperator(operator): RequireOperator,
    session: Session,
    Form(form): Form<CompleteSaleForm>,
) -> Result<Json<SaleResponse>> {
    let mut ticket = pos::load(&session).await?;
    let sale = ticket.complete(
        parse_amount(&form.amount_paid),
        &form.customer(),
        &state.config().pos.fallback_recipient,
        OrderNumber::point_of_sale_now(),
        Utc::now().date_naive(),
    )?;

    add_breadcrumb(
        "pos",
        "Sale completed",
        Some(&[("order_number", sale.invoice.order_number.as_str())]),
    );
    state
        .email()
        .send_invoice(&sale.invoice, sale.recipient.as_str())
        .await?;

    ticket.clear();
    pos::save(&session, &ticket).await?;

    let order_number = sale.invoice.order_number.clone();
    tracing::info!(
        order_number = %order_number,
        total = %sale.invoice.total(),
        "Point-of-sale order completed"
    );

    Ok(Json(SaleResponse {
        title: "Venta completada",
        message: format!(
            "Orden {order_number} procesada exitosamente. Cambio: {}",
            sale.change
        ),
        order_number,
        total: sale.invoice.total().to_string(),
        change: sale.change.to_string(),
        recipient: sale.recipient.to_string(),
        ticket: TicketView::from(&ticket),
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_view_totals() {
        let mut ticket = PosTicket::default();
        ticket.scan("touring-1000").unwrap();
        let view = TicketView::from(&ticket);

        assert_eq!(view.item_count, 1);
        assert_eq!(view.subtotal, "$2199.00");
        assert_eq!(view.tax, "$285.87");
        assert_eq!(view.total, "$2484.87");
        assert_eq!(view.items.first().unwrap().code, "touring-1000");
    }
}

//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. All route handlers should return `Result<T, AppError>`.
//!
//! Error bodies are JSON: `{"error": "..."}`, plus `errors` (per-field
//! messages) for validation failures and `title` for point-of-sale errors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::identity::IdentityError;
use crate::services::cart::CartError;
use crate::services::checkout::{CheckoutFormValues, FieldErrors};
use crate::services::invoice::InvoiceError;
use crate::services::pos::PosError;
use crate::services::EmailError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Session store read or write failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Identity provider call failed.
    #[error("Identity error: {0}")]
    Identity(#[from] IdentityError),

    /// Invoice email could not be delivered.
    #[error("Email error: {0}")]
    Email(#[from] EmailError),

    /// Invoice documents could not be rendered.
    #[error("Invoice error: {0}")]
    Invoice(#[from] InvoiceError),

    /// Add-to-cart request did not match the catalog.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Point-of-sale operation rejected.
    #[error("POS error: {0}")]
    Pos(#[from] PosError),

    /// Form fields failed validation.
    #[error("Validation failed: {} field(s)", .0.len())]
    Validation(FieldErrors),

    /// Checkout card form failed validation. Carries the submitted values
    /// in display format.
    #[error("Checkout validation failed: {} field(s)", .errors.len())]
    CheckoutValidation {
        errors: FieldErrors,
        values: CheckoutFormValues,
    },

    /// The simulated processor declined the charge.
    #[error("Payment declined: {0}")]
    PaymentDeclined(String),

    /// Request conflicts with work already in progress.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// User is not authenticated.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Signed in, but not allowed to use this feature.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether this is a server-side failure worth reporting.
    const fn is_server_error(&self) -> bool {
        matches!(
            self,
            Self::Session(_)
                | Self::Email(_)
                | Self::Invoice(_)
                | Self::Internal(_)
                | Self::Identity(
                    IdentityError::Http(_) | IdentityError::Api { .. } | IdentityError::Parse(_)
                )
        )
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::Session(_) | Self::Invoice(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Email(_) => StatusCode::BAD_GATEWAY,
            Self::Identity(err) => match err {
                IdentityError::InvalidCredentials | IdentityError::SessionExpired => {
                    StatusCode::UNAUTHORIZED
                }
                IdentityError::UserAlreadyExists => StatusCode::CONFLICT,
                IdentityError::Http(_) | IdentityError::Api { .. } | IdentityError::Parse(_) => {
                    StatusCode::BAD_GATEWAY
                }
            },
            Self::Cart(CartError::UnknownProduct(_))
            | Self::Pos(PosError::UnknownProduct(_))
            | Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Cart(_) | Self::Pos(PosError::EmptyTicket) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Pos(PosError::InsufficientPayment | PosError::InvalidEmail(_))
            | Self::Validation(_)
            | Self::CheckoutValidation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::PaymentDeclined(_) => StatusCode::PAYMENT_REQUIRED,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
        }
    }

    /// Message safe to show to the customer.
    fn public_message(&self) -> String {
        match self {
            Self::Session(_) | Self::Invoice(_) | Self::Internal(_) => {
                "Error interno del servidor".to_string()
            }
            Self::Email(_) => "No se pudo enviar la factura".to_string(),
            Self::Identity(err) => match err {
                IdentityError::InvalidCredentials => {
                    "Correo electrónico o contraseña incorrectos".to_string()
                }
                IdentityError::UserAlreadyExists => {
                    "Ya existe una cuenta con este correo electrónico".to_string()
                }
                IdentityError::SessionExpired => {
                    "Tu sesión ha expirado, inicia sesión de nuevo".to_string()
                }
                IdentityError::Http(_) | IdentityError::Api { .. } | IdentityError::Parse(_) => {
                    "Servicio de cuentas no disponible".to_string()
                }
            },
            Self::Cart(err) => err.to_string(),
            Self::Pos(err) => err.to_string(),
            Self::Validation(_) | Self::CheckoutValidation { .. } => {
                "Revisa los datos del formulario".to_string()
            }
            Self::PaymentDeclined(msg)
            | Self::Conflict(msg)
            | Self::NotFound(msg)
            | Self::Unauthorized(msg)
            | Self::Forbidden(msg)
            | Self::BadRequest(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if self.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = self.status();

        // Don't expose internal error details to clients
        let mut body = json!({ "error": self.public_message() });
        match &self {
            Self::Validation(errors) => body["errors"] = json!(errors),
            Self::CheckoutValidation { errors, values } => {
                body["errors"] = json!(errors);
                body["values"] = json!(values);
            }
            Self::Pos(err) => body["title"] = json!(err.title()),
            Self::PaymentDeclined(_) => body["status"] = json!("error"),
            _ => {}
        }

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Set the Sentry user context from a user ID.
///
/// Call this after successful authentication to associate errors with users.
pub fn set_sentry_user(user_id: &impl ToString, email: Option<&str>) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(user_id.to_string()),
            email: email.map(String::from),
            ..Default::default()
        }));
    });
}

/// Clear the Sentry user context.
///
/// Call this on logout to stop associating errors with the user.
pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| {
        scope.set_user(None);
    });
}

/// Add a breadcrumb for user actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of user actions
/// leading up to an error.
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}

//! Authentication extractors.
//!
//! A customer is signed in when the session holds a [`CurrentCustomer`],
//! written after a successful sign-in against the identity provider.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::error::AppError;
use crate::models::{CurrentCustomer, session_keys};
use crate::state::AppState;

/// Extractor that requires a signed-in customer.
///
/// Rejects with `401 Unauthorized` and a JSON error body when nobody is
/// signed in.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAuth(customer): RequireAuth,
/// ) -> impl IntoResponse {
///     format!("Hola, {}!", customer.display_name())
/// }
/// ```
pub struct RequireAuth(pub CurrentCustomer);

/// Message for requests that need a signed-in customer.
pub const SIGN_IN_REQUIRED: &str = "Debes iniciar sesión";

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = parts.extensions.get::<Session>().ok_or_else(|| {
            AppError::Internal("RequireAuth used on a route without a session layer".to_string())
        })?;

        let customer = session
            .get::<CurrentCustomer>(session_keys::CURRENT_CUSTOMER)
            .await
            .ok()
            .flatten()
            .ok_or_else(|| AppError::Unauthorized(SIGN_IN_REQUIRED.to_string()))?;

        Ok(Self(customer))
    }
}

/// Extractor that requires a signed-in point-of-sale operator.
///
/// Anonymous requests get `401`; customers whose email is not in
/// `POS_OPERATOR_EMAILS` get `403`.
pub struct RequireOperator(pub CurrentCustomer);

impl FromRequestParts<AppState> for RequireOperator {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let RequireAuth(customer) = RequireAuth::from_request_parts(parts, state).await?;

        if !state.config().pos.is_operator(&customer.email) {
            tracing::warn!(customer_id = %customer.id, "Point-of-sale access denied");
            return Err(AppError::Forbidden(
                "Solo el personal de tienda puede usar el punto de venta".to_string(),
            ));
        }

        Ok(Self(customer))
    }
}

/// Extractor that optionally gets the current customer.
///
/// Unlike `RequireAuth`, this does not reject the request if nobody is
/// signed in. Checkout uses it to decide whether to email the invoice.
pub struct OptionalAuth(pub Option<CurrentCustomer>);

impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let customer = match parts.extensions.get::<Session>() {
            Some(session) => session
                .get::<CurrentCustomer>(session_keys::CURRENT_CUSTOMER)
                .await
                .ok()
                .flatten(),
            None => None,
        };

        Ok(Self(customer))
    }
}

/// Store the signed-in customer in the session.
///
/// The session ID is cycled first so a pre-login session ID cannot be
/// reused after sign-in.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_customer(
    session: &Session,
    customer: &CurrentCustomer,
) -> Result<(), tower_sessions::session::Error> {
    session.cycle_id().await?;
    session
        .insert(session_keys::CURRENT_CUSTOMER, customer)
        .await
}

/// Remove the signed-in customer from the session (logout).
///
/// The cart is kept.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_customer(
    session: &Session,
) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentCustomer>(session_keys::CURRENT_CUSTOMER)
        .await?;
    Ok(())
}

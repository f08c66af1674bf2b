//! Authentication route handlers.
//!
//! Sign-up, sign-in and sign-out are forwarded to the identity provider.
//! Input is checked locally first so obviously bad requests never leave the
//! storefront.

use axum::{Form, Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use adventure_works_core::Email;

use crate::error::{
    AppError, Result, add_breadcrumb, clear_sentry_user, set_sentry_user,
};
use crate::identity::{AuthSession, Profile, SignUpOutcome};
use crate::middleware::{OptionalAuth, clear_current_customer, set_current_customer};
use crate::models::CurrentCustomer;
use crate::services::checkout::FieldErrors;
use crate::state::AppState;

/// The identity provider's minimum password length.
pub const MIN_PASSWORD_LEN: usize = 6;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Sign-up form data.
#[derive(Deserialize)]
pub struct SignUpForm {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub dui: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl SignUpForm {
    fn validate(&self) -> std::result::Result<(Email, Profile), FieldErrors> {
        let mut errors = FieldErrors::new();
        let profile = Profile {
            full_name: self.full_name.clone(),
            dui: self.dui.clone(),
            phone: self.phone.clone(),
        }
        .trimmed();

        if profile.full_name.is_empty() {
            errors.insert("full_name", "El nombre completo es requerido");
        }
        let email = validate_credentials(&self.email, &self.password, &mut errors);

        match email {
            Some(email) if errors.is_empty() => Ok((email, profile)),
            _ => Err(errors),
        }
    }
}

impl LoginForm {
    fn validate(&self) -> std::result::Result<Email, FieldErrors> {
        let mut errors = FieldErrors::new();
        match validate_credentials(&self.email, &self.password, &mut errors) {
            Some(email) if errors.is_empty() => Ok(email),
            _ => Err(errors),
        }
    }
}

fn validate_credentials(email: &str, password: &str, errors: &mut FieldErrors) -> Option<Email> {
    let email = if email.trim().is_empty() {
        errors.insert("email", "El correo electrónico es requerido");
        None
    } else {
        Email::parse(email)
            .map_err(|_| errors.insert("email", "Correo electrónico inválido"))
            .ok()
    };

    if password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert(
            "password",
            "La contraseña debe tener al menos 6 caracteres",
        );
    }

    email
}

// =============================================================================
// Responses
// =============================================================================

/// Signed-in customer as returned to the browser.
#[derive(Debug, Serialize)]
pub struct CustomerView {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl From<&CurrentCustomer> for CustomerView {
    fn from(customer: &CurrentCustomer) -> Self {
        Self {
            id: customer.id.clone(),
            email: customer.email.to_string(),
            name: customer.display_name(),
        }
    }
}

/// Result of an auth action.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerView>,
}

/// Build the session customer from a provider session.
///
/// The provider's email wins; the submitted one is used if the provider
/// omits it.
fn customer_from_session(session: AuthSession, submitted: &Email) -> CurrentCustomer {
    let email = session
        .user
        .email
        .as_deref()
        .and_then(|e| Email::parse(e).ok())
        .unwrap_or_else(|| submitted.clone());
    let full_name = Some(session.user.user_metadata.full_name.trim().to_string())
        .filter(|name| !name.is_empty());

    CurrentCustomer {
        id: session.user.id,
        email,
        full_name,
        access_token: session.access_token,
    }
}

async fn sign_in_session(session: &Session, customer: &CurrentCustomer) -> Result<()> {
    set_current_customer(session, customer).await?;
    set_sentry_user(&customer.id, Some(customer.email.as_str()));
    Ok(())
}

// =============================================================================
// Routes
// =============================================================================

/// Create an account.
///
/// Signs the customer in straight away unless the provider requires email
/// confirmation first.
#[instrument(skip_all)]
pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SignUpForm>,
) -> Result<(StatusCode, Json<AuthResponse>)> {
    let (email, profile) = form.validate().map_err(AppError::Validation)?;

    let outcome = state
        .identity()
        .sign_up(email.as_str(), &form.password, &profile)
        .await?;
    add_breadcrumb("auth", "Account created", None);

    let response = match outcome {
        SignUpOutcome::SignedIn(auth) => {
            let customer = customer_from_session(auth, &email);
            sign_in_session(&session, &customer).await?;
            AuthResponse {
                status: "signed_in",
                message: format!("¡Bienvenido, {}!", customer.display_name()),
                customer: Some(CustomerView::from(&customer)),
            }
        }
        SignUpOutcome::ConfirmationRequired(_) => AuthResponse {
            status: "confirmation_required",
            message: "Revisa tu correo electrónico para confirmar tu cuenta".to_string(),
            customer: None,
        },
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Sign in with email and password.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Json<AuthResponse>> {
    let email = form.validate().map_err(AppError::Validation)?;

    let auth = state
        .identity()
        .sign_in_with_password(email.as_str(), &form.password)
        .await?;
    let customer = customer_from_session(auth, &email);
    sign_in_session(&session, &customer).await?;

    tracing::info!(customer_id = %customer.id, "Customer signed in");

    Ok(Json(AuthResponse {
        status: "signed_in",
        message: format!("¡Bienvenido, {}!", customer.display_name()),
        customer: Some(CustomerView::from(&customer)),
    }))
}

/// Sign out.
///
/// The provider token is revoked on a best-effort basis; the local session
/// is cleared regardless. The cart is kept.
#[instrument(skip_all)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
    OptionalAuth(customer): OptionalAuth,
) -> Result<Json<AuthResponse>> {
    if let Some(customer) = customer {
        if let Err(e) = state.identity().sign_out(&customer.access_token).await {
            tracing::warn!(error = %e, "Failed to revoke identity token");
        }
        clear_current_customer(&session).await?;
        clear_sentry_user();
    }

    Ok(Json(AuthResponse {
        status: "signed_out",
        message: "Sesión cerrada".to_string(),
        customer: None,
    }))
}

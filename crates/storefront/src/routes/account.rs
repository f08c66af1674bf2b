//! Account route handlers (requires authentication).
//!
//! The profile is owned by the identity provider; these handlers read and
//! replace it using the signed-in customer's access token.

use axum::{Form, Json, extract::State};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::identity::{IdentityError, IdentityUser, Profile};
use crate::middleware::{RequireAuth, clear_current_customer, set_current_customer};
use crate::models::CurrentCustomer;
use crate::services::checkout::FieldErrors;
use crate::state::AppState;

/// Profile as shown on the account page.
#[derive(Debug, Serialize)]
pub struct AccountView {
    pub email: String,
    pub full_name: String,
    pub dui: String,
    pub phone: String,
}

impl AccountView {
    fn new(customer: &CurrentCustomer, user: IdentityUser) -> Self {
        Self {
            email: user
                .email
                .unwrap_or_else(|| customer.email.to_string()),
            full_name: user.user_metadata.full_name,
            dui: user.user_metadata.dui,
            phone: user.user_metadata.phone,
        }
    }
}

/// Profile update form data.
#[derive(Debug, Deserialize)]
pub struct ProfileForm {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub dui: String,
    #[serde(default)]
    pub phone: String,
}

impl ProfileForm {
    fn validate(self) -> std::result::Result<Profile, FieldErrors> {
        let profile = Profile {
            full_name: self.full_name,
            dui: self.dui,
            phone: self.phone,
        }
        .trimmed();

        if profile.full_name.is_empty() {
            let mut errors = FieldErrors::new();
            errors.insert("full_name", "El nombre completo es requerido");
            return Err(errors);
        }
        Ok(profile)
    }
}

/// Sign the customer out locally when the provider rejects their token.
async fn expire_on_rejected_token(session: &Session, error: IdentityError) -> AppError {
    if matches!(error, IdentityError::SessionExpired)
        && let Err(e) = clear_current_customer(session).await
    {
        tracing::warn!(error = %e, "Failed to clear expired customer session");
    }
    AppError::Identity(error)
}

/// Show the customer's profile.
#[instrument(skip_all, fields(customer_id = %customer.id))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    RequireAuth(customer): RequireAuth,
) -> Result<Json<AccountView>> {
    let user = match state.identity().get_user(&customer.access_token).await {
        Ok(user) => user,
        Err(e) => return Err(expire_on_rejected_token(&session, e).await),
    };

    Ok(Json(AccountView::new(&customer, user)))
}

/// Replace the customer's profile.
#[instrument(skip_all, fields(customer_id = %customer.id))]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    RequireAuth(customer): RequireAuth,
    Form(form): Form<ProfileForm>,
) -> Result<Json<AccountView>> {
    let profile = form.validate().map_err(AppError::Validation)?;

    let user = match state
        .identity()
        .update_profile(&customer.access_token, &profile)
        .await
    {
        Ok(user) => user,
        Err(e) => return Err(expire_on_rejected_token(&session, e).await),
    };

    // Keep the invoice name in step with the profile.
    let updated = CurrentCustomer {
        full_name: Some(profile.full_name.clone()),
        ..customer
    };
    set_current_customer(&session, &updated).await?;
    tracing::info!("Profile updated");

    Ok(Json(AccountView::new(&updated, user)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_form_trims() {
        let form = ProfileForm {
            full_name: " Ana Pérez ".to_string(),
            dui: " 01234567-8".to_string(),
            phone: "7777-8888 ".to_string(),
        };
        let profile = form.validate().unwrap();
        assert_eq!(profile.full_name, "Ana Pérez");
        assert_eq!(profile.dui, "01234567-8");
        assert_eq!(profile.phone, "7777-8888");
    }

    #[test]
    fn test_profile_form_requires_name() {
        let form = ProfileForm {
            full_name: "   ".to_string(),
            dui: String::new(),
            phone: String::new(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors["full_name"], "El nombre completo es requerido");
    }
}

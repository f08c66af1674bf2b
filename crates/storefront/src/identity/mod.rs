//! Identity provider client.
//!
//! Accounts live in a hosted GoTrue-compatible auth service. The storefront
//! never sees password hashes: sign-up, sign-in, profile reads and updates
//! and sign-out are all forwarded to the provider.
//!
//! Every call carries the project's anonymous key in the `apikey` header.
//! Calls on behalf of a customer also carry their access token as a bearer
//! token.

mod types;

pub use types::{AuthSession, IdentityUser, Profile, SignUpOutcome};

use std::sync::Arc;

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::config::IdentityConfig;
use types::{ErrorBody, PasswordGrantRequest, SignUpRequest, SignUpResponse, UpdateUserRequest};

/// Errors that can occur when calling the identity provider.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Wrong email or password.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The email is already registered.
    #[error("user already exists")]
    UserAlreadyExists,

    /// The access token was rejected.
    #[error("session expired")]
    SessionExpired,

    /// Provider returned another error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse a response or build a request.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Client for the identity provider's auth API.
#[derive(Clone)]
pub struct IdentityClient {
    inner: Arc<IdentityClientInner>,
}

struct IdentityClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl IdentityClient {
    /// Create a new identity client.
    ///
    /// # Errors
    ///
    /// Returns error if the key is not a valid header value or the HTTP
    /// client fails to build.
    pub fn new(config: &IdentityConfig) -> Result<Self, IdentityError> {
        let mut headers = HeaderMap::new();
        let mut api_key = HeaderValue::from_str(config.anon_key.expose_secret())
            .map_err(|e| IdentityError::Parse(format!("Invalid API key format: {e}")))?;
        api_key.set_sensitive(true);
        headers.insert("apikey", api_key);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            inner: Arc::new(IdentityClientInner {
                client,
                base_url: config.url.clone(),
            }),
        })
    }

    /// Register a new account with profile metadata.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::UserAlreadyExists` if the email is taken, or
    /// another error if the provider rejects the request.
    #[tracing::instrument(skip(self, password, profile))]
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        profile: &Profile,
    ) -> Result<SignUpOutcome, IdentityError> {
        let url = self.endpoint("signup")?;
        let response = self
            .inner
            .client
            .post(url)
            .json(&SignUpRequest {
                email,
                password,
                data: profile,
            })
            .send()
            .await?;

        let outcome: SignUpResponse = parse_response(response).await.map_err(|e| match e {
            IdentityError::Api { status, message } if is_conflict(status, &message) => {
                IdentityError::UserAlreadyExists
            }
            other => other,
        })?;

        tracing::info!("Account registered");
        Ok(outcome.into())
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::InvalidCredentials` if the provider rejects
    /// the credentials.
    #[tracing::instrument(skip(self, password))]
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, IdentityError> {
        let url = self.endpoint("token")?;
        let response = self
            .inner
            .client
            .post(url)
            .query(&[("grant_type", "password")])
            .json(&PasswordGrantRequest { email, password })
            .send()
            .await?;

        parse_response(response).await.map_err(|e| match e {
            IdentityError::Api { status, .. } if status == 400 || status == 401 => {
                IdentityError::InvalidCredentials
            }
            other => other,
        })
    }

    /// Fetch the user behind an access token.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::SessionExpired` if the token is rejected.
    #[tracing::instrument(skip_all)]
    pub async fn get_user(&self, access_token: &str) -> Result<IdentityUser, IdentityError> {
        let url = self.endpoint("user")?;
        let response = self
            .inner
            .client
            .get(url)
            .bearer_auth(access_token)
            .send()
            .await?;

        parse_response(response).await.map_err(expired_on_unauthorized)
    }

    /// Replace the user's profile metadata.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::SessionExpired` if the token is rejected.
    #[tracing::instrument(skip_all)]
    pub async fn update_profile(
        &self,
        access_token: &str,
        profile: &Profile,
    ) -> Result<IdentityUser, IdentityError> {
        let url = self.endpoint("user")?;
        let response = self
            .inner
            .client
            .put(url)
            .bearer_auth(access_token)
            .json(&UpdateUserRequest { data: profile })
            .send()
            .await?;

        parse_response(response).await.map_err(expired_on_unauthorized)
    }

    /// Revoke the access token.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails. An already-expired token is not
    /// an error.
    #[tracing::instrument(skip_all)]
    pub async fn sign_out(&self, access_token: &str) -> Result<(), IdentityError> {
        let url = self.endpoint("logout")?;
        let response = self
            .inner
            .client
            .post(url)
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() || status == StatusCode::UNAUTHORIZED {
            return Ok(());
        }
        Err(api_error(response).await)
    }

    /// `{base}/auth/v1/{name}`.
    fn endpoint(&self, name: &str) -> Result<Url, IdentityError> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                IdentityError::Parse(format!("Invalid identity URL: {}", self.inner.base_url))
            })?
            .pop_if_empty()
            .extend(["auth", "v1", name]);
        Ok(url)
    }
}

async fn parse_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, IdentityError> {
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }
    response
        .json()
        .await
        .map_err(|e| IdentityError::Parse(e.to_string()))
}

async fn api_error(response: reqwest::Response) -> IdentityError {
    let status = response.status().as_u16();
    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .ok()
        .and_then(|body| body.message().map(str::to_string))
        .unwrap_or(text);
    IdentityError::Api { status, message }
}

fn expired_on_unauthorized(error: IdentityError) -> IdentityError {
    match error {
        IdentityError::Api { status: 401 | 403, .. } => IdentityError::SessionExpired,
        other => other,
    }
}

fn is_conflict(status: u16, message: &str) -> bool {
    status == 422 && message.to_ascii_lowercase().contains("already registered")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    fn client(url: &str) -> IdentityClient {
        IdentityClient::new(&IdentityConfig {
            url: Url::parse(url).unwrap(),
            anon_key: SecretString::from("anon-key"),
        })
        .unwrap()
    }

    #[test]
    fn test_endpoint() {
        let c = client("https://project.supabase.co");
        assert_eq!(
            c.endpoint("token").unwrap().as_str(),
            "https://project.supabase.co/auth/v1/token"
        );

        let c = client("http://localhost:9999/");
        assert_eq!(
            c.endpoint("user").unwrap().as_str(),
            "http://localhost:9999/auth/v1/user"
        );
    }

    #[test]
    fn test_sign_up_response_with_session() {
        let json = r#"{
            "access_token": "jwt",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "r",
            "user": {
                "id": "u1",
                "email": "ana@example.com",
                "user_metadata": {"nombre_completo": "Ana Pérez", "dui": "01234567-8", "telefono": "7777-8888"}
            }
        }"#;
        let outcome: SignUpOutcome = serde_json::from_str::<SignUpResponse>(json).unwrap().into();
        let SignUpOutcome::SignedIn(session) = outcome else {
            panic!("expected a session");
        };
        assert_eq!(session.access_token, "jwt");
        assert_eq!(session.user.user_metadata.full_name, "Ana Pérez");
        assert_eq!(session.user.user_metadata.phone, "7777-8888");
    }

    #[test]
    fn test_sign_up_response_pending_confirmation() {
        let json = r#"{"id": "u2", "email": "ana@example.com", "user_metadata": null}"#;
        let outcome: SignUpOutcome = serde_json::from_str::<SignUpResponse>(json).unwrap().into();
        let SignUpOutcome::ConfirmationRequired(user) = outcome else {
            panic!("expected a pending user");
        };
        assert_eq!(user.id, "u2");
        assert_eq!(user.user_metadata, Profile::default());
    }

    #[test]
    fn test_session_debug_hides_token() {
        let json = r#"{"access_token": "secret-jwt", "user": {"id": "u1"}}"#;
        let session: AuthSession = serde_json::from_str(json).unwrap();
        assert!(!format!("{session:?}").contains("secret-jwt"));
    }

    #[test]
    fn test_profile_serializes_spanish_keys() {
        let profile = Profile {
            full_name: "Ana".to_string(),
            dui: "1".to_string(),
            phone: "2".to_string(),
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["nombre_completo"], "Ana");
        assert_eq!(json["telefono"], "2");
        assert_eq!(json["dui"], "1");
    }

    #[test]
    fn test_error_body_message() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"error": "invalid_grant", "error_description": "Invalid login credentials"}"#,
        )
        .unwrap();
        assert_eq!(body.message(), Some("Invalid login credentials"));

        let body: ErrorBody =
            serde_json::from_str(r#"{"code": 422, "msg": "User already registered"}"#).unwrap();
        assert_eq!(body.message(), Some("User already registered"));
        assert!(is_conflict(422, "User already registered"));
        assert!(!is_conflict(400, "User already registered"));
    }

    #[test]
    fn test_expired_on_unauthorized() {
        let error = IdentityError::Api {
            status: 401,
            message: "JWT expired".to_string(),
        };
        assert!(matches!(
            expired_on_unauthorized(error),
            IdentityError::SessionExpired
        ));
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_http_error() {
        let result = client("http://127.0.0.1:9")
            .sign_in_with_password("ana@example.com", "secret1")
            .await;
        assert!(matches!(result, Err(IdentityError::Http(_))));
    }
}

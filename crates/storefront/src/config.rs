//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `STOREFRONT_DATABASE_URL` - `PostgreSQL` connection string for sessions
//! - `STOREFRONT_BASE_URL` - Public URL for the storefront
//! - `IDENTITY_URL` - Base URL of the identity provider (e.g., <https://xyz.supabase.co>)
//! - `IDENTITY_ANON_KEY` - Public API key sent to the identity provider
//! - `EMAIL_API_KEY` - Transactional email API key
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `EMAIL_API_URL` - Email API base URL (default: <https://api.resend.com>)
//! - `EMAIL_FROM` - Sender for invoices (default: Adventure Works <onboarding@resend.dev>)
//! - `POS_FALLBACK_RECIPIENT` - Mailbox for in-store invoices without a customer email
//! - `POS_OPERATOR_EMAILS` - Comma-separated accounts allowed to use the point of
//!   sale (default: none, which closes the POS)
//! - `CHECKOUT_APPROVAL_RATE` - Probability a simulated payment succeeds (default: 0.9)
//! - `CHECKOUT_PROCESSING_DELAY_MS` - Simulated processing delay (default: 2000)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use adventure_works_core::Email;
use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

const DEFAULT_EMAIL_API_URL: &str = "https://api.resend.com";
const DEFAULT_EMAIL_FROM: &str = "Adventure Works <onboarding@resend.dev>";
const DEFAULT_POS_FALLBACK_RECIPIENT: &str = "ventas@adventureworks.com";
const DEFAULT_APPROVAL_RATE: &str = "0.9";
const DEFAULT_PROCESSING_DELAY_MS: &str = "2000";

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "secret",
    "password",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Identity provider configuration
    pub identity: IdentityConfig,
    /// Transactional email configuration
    pub email: EmailConfig,
    /// Simulated payment configuration
    pub checkout: CheckoutConfig,
    /// Point-of-sale configuration
    pub pos: PosConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

/// Identity provider configuration.
///
/// Implements `Debug` manually to redact secret fields.
#[derive(Clone)]
pub struct IdentityConfig {
    /// Provider base URL; auth endpoints live under `/auth/v1`
    pub url: Url,
    /// Public API key sent as the `apikey` header
    pub anon_key: SecretString,
}

impl std::fmt::Debug for IdentityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityConfig")
            .field("url", &self.url.as_str())
            .field("anon_key", &"[REDACTED]")
            .finish()
    }
}

/// Transactional email configuration.
///
/// Implements `Debug` manually to redact secret fields.
#[derive(Clone)]
pub struct EmailConfig {
    /// Email API base URL
    pub api_url: Url,
    /// Email API key (bearer token)
    pub api_key: SecretString,
    /// `From` header for outgoing invoices
    pub from: String,
}

impl std::fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailConfig")
            .field("api_url", &self.api_url.as_str())
            .field("api_key", &"[REDACTED]")
            .field("from", &self.from)
            .finish()
    }
}

/// Simulated payment configuration.
#[derive(Debug, Clone, Copy)]
pub struct CheckoutConfig {
    /// Probability in `0.0..=1.0` that a payment is approved
    pub approval_rate: f64,
    /// How long a payment takes to "process"
    pub processing_delay: Duration,
}

/// Point-of-sale configuration.
#[derive(Debug, Clone)]
pub struct PosConfig {
    /// Recipient for in-store invoices when the customer gives no email
    pub fallback_recipient: Email,
    /// Accounts allowed to run the point of sale
    pub operators: Vec<Email>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if secrets fail validation (placeholder detection, entropy check).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("STOREFRONT_DATABASE_URL")?;
        let host = get_env_or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string())
            })?;
        let base_url = get_required_env("STOREFRONT_BASE_URL")?;

        let identity = IdentityConfig::from_env()?;
        let email = EmailConfig::from_env()?;
        let checkout = CheckoutConfig::from_env()?;
        let pos = PosConfig::from_env()?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            database_url,
            host,
            port,
            base_url,
            identity,
            email,
            checkout,
            pos,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the storefront is served over HTTPS (secure cookies).
    #[must_use]
    pub fn is_https(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

impl IdentityConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: get_url("IDENTITY_URL", None)?,
            anon_key: get_validated_secret("IDENTITY_ANON_KEY")?,
        })
    }
}

impl EmailConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: get_url("EMAIL_API_URL", Some(DEFAULT_EMAIL_API_URL))?,
            api_key: get_validated_secret("EMAIL_API_KEY")?,
            from: get_env_or_default("EMAIL_FROM", DEFAULT_EMAIL_FROM),
        })
    }
}

impl CheckoutConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let approval_rate = parse_approval_rate(&get_env_or_default(
            "CHECKOUT_APPROVAL_RATE",
            DEFAULT_APPROVAL_RATE,
        ))?;
        let delay_ms = get_env_or_default("CHECKOUT_PROCESSING_DELAY_MS", DEFAULT_PROCESSING_DELAY_MS)
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar(
                    "CHECKOUT_PROCESSING_DELAY_MS".to_string(),
                    e.to_string(),
                )
            })?;

        Ok(Self {
            approval_rate,
            processing_delay: Duration::from_millis(delay_ms),
        })
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            approval_rate: 0.9,
            processing_delay: Duration::from_millis(2000),
        }
    }
}

impl PosConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let raw = get_env_or_default("POS_FALLBACK_RECIPIENT", DEFAULT_POS_FALLBACK_RECIPIENT);
        let fallback_recipient = Email::parse(&raw).map_err(|e| {
            ConfigError::InvalidEnvVar("POS_FALLBACK_RECIPIENT".to_string(), e.to_string())
        })?;
        let operators = parse_operator_emails(&get_env_or_default("POS_OPERATOR_EMAILS", ""))?;
        if operators.is_empty() {
            tracing::warn!("POS_OPERATOR_EMAILS is empty; the point of sale is closed");
        }
        Ok(Self {
            fallback_recipient,
            operators,
        })
    }

    /// Whether `email` belongs to a point-of-sale operator.
    #[must_use]
    pub fn is_operator(&self, email: &Email) -> bool {
        self.operators.contains(email)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get database URL with fallback to generic `DATABASE_URL` (used by Fly.io postgres attach).
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get a URL from the environment, falling back to `default` when given.
fn get_url(key: &str, default: Option<&str>) -> Result<Url, ConfigError> {
    let raw = match default {
        Some(default) => get_env_or_default(key, default),
        None => get_required_env(key)?,
    };
    Url::parse(&raw).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse an approval probability, which must lie within `0.0..=1.0`.
fn parse_approval_rate(raw: &str) -> Result<f64, ConfigError> {
    let rate = raw.parse::<f64>().map_err(|e| {
        ConfigError::InvalidEnvVar("CHECKOUT_APPROVAL_RATE".to_string(), e.to_string())
    })?;
    if !(0.0..=1.0).contains(&rate) {
        return Err(ConfigError::InvalidEnvVar(
            "CHECKOUT_APPROVAL_RATE".to_string(),
            format!("must be between 0 and 1 (got {rate})"),
        ));
    }
    Ok(rate)
}

/// Parse a comma-separated list of operator emails. Blank entries are skipped.
fn parse_operator_emails(raw: &str) -> Result<Vec<Email>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            Email::parse(entry).map_err(|e| {
                ConfigError::InvalidEnvVar("POS_OPERATOR_EMAILS".to_string(), e.to_string())
            })
        })
        .collect()
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.len() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    // Real API keys are random; low entropy means a hand-typed value
    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1}). Use the key issued by the provider."
            ),
        ));
    }

    Ok(())
}

/// Load and validate a secret from environment.
fn get_validated_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    validate_secret_strength(&value, key)?;
    Ok(SecretString::from(value))
}

/// Configuration for unit tests that never touch the network.
#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        database_url: SecretString::from("postgres://localhost/adventure_works_test"),
        host: "127.0.0.1".parse().unwrap(),
        port: 3000,
        base_url: "http://localhost:3000".to_string(),
        identity: IdentityConfig {
            url: Url::parse("http://127.0.0.1:9").unwrap(),
            anon_key: SecretString::from("anon-key-value"),
        },
        email: EmailConfig {
            api_url: Url::parse("http://127.0.0.1:9").unwrap(),
            api_key: SecretString::from("email-key-value"),
            from: DEFAULT_EMAIL_FROM.to_string(),
        },
        checkout: CheckoutConfig {
            approval_rate: 1.0,
            processing_delay: Duration::ZERO,
        },
        pos: PosConfig {
            fallback_recipient: Email::parse(DEFAULT_POS_FALLBACK_RECIPIENT).unwrap(),
            operators: vec![Email::parse("caja@adventureworks.com").unwrap()],
        },
        sentry_dsn: None,
        sentry_environment: None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_shannon_entropy_empty() {
        assert!((shannon_entropy("") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shannon_entropy_two_chars() {
        let entropy = shannon_entropy("ab");
        assert!((entropy - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_validate_secret_strength_placeholder() {
        let result = validate_secret_strength("your-api-key-here", "TEST_VAR");
        assert!(matches!(result, Err(ConfigError::InsecureSecret(_, _))));
    }

    #[test]
    fn test_validate_secret_strength_low_entropy() {
        let result = validate_secret_strength("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", "TEST_VAR");
        assert!(matches!(result, Err(ConfigError::InsecureSecret(_, _))));
    }

    #[test]
    fn test_validate_secret_strength_valid() {
        let result = validate_secret_strength("re_9fK2mQ7xLp4Zt8WcV1nB6yHd", "EMAIL_API_KEY");
        assert!(result.is_ok());
    }

    #[test]
    fn test_parse_approval_rate_bounds() {
        assert!((parse_approval_rate("0.9").unwrap() - 0.9).abs() < f64::EPSILON);
        assert!(parse_approval_rate("0").is_ok());
        assert!(parse_approval_rate("1").is_ok());
        assert!(parse_approval_rate("1.5").is_err());
        assert!(parse_approval_rate("-0.1").is_err());
        assert!(parse_approval_rate("often").is_err());
    }

    #[test]
    fn test_socket_addr() {
        let addr = test_config().socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_is_https() {
        let mut config = test_config();
        assert!(!config.is_https());
        config.base_url = "https://adventureworks.com".to_string();
        assert!(config.is_https());
    }

    #[test]
    fn test_parse_operator_emails() {
        let operators = parse_operator_emails(" Caja@AdventureWorks.com, ,gerente@adventureworks.com")
            .unwrap();
        assert_eq!(operators.len(), 2);
        assert_eq!(operators.first().unwrap().as_str(), "caja@adventureworks.com");

        assert!(parse_operator_emails("").unwrap().is_empty());
        assert!(parse_operator_emails("caja@adventureworks.com,nope").is_err());
    }

    #[test]
    fn test_pos_is_operator() {
        let pos = test_config().pos;
        assert!(pos.is_operator(&Email::parse("CAJA@adventureworks.com").unwrap()));
        assert!(!pos.is_operator(&Email::parse("ana@example.com").unwrap()));
    }

    #[test]
    fn test_config_debug_redacts_secrets() {
        let config = IdentityConfig {
            url: Url::parse("https://abc.supabase.co").unwrap(),
            anon_key: SecretString::from("super_anon_key_value"),
        };
        let email = EmailConfig {
            api_url: Url::parse("https://api.resend.com").unwrap(),
            api_key: SecretString::from("re_super_email_key"),
            from: DEFAULT_EMAIL_FROM.to_string(),
        };

        let debug_output = format!("{config:?} {email:?}");

        assert!(debug_output.contains("abc.supabase.co"));
        assert!(debug_output.contains("onboarding@resend.dev"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_anon_key_value"));
        assert!(!debug_output.contains("re_super_email_key"));
    }
}

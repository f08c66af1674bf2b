//! Session-related types.
//!
//! Types stored in the visitor's session: the signed-in customer plus the
//! cart, point-of-sale ticket and checkout status under their own keys.

use std::fmt;

use serde::{Deserialize, Serialize};

use adventure_works_core::Email;

/// Fallback name when a customer has no profile name.
pub const DEFAULT_CUSTOMER_NAME: &str = "Cliente";

/// Session-stored customer identity.
///
/// Minimal data from the identity provider needed to act on the customer's
/// behalf. `Debug` redacts the access token.
#[derive(Clone, Serialize, Deserialize)]
pub struct CurrentCustomer {
    /// Identity provider user ID.
    pub id: String,
    /// Account email address.
    pub email: Email,
    /// Full name from the profile, if set.
    pub full_name: Option<String>,
    /// Bearer token for user-scoped identity calls.
    pub access_token: String,
}

impl CurrentCustomer {
    /// Name to address the customer by: profile name, then the email's local
    /// part, then a generic greeting.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.full_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .or_else(|| Some(self.email.local_part()).filter(|local| !local.is_empty()))
            .unwrap_or(DEFAULT_CUSTOMER_NAME)
            .to_string()
    }
}

impl fmt::Debug for CurrentCustomer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurrentCustomer")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("full_name", &self.full_name)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

/// Session keys.
pub mod keys {
    /// Key for storing the current signed-in customer.
    pub const CURRENT_CUSTOMER: &str = "current_customer";

    /// Key for the shopping cart.
    pub const CART: &str = "cart";

    /// Key for the point-of-sale ticket.
    pub const POS_TICKET: &str = "pos_ticket";

    /// Key for the last checkout status.
    pub const CHECKOUT_STATUS: &str = "checkout_status";
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn customer(full_name: Option<&str>) -> CurrentCustomer {
        CurrentCustomer {
            id: "0b6f4a1e-9c1d-4c55-9d0a-5a9f3f0c2b11".to_string(),
            email: Email::parse("maria.lopez@example.com").unwrap(),
            full_name: full_name.map(String::from),
            access_token: "eyJhbGciOiJIUzI1NiJ9.token".to_string(),
        }
    }

    #[test]
    fn test_display_name_prefers_profile_name() {
        assert_eq!(customer(Some("María López")).display_name(), "María López");
    }

    #[test]
    fn test_display_name_falls_back_to_local_part() {
        assert_eq!(customer(None).display_name(), "maria.lopez");
        assert_eq!(customer(Some("   ")).display_name(), "maria.lopez");
    }

    #[test]
    fn test_debug_redacts_token() {
        let debug = format!("{:?}", customer(None));
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("eyJhbGciOiJIUzI1NiJ9"));
    }
}

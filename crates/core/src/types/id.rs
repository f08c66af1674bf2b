//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing identifiers from different entity types. Catalog
//! products are keyed by slugs (`"touring-1000"`) and orders by human-readable
//! numbers (`"AW12345678"`), so the IDs wrap strings.

use std::time::{SystemTime, UNIX_EPOCH};

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`
/// - `Display`, `AsRef<str>`, `From<String>`, `From<&str>` and `Into<String>`
///
/// # Example
///
/// ```rust
/// # use adventure_works_core::define_id;
/// define_id!(StoreId);
/// define_id!(TicketId);
///
/// let store = StoreId::new("san-salvador");
/// let ticket = TicketId::new("san-salvador");
///
/// // These are different types, so this won't compile:
/// // let _: StoreId = ticket;
/// assert_eq!(store.as_str(), ticket.as_str());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(OrderNumber);

impl OrderNumber {
    /// Order number for an online checkout: `AW` followed by the last eight
    /// digits of the millisecond timestamp.
    #[must_use]
    pub fn online(epoch_millis: u128) -> Self {
        Self(format!("AW{:08}", epoch_millis % 100_000_000))
    }

    /// Order number for an in-store sale: `POS-` followed by the millisecond
    /// timestamp.
    #[must_use]
    pub fn point_of_sale(epoch_millis: u128) -> Self {
        Self(format!("POS-{epoch_millis}"))
    }

    /// Online order number for the current time.
    #[must_use]
    pub fn online_now() -> Self {
        Self::online(epoch_millis())
    }

    /// In-store order number for the current time.
    #[must_use]
    pub fn point_of_sale_now() -> Self {
        Self::point_of_sale(epoch_millis())
    }
}

fn epoch_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_online_order_number_uses_last_eight_digits() {
        assert_eq!(OrderNumber::online(1_760_888_123_456).as_str(), "AW88123456");
        assert_eq!(OrderNumber::online(42).as_str(), "AW00000042");
    }

    #[test]
    fn test_point_of_sale_order_number() {
        assert_eq!(
            OrderNumber::point_of_sale(1_760_888_123_456).as_str(),
            "POS-1760888123456"
        );
    }

    #[test]
    fn test_now_variants_have_expected_shape() {
        let online = OrderNumber::online_now();
        assert!(online.as_str().starts_with("AW"));
        assert_eq!(online.as_str().len(), 10);

        assert!(OrderNumber::point_of_sale_now().as_str().starts_with("POS-"));
    }

    #[test]
    fn test_product_id_serde_is_transparent() {
        let id = ProductId::new("road-750");
        assert_eq!(serde_json::to_string(&id).ok().as_deref(), Some("\"road-750\""));
        assert_eq!(id.to_string(), "road-750");
    }
}

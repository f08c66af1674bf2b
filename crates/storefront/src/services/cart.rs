//! Shopping cart kept in the visitor's session.
//!
//! A cart line is identified by (product id, color, size). Adding a line that
//! already exists bumps its quantity instead of creating a duplicate.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use adventure_works_core::{Price, ProductId};

use crate::catalog::Product;
use crate::models::session_keys;

/// Errors raised while resolving an add-to-cart request against the catalog.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CartError {
    #[error("Producto no encontrado: {0}")]
    UnknownProduct(String),
    #[error("Color no disponible: {0}")]
    UnknownColor(String),
    #[error("Tamaño no disponible: {0}")]
    UnknownSize(String),
}

/// One line in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Color display name.
    pub color: String,
    /// Size selection key.
    pub size: String,
    pub quantity: u32,
    pub image: String,
}

impl CartItem {
    /// Build a line for `product` in the chosen color and size.
    ///
    /// Name, price and image always come from the catalog. Missing choices
    /// fall back to the product's first color and size.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the color or size is not offered.
    pub fn from_catalog(
        product: &Product,
        color: Option<&str>,
        size: Option<&str>,
    ) -> Result<Self, CartError> {
        let color = match color.map(str::trim).filter(|c| !c.is_empty()) {
            Some(key) => product
                .color(key)
                .ok_or_else(|| CartError::UnknownColor(key.to_string()))?,
            None => product
                .default_color()
                .ok_or_else(|| CartError::UnknownColor(String::new()))?,
        };
        let size = match size.map(str::trim).filter(|s| !s.is_empty()) {
            Some(key) => product
                .size(key)
                .ok_or_else(|| CartError::UnknownSize(key.to_string()))?,
            None => product
                .default_size()
                .ok_or_else(|| CartError::UnknownSize(String::new()))?,
        };

        Ok(Self {
            id: ProductId::new(product.id),
            name: product.name.to_string(),
            price: product.price(),
            color: color.name.to_string(),
            size: size.value.to_string(),
            quantity: 1,
            image: product.image.to_string(),
        })
    }

    /// Unit price × quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }

    fn matches(&self, id: &str, color: &str, size: &str) -> bool {
        self.id.as_str() == id && self.color == color && self.size == size
    }
}

/// The cart: an ordered list of unique lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Lines in the order they were first added.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add one unit of `item`, merging with an existing line of the same
    /// product, color and size.
    pub fn add(&mut self, item: CartItem) {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|line| line.matches(item.id.as_str(), &item.color, &item.size))
        {
            existing.quantity = existing.quantity.saturating_add(1);
        } else {
            self.items.push(CartItem { quantity: 1, ..item });
        }
    }

    /// Remove the matching line. Does nothing if there is none.
    pub fn remove(&mut self, id: &str, color: &str, size: &str) {
        self.items.retain(|line| !line.matches(id, color, size));
    }

    /// Set the quantity of the matching line; zero or less removes it.
    pub fn update_quantity(&mut self, id: &str, color: &str, size: &str, quantity: i64) {
        let Ok(quantity) = u32::try_from(quantity) else {
            if quantity <= 0 {
                self.remove(id, color, size);
            }
            return;
        };
        if quantity == 0 {
            self.remove(id, color, size);
            return;
        }
        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.matches(id, color, size))
        {
            line.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |sum, line| sum.saturating_add(line.quantity))
    }

    /// Sum of unit price × quantity across all lines.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.items.iter().map(CartItem::line_total).sum()
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the cart from the session, or an empty cart if there is none.
///
/// # Errors
///
/// Returns an error if the session store cannot be read.
pub async fn load(session: &Session) -> Result<Cart, tower_sessions::session::Error> {
    Ok(session
        .get::<Cart>(session_keys::CART)
        .await?
        .unwrap_or_default())
}

/// Persist the cart to the session.
///
/// # Errors
///
/// Returns an error if the session store cannot be written.
pub async fn save(session: &Session, cart: &Cart) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CART, cart).await
}

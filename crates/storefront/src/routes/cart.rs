//! Cart route handlers.
//!
//! The cart lives in the session. Mutations answer with the updated cart
//! as JSON; `GET /cart` renders the cart page with the checkout form.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, Json, response::IntoResponse};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use crate::catalog;
use crate::error::{Result, add_breadcrumb};
use crate::services::cart::{self, Cart, CartItem};

// =============================================================================
// Views
// =============================================================================

/// Cart line display data.
#[derive(Clone, Serialize)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub color: String,
    pub size: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
    pub image: String,
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            color: item.color.clone(),
            size: item.size.clone(),
            quantity: item.quantity,
            price: item.price.to_string(),
            line_price: item.line_total().to_string(),
            image: item.image.clone(),
        }
    }
}

/// Cart display data, also the JSON body of every cart mutation.
#[derive(Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub item_count: u32,
    pub subtotal: String,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            item_count: cart.total_items(),
            subtotal: cart.total_price().to_string(),
        }
    }
}

/// Cart count badge.
#[derive(Serialize)]
pub struct CartCount {
    pub count: u32,
}

// =============================================================================
// Form Types
// =============================================================================

/// Add to cart form data. Color and size default to the product's first
/// option.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    pub color: Option<String>,
    pub size: Option<String>,
}

/// Identifies one cart line.
#[derive(Debug, Deserialize)]
pub struct CartLineForm {
    pub product_id: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub size: String,
}

/// Update cart form data. A quantity of zero or less removes the line.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub size: String,
    pub quantity: i64,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

// =============================================================================
// Routes
// =============================================================================

/// Display cart page.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<impl IntoResponse> {
    let cart = cart::load(&session).await?;
    Ok(CartShowTemplate {
        cart: CartView::from(&cart),
    })
}

/// Add a catalog product to the cart.
///
/// Name, price and image come from the catalog, never from the form.
#[instrument(skip(session))]
pub async fn add(session: Session, Form(form): Form<AddToCartForm>) -> Result<Json<CartView>> {
    let product = catalog::find(form.product_id.trim())
        .ok_or_else(|| cart::CartError::UnknownProduct(form.product_id.clone()))?;
    let item = CartItem::from_catalog(product, form.color.as_deref(), form.size.as_deref())?;

    let mut cart = cart::load(&session).await?;
    add_breadcrumb(
        "cart",
        "Added to cart",
        Some(&[
            ("product_id", item.id.as_str()),
            ("color", item.color.as_str()),
            ("size", item.size.as_str()),
        ]),
    );
    cart.add(item);
    cart::save(&session, &cart).await?;

    Ok(Json(CartView::from(&cart)))
}

/// Set the quantity of a cart line.
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateCartForm>) -> Result<Json<CartView>> {
    let mut cart = cart::load(&session).await?;
    cart.update_quantity(&form.product_id, &form.color, &form.size, form.quantity);
    cart::save(&session, &cart).await?;

    Ok(Json(CartView::from(&cart)))
}

/// Remove a cart line.
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<CartLineForm>) -> Result<Json<CartView>> {
    let mut cart = cart::load(&session).await?;
    cart.remove(&form.product_id, &form.color, &form.size);
    cart::save(&session, &cart).await?;

    Ok(Json(CartView::from(&cart)))
}

/// Empty the cart.
#[instrument(skip(session))]
pub async fn clear(session: Session) -> Result<Json<CartView>> {
    let mut cart = cart::load(&session).await?;
    cart.clear();
    cart::save(&session, &cart).await?;

    Ok(Json(CartView::from(&cart)))
}

/// Number of items in the cart.
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<Json<CartCount>> {
    let cart = cart::load(&session).await?;
    Ok(Json(CartCount {
        count: cart.total_items(),
    }))
}

//! Catalog route handlers.
//!
//! HTML listing and detail pages plus a small JSON API over the same
//! in-memory catalog.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Json,
    extract::{Path, Query},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::catalog::{self, AccessoryCategory, Product, ProductType};
use crate::error::{AppError, Result};

// =============================================================================
// Views
// =============================================================================

/// Product card shown in listings.
#[derive(Clone, Serialize)]
pub struct ProductCardView {
    pub id: &'static str,
    pub name: &'static str,
    pub price: String,
    pub kind: &'static str,
    pub category: Option<&'static str>,
    pub image: &'static str,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price().to_string(),
            kind: product.kind.as_str(),
            category: product.category.map(|c| c.as_str()),
            image: product.image,
        }
    }
}

/// Full product, as shown on the detail page and returned by the API.
#[derive(Clone, Serialize)]
pub struct ProductDetailView {
    #[serde(flatten)]
    pub card: ProductCardView,
    pub description: &'static str,
    pub images: &'static [&'static str],
    pub technical_specs: &'static [&'static str],
    pub colors: &'static [catalog::ColorOption],
    pub sizes: &'static [catalog::SizeOption],
}

impl From<&Product> for ProductDetailView {
    fn from(product: &Product) -> Self {
        Self {
            card: ProductCardView::from(product),
            description: product.description,
            images: product.images,
            technical_specs: product.technical_specs,
            colors: product.colors,
            sizes: product.sizes,
        }
    }
}

/// Navigation link for a filter.
#[derive(Clone)]
pub struct FilterLink {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

// =============================================================================
// Query Types
// =============================================================================

/// Listing filters. Values are matched case-insensitively.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub category: Option<String>,
}

impl CatalogQuery {
    fn parse(&self) -> Result<(Option<ProductType>, Option<AccessoryCategory>)> {
        let kind = non_empty(self.kind.as_deref())
            .map(str::parse::<ProductType>)
            .transpose()
            .map_err(|_| AppError::BadRequest("Tipo de producto desconocido".to_string()))?;
        let category = non_empty(self.category.as_deref())
            .map(str::parse::<AccessoryCategory>)
            .transpose()
            .map_err(|_| AppError::BadRequest("Categoría desconocida".to_string()))?;
        Ok((kind, category))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

// =============================================================================
// Templates
// =============================================================================

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub title: String,
    pub filters: Vec<FilterLink>,
    pub products: Vec<ProductCardView>,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: ProductDetailView,
    pub related_products: Vec<ProductCardView>,
}

// =============================================================================
// Page Routes
// =============================================================================

/// Display the home page: every bike line.
#[instrument]
pub async fn home() -> impl IntoResponse {
    ProductsIndexTemplate {
        title: "Bicicletas Adventure Works".to_string(),
        filters: type_links(None),
        products: catalog::all()
            .iter()
            .filter(|p| p.is_bike())
            .map(ProductCardView::from)
            .collect(),
    }
}

/// Display the product listing, optionally filtered by `type` and
/// `category`.
#[instrument]
pub async fn index(Query(query): Query<CatalogQuery>) -> Result<impl IntoResponse> {
    let (kind, category) = query.parse()?;
    let title = match (kind, category) {
        (_, Some(category)) => format!("Accesorios: {category}"),
        (Some(kind), None) => kind.to_string(),
        (None, None) => "Todos los productos".to_string(),
    };

    Ok(ProductsIndexTemplate {
        title,
        filters: type_links(kind),
        products: catalog::filter(kind, category)
            .map(ProductCardView::from)
            .collect(),
    })
}

/// Display accessories, optionally narrowed to one category.
#[instrument]
pub async fn accessories(Query(query): Query<CatalogQuery>) -> Result<impl IntoResponse> {
    let (_, category) = query.parse()?;
    let filters = AccessoryCategory::ALL
        .into_iter()
        .map(|c| FilterLink {
            label: c.as_str(),
            href: format!("/accessories?category={}", c.as_str()),
            active: category == Some(c),
        })
        .collect();

    Ok(ProductsIndexTemplate {
        title: category.map_or_else(|| "Accesorios".to_string(), |c| format!("Accesorios: {c}")),
        filters,
        products: catalog::filter(Some(ProductType::Accessories), category)
            .map(ProductCardView::from)
            .collect(),
    })
}

/// Display product detail page.
#[instrument]
pub async fn show(Path(id): Path<String>) -> Result<impl IntoResponse> {
    let product = find(&id)?;
    let related_products = catalog::filter(Some(product.kind), None)
        .filter(|p| p.id != product.id)
        .take(4)
        .map(ProductCardView::from)
        .collect();

    Ok(ProductShowTemplate {
        product: ProductDetailView::from(product),
        related_products,
    })
}

// =============================================================================
// API Routes
// =============================================================================

/// List products as JSON.
#[instrument]
pub async fn api_index(Query(query): Query<CatalogQuery>) -> Result<Json<Vec<ProductCardView>>> {
    let (kind, category) = query.parse()?;
    Ok(Json(
        catalog::filter(kind, category)
            .map(ProductCardView::from)
            .collect(),
    ))
}

/// Get one product as JSON.
#[instrument]
pub async fn api_show(Path(id): Path<String>) -> Result<Json<ProductDetailView>> {
    find(&id).map(|p| Json(ProductDetailView::from(p)))
}

fn find(id: &str) -> Result<&'static Product> {
    catalog::find(id).ok_or_else(|| AppError::NotFound("Producto no encontrado".to_string()))
}

fn type_links(active: Option<ProductType>) -> Vec<FilterLink> {
    ProductType::ALL
        .into_iter()
        .map(|kind| FilterLink {
            label: kind.as_str(),
            href: if kind == ProductType::Accessories {
                "/accessories".to_string()
            } else {
                format!("/products?type={}", kind.as_str())
            },
            active: active == Some(kind),
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn query(kind: Option<&str>, category: Option<&str>) -> CatalogQuery {
        CatalogQuery {
            kind: kind.map(String::from),
            category: category.map(String::from),
        }
    }

    #[test]
    fn test_query_parse() {
        assert_eq!(query(None, None).parse().unwrap(), (None, None));
        assert_eq!(
            query(Some("e-bike"), Some("")).parse().unwrap(),
            (Some(ProductType::EBike), None)
        );
        assert_eq!(
            query(None, Some("luces")).parse().unwrap(),
            (None, Some(AccessoryCategory::Luces))
        );
        assert!(matches!(
            query(Some("tandem"), None).parse(),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_detail_view_serializes_flat() {
        let product = catalog::find("touring-1000").unwrap();
        let json = serde_json::to_value(ProductDetailView::from(product)).unwrap();
        assert_eq!(json["id"], "touring-1000");
        assert_eq!(json["price"], "$2199.00");
        assert_eq!(json["kind"], "Touring");
        assert_eq!(json["colors"][0]["value"], "black");
    }

    #[test]
    fn test_type_links_point_accessories_to_own_page() {
        let links = type_links(Some(ProductType::Road));
        let road = links.iter().find(|l| l.label == "Road").unwrap();
        assert!(road.active);
        assert_eq!(road.href, "/products?type=Road");
        let accessories = links.iter().find(|l| l.label == "Accessories").unwrap();
        assert_eq!(accessories.href, "/accessories");
    }
}

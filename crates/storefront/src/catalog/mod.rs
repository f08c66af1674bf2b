//! Static product catalog and store directory.
//!
//! The catalog is compiled into the binary. Products are looked up by slug
//! (`"touring-1000"`) and never change at runtime.

mod data;

use std::fmt;
use std::str::FromStr;

use adventure_works_core::Price;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use data::{PRODUCTS, STORES};

/// Product line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    Road,
    Mountain,
    Touring,
    #[serde(rename = "E-Bike")]
    EBike,
    Accessories,
}

impl ProductType {
    /// Every product line, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Road,
        Self::Mountain,
        Self::Touring,
        Self::EBike,
        Self::Accessories,
    ];

    /// Display name as shown in navigation and on invoices.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Road => "Road",
            Self::Mountain => "Mountain",
            Self::Touring => "Touring",
            Self::EBike => "E-Bike",
            Self::Accessories => "Accessories",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("invalid product type: {s}"))
    }
}

/// Accessory category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessoryCategory {
    Llantas,
    Cadenas,
    Pedales,
    Manillares,
    Sillines,
    Luces,
}

impl AccessoryCategory {
    /// Every category, in menu order.
    pub const ALL: [Self; 6] = [
        Self::Llantas,
        Self::Cadenas,
        Self::Pedales,
        Self::Manillares,
        Self::Sillines,
        Self::Luces,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Llantas => "Llantas",
            Self::Cadenas => "Cadenas",
            Self::Pedales => "Pedales",
            Self::Manillares => "Manillares",
            Self::Sillines => "Sillines",
            Self::Luces => "Luces",
        }
    }
}

impl fmt::Display for AccessoryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessoryCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("invalid accessory category: {s}"))
    }
}

/// A color a product is offered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorOption {
    /// Display name (`"Matte Black"`), stored on cart lines and invoices.
    pub name: &'static str,
    /// Selection key (`"black"`).
    pub value: &'static str,
    /// Swatch color.
    pub hex: &'static str,
}

/// A size a product is offered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeOption {
    /// Display label (`"M (17\")"`).
    pub label: &'static str,
    /// Selection key (`"M"`), stored on cart lines and invoices.
    pub value: &'static str,
}

/// A catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    price_cents: i64,
    pub kind: ProductType,
    pub category: Option<AccessoryCategory>,
    /// Primary image used in listings and on cart lines.
    pub image: &'static str,
    pub images: &'static [&'static str],
    pub description: &'static str,
    pub technical_specs: &'static [&'static str],
    /// Offered colors; the first one is the default selection.
    pub colors: &'static [ColorOption],
    /// Offered sizes; the first one is the default selection.
    pub sizes: &'static [SizeOption],
}

impl Product {
    /// Unit price.
    #[must_use]
    pub fn price(&self) -> Price {
        Price::usd(Decimal::new(self.price_cents, 2))
    }

    /// Find an offered color by its selection key or display name.
    #[must_use]
    pub fn color(&self, key: &str) -> Option<&'static ColorOption> {
        self.colors
            .iter()
            .find(|c| c.value.eq_ignore_ascii_case(key) || c.name.eq_ignore_ascii_case(key))
    }

    /// Find an offered size by its selection key.
    #[must_use]
    pub fn size(&self, key: &str) -> Option<&'static SizeOption> {
        self.sizes.iter().find(|s| s.value.eq_ignore_ascii_case(key))
    }

    /// Default color selection.
    #[must_use]
    pub fn default_color(&self) -> Option<&'static ColorOption> {
        self.colors.first()
    }

    /// Default size selection.
    #[must_use]
    pub fn default_size(&self) -> Option<&'static SizeOption> {
        self.sizes.first()
    }

    /// Whether this product is a bicycle rather than an accessory.
    #[must_use]
    pub fn is_bike(&self) -> bool {
        self.kind != ProductType::Accessories
    }
}

/// A physical store location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Store {
    pub id: u32,
    pub name: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    /// Opening hours, one line per range.
    pub hours: &'static [&'static str],
    pub image: &'static str,
    pub map_url: &'static str,
}

/// Every product in catalog order.
#[must_use]
pub fn all() -> &'static [Product] {
    PRODUCTS
}

/// Look up a product by id.
#[must_use]
pub fn find(id: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

/// Products filtered by line and accessory category.
///
/// `None` for a filter means "any".
pub fn filter(
    kind: Option<ProductType>,
    category: Option<AccessoryCategory>,
) -> impl Iterator<Item = &'static Product> {
    PRODUCTS.iter().filter(move |p| {
        kind.is_none_or(|k| p.kind == k) && category.is_none_or(|c| p.category == Some(c))
    })
}

/// Physical store locations.
#[must_use]
pub fn stores() -> &'static [Store] {
    STORES
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_product_ids_are_unique() {
        let ids: HashSet<_> = all().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), all().len());
    }

    #[test]
    fn test_every_product_has_default_options() {
        for product in all() {
            assert!(product.default_color().is_some(), "{} has no colors", product.id);
            assert!(product.default_size().is_some(), "{} has no sizes", product.id);
            assert!(!product.images.is_empty(), "{} has no images", product.id);
        }
    }

    #[test]
    fn test_accessories_have_categories_and_bikes_do_not() {
        for product in all() {
            assert_eq!(
                product.category.is_some(),
                !product.is_bike(),
                "{} category mismatch",
                product.id
            );
        }
    }

    #[test]
    fn test_find() {
        let product = find("touring-1000").unwrap();
        assert_eq!(product.name, "Touring-1000");
        assert_eq!(product.price().to_string(), "$2199.00");
        assert!(find("unicycle-1").is_none());
    }

    #[test]
    fn test_accessory_price_keeps_cents() {
        assert_eq!(find("tire-road-700c").unwrap().price().to_string(), "$45.99");
    }

    #[test]
    fn test_filter() {
        let ebikes: Vec<_> = filter(Some(ProductType::EBike), None).map(|p| p.id).collect();
        assert_eq!(ebikes, ["ebike-2000", "ebike-1500"]);

        let chains = filter(None, Some(AccessoryCategory::Cadenas)).count();
        assert_eq!(chains, 3);

        assert_eq!(filter(None, None).count(), all().len());
    }

    #[test]
    fn test_color_and_size_lookup() {
        let product = find("touring-1000").unwrap();
        assert_eq!(product.color("black").unwrap().name, "Matte Black");
        assert_eq!(product.color("Matte Black").unwrap().value, "black");
        assert_eq!(product.size("xl").unwrap().label, "XL (21\")");
        assert!(product.color("purple").is_none());
        assert!(product.size("XXL").is_none());
    }

    #[test]
    fn test_product_type_from_str() {
        assert_eq!("e-bike".parse::<ProductType>().unwrap(), ProductType::EBike);
        assert_eq!("Road".parse::<ProductType>().unwrap(), ProductType::Road);
        assert!("tandem".parse::<ProductType>().is_err());
        assert_eq!(
            "luces".parse::<AccessoryCategory>().unwrap(),
            AccessoryCategory::Luces
        );
    }

    #[test]
    fn test_stores() {
        assert_eq!(stores().len(), 3);
        assert!(stores().iter().all(|s| s.phone.starts_with("+503")));
    }
}

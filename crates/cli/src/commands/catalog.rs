//! Catalog inspection commands.

use adventure_works_storefront::catalog::{self, ProductType};

/// Print every product (or one product line) as an aligned table.
///
/// # Errors
///
/// Returns an error if `kind` is not a known product line.
#[allow(clippy::print_stdout)]
pub fn list(kind: Option<&str>) -> Result<(), String> {
    let kind = kind.map(str::parse::<ProductType>).transpose()?;

    for product in catalog::filter(kind, None) {
        let category = product.category.map_or("", |c| c.as_str());
        println!(
            "{:<24} {:<28} {:<12} {:<11} {:>10}",
            product.id,
            product.name,
            product.kind.as_str(),
            category,
            product.price().to_string()
        );
    }
    Ok(())
}

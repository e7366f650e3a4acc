//! Catalog filtering and sorting

use serde::{Deserialize, Serialize};
use shared::models::{CakeFlavor, Occasion, Product, ProductCategory};

/// Shop sort orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    Popular,
    Newest,
    PriceLow,
    PriceHigh,
}

/// Shop filter set; unset fields do not constrain the result
#[derive(Debug, Clone, Default)]
pub struct ProductFilters {
    /// Case-insensitive match over name, description and tags
    pub search: Option<String>,
    pub category: Option<ProductCategory>,
    pub subcategory: Option<CakeFlavor>,
    /// Any-of match; empty means no constraint
    pub occasions: Vec<Occasion>,
    /// Inclusive (min, max) bounds on the base price
    pub price_range: Option<(f64, f64)>,
    pub sort_by: Option<SortBy>,
}

impl ProductFilters {
    /// Apply filters and sort to a product slice
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut result: Vec<Product> = products
            .iter()
            .filter(|p| self.accepts(p))
            .cloned()
            .collect();

        match self.sort_by {
            Some(SortBy::Popular) => result.sort_by_key(|p| !p.popular),
            // Seed order is newest-first already
            Some(SortBy::Newest) | None => {}
            Some(SortBy::PriceLow) => result.sort_by(|a, b| a.price.total_cmp(&b.price)),
            Some(SortBy::PriceHigh) => result.sort_by(|a, b| b.price.total_cmp(&a.price)),
        }

        result
    }

    fn accepts(&self, product: &Product) -> bool {
        if let Some(query) = &self.search {
            let query = query.to_lowercase();
            let matches = product.name.to_lowercase().contains(&query)
                || product.description.to_lowercase().contains(&query)
                || product
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&query));
            if !matches {
                return false;
            }
        }

        if let Some(category) = self.category
            && product.category != category
        {
            return false;
        }

        if let Some(flavor) = self.subcategory
            && product.subcategory != Some(flavor)
        {
            return false;
        }

        if !self.occasions.is_empty()
            && !product.occasion.iter().any(|o| self.occasions.contains(o))
        {
            return false;
        }

        if let Some((min, max)) = self.price_range
            && (product.price < min || product.price > max)
        {
            return false;
        }

        true
    }
}

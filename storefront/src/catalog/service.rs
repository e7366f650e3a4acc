//! Mock catalog access
//!
//! Stands in for the future backend: every call clones from the seeded
//! collection after a simulated delay. The delay exists only to drive
//! realistic loading states; there are no retries, timeouts or failure
//! modes, and an in-flight call cannot be aborted.

use std::time::Duration;

use shared::models::{Product, ProductCategory};
use tracing::debug;

use super::filters::ProductFilters;
use super::seed;

/// Catalog collection behind the shop pages
pub struct MockCatalog {
    products: Vec<Product>,
    delay: Duration,
}

impl MockCatalog {
    pub fn new(products: Vec<Product>, delay: Duration) -> Self {
        Self { products, delay }
    }

    /// Catalog seeded with the standard storefront products
    pub fn seeded(delay: Duration) -> Self {
        Self::new(seed::products(), delay)
    }

    async fn simulate_latency(&self) {
        tokio::time::sleep(self.delay).await;
    }

    /// List products matching the filters
    pub async fn list(&self, filters: &ProductFilters) -> Vec<Product> {
        self.simulate_latency().await;
        let result = filters.apply(&self.products);
        debug!(matched = result.len(), "listed products");
        result
    }

    /// Fetch a single product
    pub async fn get(&self, id: &str) -> Option<Product> {
        self.simulate_latency().await;
        self.products.iter().find(|p| p.id == id).cloned()
    }

    /// Popular products, in seed order
    pub async fn popular(&self, limit: usize) -> Vec<Product> {
        self.simulate_latency().await;
        self.products
            .iter()
            .filter(|p| p.popular)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Other products from the same category
    pub async fn related(
        &self,
        product_id: &str,
        category: ProductCategory,
        limit: usize,
    ) -> Vec<Product> {
        self.simulate_latency().await;
        self.products
            .iter()
            .filter(|p| p.category == category && p.id != product_id)
            .take(limit)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> MockCatalog {
        MockCatalog::seeded(Duration::ZERO)
    }

    #[tokio::test]
    async fn get_returns_none_for_unknown_id() {
        assert!(catalog().get("no-such-cake").await.is_none());
        assert!(catalog().get("vanilla-cake").await.is_some());
    }

    #[tokio::test]
    async fn popular_respects_the_limit() {
        let popular = catalog().popular(4).await;
        assert_eq!(popular.len(), 4);
        assert!(popular.iter().all(|p| p.popular));
    }

    #[tokio::test]
    async fn related_excludes_the_product_itself() {
        let related = catalog()
            .related("vanilla-cake", ProductCategory::Cakes, 4)
            .await;
        assert!(!related.is_empty());
        assert!(related.iter().all(|p| p.id != "vanilla-cake"));
        assert!(related
            .iter()
            .all(|p| p.category == ProductCategory::Cakes));
    }

    #[tokio::test]
    async fn list_with_default_filters_returns_everything() {
        let all = catalog().list(&ProductFilters::default()).await;
        assert_eq!(all.len(), seed::products().len());
    }
}

//! Admin product management (mock collection)

use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use shared::models::{
    AdminProduct, AdminProductUpdate, CakeFlavor, Occasion, Product, ProductCategory,
};
use thiserror::Error;
use tracing::info;

/// Admin-layer errors
#[derive(Debug, Error)]
pub enum AdminError {
    #[error("Product not found: {0}")]
    ProductNotFound(String),
}

pub type AdminResult<T> = Result<T, AdminError>;

/// Admin product collection
pub struct AdminProductStore {
    products: Vec<AdminProduct>,
    delay: Duration,
}

impl AdminProductStore {
    pub fn new(products: Vec<AdminProduct>, delay: Duration) -> Self {
        Self { products, delay }
    }

    /// Collection seeded with the standard admin mock data
    pub fn seeded(delay: Duration) -> Self {
        Self::new(seed_products(), delay)
    }

    async fn simulate_latency(&self) {
        tokio::time::sleep(self.delay).await;
    }

    pub async fn list(&self) -> Vec<AdminProduct> {
        self.simulate_latency().await;
        self.products.clone()
    }

    pub async fn get(&self, id: &str) -> Option<AdminProduct> {
        self.simulate_latency().await;
        self.products.iter().find(|p| p.product.id == id).cloned()
    }

    /// Create a product copy in the admin collection
    ///
    /// The supplied id is replaced with the next collection id; the
    /// storefront catalog is untouched.
    pub async fn create(
        &mut self,
        mut product: Product,
        sku: Option<String>,
        stock: Option<u32>,
    ) -> AdminProduct {
        self.simulate_latency().await;
        let now = Utc::now();
        product.id = (self.products.len() + 1).to_string();
        let entry = AdminProduct {
            product,
            sku,
            stock,
            created_at: now,
            updated_at: now,
        };
        info!(id = %entry.product.id, name = %entry.product.name, "created admin product");
        self.products.push(entry.clone());
        entry
    }

    /// Apply a partial update and refresh `updated_at`
    pub async fn update(
        &mut self,
        id: &str,
        update: AdminProductUpdate,
    ) -> AdminResult<AdminProduct> {
        self.simulate_latency().await;
        let entry = self
            .products
            .iter_mut()
            .find(|p| p.product.id == id)
            .ok_or_else(|| AdminError::ProductNotFound(id.to_string()))?;

        let product = &mut entry.product;
        if let Some(name) = update.name {
            product.name = name;
        }
        if let Some(category) = update.category {
            product.category = category;
        }
        if let Some(flavor) = update.subcategory {
            product.subcategory = Some(flavor);
        }
        if let Some(occasion) = update.occasion {
            product.occasion = occasion;
        }
        if let Some(price) = update.price {
            product.price = price;
        }
        if let Some(per_pound) = update.price_per_pound {
            product.price_per_pound = per_pound;
        }
        if let Some(image) = update.image {
            product.image = image;
        }
        if let Some(description) = update.description {
            product.description = description;
        }
        if let Some(tags) = update.tags {
            product.tags = tags;
        }
        if let Some(available) = update.available {
            product.available = available;
        }
        if let Some(popular) = update.popular {
            product.popular = popular;
        }
        if let Some(sizes) = update.sizes {
            product.sizes = sizes;
        }
        if let Some(sku) = update.sku {
            entry.sku = Some(sku);
        }
        if let Some(stock) = update.stock {
            entry.stock = Some(stock);
        }
        entry.updated_at = Utc::now();
        Ok(entry.clone())
    }

    /// Remove a product from the admin collection
    pub async fn delete(&mut self, id: &str) -> AdminResult<()> {
        self.simulate_latency().await;
        let before = self.products.len();
        self.products.retain(|p| p.product.id != id);
        if self.products.len() == before {
            return Err(AdminError::ProductNotFound(id.to_string()));
        }
        info!(id, "deleted admin product");
        Ok(())
    }
}

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid seed date")
}

/// Admin product seeds; note the numeric ids and the coarser size list,
/// both carried over from the admin mock data rather than the catalog.
fn seed_products() -> Vec<AdminProduct> {
    vec![
        AdminProduct {
            product: Product {
                id: "1".to_string(),
                name: "Vanilla Dream Cake".to_string(),
                category: ProductCategory::Cakes,
                subcategory: Some(CakeFlavor::Vanilla),
                occasion: vec![Occasion::Birthday, Occasion::Anniversary],
                price: 450.0,
                price_per_pound: true,
                image: "/assets/vanilla-cake.jpg".to_string(),
                gallery_images: vec![],
                description: "Light and fluffy vanilla sponge with fresh cream".to_string(),
                tags: vec![
                    "fresh cream".to_string(),
                    "custom message".to_string(),
                    "bestseller".to_string(),
                ],
                available: true,
                popular: true,
                sizes: vec![1.0, 2.0, 3.0, 5.0],
            },
            sku: Some("CAKE-VAN-001".to_string()),
            stock: Some(50),
            created_at: date(2024, 1, 15),
            updated_at: date(2024, 1, 20),
        },
        AdminProduct {
            product: Product {
                id: "2".to_string(),
                name: "Belgian Chocolate Cake".to_string(),
                category: ProductCategory::Cakes,
                subcategory: Some(CakeFlavor::Chocolate),
                occasion: vec![
                    Occasion::Birthday,
                    Occasion::Anniversary,
                    Occasion::Wedding,
                ],
                price: 600.0,
                price_per_pound: true,
                image: "/assets/chocolate-cake.jpg".to_string(),
                gallery_images: vec![],
                description: "Decadent Belgian chocolate cake with dark chocolate ganache"
                    .to_string(),
                tags: vec![
                    "dark chocolate".to_string(),
                    "ganache".to_string(),
                    "premium".to_string(),
                ],
                available: true,
                popular: true,
                sizes: vec![1.0, 2.0, 3.0, 5.0],
            },
            sku: Some("CAKE-CHO-001".to_string()),
            stock: Some(30),
            created_at: date(2024, 1, 15),
            updated_at: date(2024, 1, 20),
        },
        AdminProduct {
            product: Product {
                id: "3".to_string(),
                name: "Birthday Balloon Set".to_string(),
                category: ProductCategory::Decoration,
                subcategory: None,
                occasion: vec![Occasion::Birthday],
                price: 299.0,
                price_per_pound: false,
                image: "/assets/birthday-decor.jpg".to_string(),
                gallery_images: vec![],
                description: "Colorful balloon set with Happy Birthday foil balloon".to_string(),
                tags: vec![
                    "balloons".to_string(),
                    "colorful".to_string(),
                    "party".to_string(),
                ],
                available: true,
                popular: true,
                sizes: vec![],
            },
            sku: Some("DEC-BAL-001".to_string()),
            stock: Some(100),
            created_at: date(2024, 1, 10),
            updated_at: date(2024, 1, 18),
        },
    ]
}

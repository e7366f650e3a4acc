//! Product Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Cakes,
    Decoration,
}

impl ProductCategory {
    /// Singular label used on order messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cakes => "Cake",
            Self::Decoration => "Decoration",
        }
    }
}

/// Occasion tag
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Occasion {
    Birthday,
    Anniversary,
    Wedding,
}

/// Cake subcategory (flavour)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CakeFlavor {
    Vanilla,
    Blackforest,
    Chocolate,
    Whiteforest,
}

/// Product entity
///
/// Catalog products are defined at seed time and never mutated by the
/// storefront. The admin layer edits its own copies (see [`AdminProduct`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: ProductCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<CakeFlavor>,
    pub occasion: Vec<Occasion>,
    /// Price in whole rupees; per pound when `price_per_pound` is set
    pub price: f64,
    /// Priced by weight: unit price is `price x selected size in pounds`
    #[serde(default, rename = "pricePerLb")]
    pub price_per_pound: bool,
    pub image: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gallery_images: Vec<String>,
    pub description: String,
    pub tags: Vec<String>,
    pub available: bool,
    #[serde(default)]
    pub popular: bool,
    /// Weight options in pounds
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sizes: Vec<f64>,
}

/// Admin-side product entity
///
/// Extends [`Product`] with stock-keeping fields. Lives in the admin
/// mock collection only; never reconciled with the storefront catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProduct {
    #[serde(flatten)]
    pub product: Product,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Update product payload (admin)
///
/// All fields optional; only supplied fields are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProductUpdate {
    pub name: Option<String>,
    pub category: Option<ProductCategory>,
    pub subcategory: Option<CakeFlavor>,
    pub occasion: Option<Vec<Occasion>>,
    pub price: Option<f64>,
    #[serde(rename = "pricePerLb")]
    pub price_per_pound: Option<bool>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub available: Option<bool>,
    pub popular: Option<bool>,
    pub sizes: Option<Vec<f64>>,
    pub sku: Option<String>,
    pub stock: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_wire_names_are_camel_case() {
        let product = Product {
            id: "vanilla-cake".to_string(),
            name: "Vanilla Dream Cake".to_string(),
            category: ProductCategory::Cakes,
            subcategory: Some(CakeFlavor::Vanilla),
            occasion: vec![Occasion::Birthday],
            price: 450.0,
            price_per_pound: true,
            image: "/assets/vanilla-cake.jpg".to_string(),
            gallery_images: vec![],
            description: "Light and fluffy".to_string(),
            tags: vec!["bestseller".to_string()],
            available: true,
            popular: true,
            sizes: vec![0.5, 1.0, 2.0],
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["category"], "cakes");
        assert_eq!(json["subcategory"], "vanilla");
        assert_eq!(json["pricePerLb"], true);
        assert!(json.get("galleryImages").is_none());
    }

    #[test]
    fn price_per_pound_defaults_to_false() {
        let json = r#"{
            "id": "birthday-balloon-set",
            "name": "Birthday Balloon Set",
            "category": "decoration",
            "occasion": ["birthday"],
            "price": 299,
            "image": "/assets/birthday-decor.jpg",
            "description": "Colorful balloon set",
            "tags": ["balloons"],
            "available": true
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert!(!product.price_per_pound);
        assert!(!product.popular);
        assert!(product.sizes.is_empty());
    }
}

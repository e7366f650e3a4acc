//! Cart line types and pricing
//!
//! A cart line pairs a product with a quantity and the buyer's chosen
//! size and eggless variant. Line identity rules:
//!
//! - Merge identity (used when adding): product id, selected size and
//!   eggless flag must all match.
//! - Loose selector (used by remove/update/toggle): product id and
//!   selected size only, ignoring the eggless flag.

use serde::{Deserialize, Serialize};

use crate::models::Product;

/// A single cart selection
///
/// The persisted wire shape is
/// `{ product, quantity, selectedSize?, isEggless? }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_size: Option<f64>,
    #[serde(default, rename = "isEggless")]
    pub eggless: bool,
}

impl CartLine {
    /// Unit price: per-pound products are priced by the selected size
    pub fn unit_price(&self) -> f64 {
        match self.selected_size {
            Some(size) if self.product.price_per_pound => self.product.price * size,
            _ => self.product.price,
        }
    }

    /// Line total (unit price x quantity)
    pub fn line_total(&self) -> f64 {
        self.unit_price() * f64::from(self.quantity)
    }

    /// Merge identity: (product, size, eggless)
    pub fn same_line(&self, product_id: &str, selected_size: Option<f64>, eggless: bool) -> bool {
        self.product.id == product_id
            && self.selected_size == selected_size
            && self.eggless == eggless
    }

    /// Loose selector: (product, size), ignoring the eggless flag
    pub fn matches(&self, product_id: &str, selected_size: Option<f64>) -> bool {
        self.product.id == product_id && self.selected_size == selected_size
    }
}

//! In-memory cart state
//!
//! An explicit state container: callers hold an instance and apply
//! mutations; every mutation returns a [`CartChange`] describing what
//! happened, and a presentation layer decides whether to notify.
//!
//! Mutations never fail. Out-of-range inputs (zero quantity increments
//! and the like) are tolerated rather than rejected; the store mirrors
//! the permissive behavior the storefront has always had.
//!
//! Identity rules: `add` merges on the full (product, size, eggless)
//! triple; `remove`, `update_quantity` and `update_eggless` select on
//! the looser (product, size) pair. Only adding distinguishes the
//! eggless variant; every mutate-in-place operation treats both
//! variants of a sized product as one selection.

use shared::cart::CartLine;
use shared::models::{Product, ProductCategory};
use tracing::debug;

/// Description of a cart mutation outcome
///
/// Returned instead of dispatching a notification, so callers can
/// decide how (or whether) to surface the change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartChange {
    /// A new line was appended
    Added { product_id: String },
    /// An existing line absorbed the added quantity
    Merged { product_id: String, quantity: u32 },
    /// All lines matching the selector were removed
    Removed { product_id: String },
    /// Quantity was set on the lines matching the selector
    QuantitySet { product_id: String, quantity: u32 },
    /// Eggless flag was set on the lines matching the selector
    EgglessSet { product_id: String, eggless: bool },
    /// Cart was emptied
    Cleared,
}

/// The buyer's current selection
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from persisted lines
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }

    /// Current lines, in insertion order
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add a selection, merging into an existing line when the full
    /// (product, size, eggless) identity matches.
    pub fn add(
        &mut self,
        product: Product,
        quantity: u32,
        selected_size: Option<f64>,
        eggless: bool,
    ) -> CartChange {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.same_line(&product.id, selected_size, eggless))
        {
            line.quantity += quantity;
            debug!(product_id = %product.id, quantity = line.quantity, "merged cart line");
            return CartChange::Merged {
                product_id: product.id,
                quantity: line.quantity,
            };
        }

        let product_id = product.id.clone();
        debug!(product_id = %product_id, quantity, "added cart line");
        self.lines.push(CartLine {
            product,
            quantity,
            selected_size,
            eggless,
        });
        CartChange::Added { product_id }
    }

    /// Remove every line matching (product, size), regardless of the
    /// eggless flag.
    pub fn remove(&mut self, product_id: &str, selected_size: Option<f64>) -> CartChange {
        self.lines
            .retain(|line| !line.matches(product_id, selected_size));
        debug!(product_id, "removed cart lines");
        CartChange::Removed {
            product_id: product_id.to_string(),
        }
    }

    /// Set the quantity on matching lines; zero delegates to [`remove`].
    ///
    /// [`remove`]: CartStore::remove
    pub fn update_quantity(
        &mut self,
        product_id: &str,
        quantity: u32,
        selected_size: Option<f64>,
    ) -> CartChange {
        if quantity == 0 {
            return self.remove(product_id, selected_size);
        }
        for line in self
            .lines
            .iter_mut()
            .filter(|line| line.matches(product_id, selected_size))
        {
            line.quantity = quantity;
        }
        CartChange::QuantitySet {
            product_id: product_id.to_string(),
            quantity,
        }
    }

    /// Set the eggless flag on matching lines
    pub fn update_eggless(
        &mut self,
        product_id: &str,
        eggless: bool,
        selected_size: Option<f64>,
    ) -> CartChange {
        for line in self
            .lines
            .iter_mut()
            .filter(|line| line.matches(product_id, selected_size))
        {
            line.eggless = eggless;
        }
        CartChange::EgglessSet {
            product_id: product_id.to_string(),
            eggless,
        }
    }

    /// Empty the cart
    pub fn clear(&mut self) -> CartChange {
        self.lines.clear();
        CartChange::Cleared
    }

    /// Cart total in rupees: sum of line totals, per-weight pricing
    /// applied per line.
    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities across all lines (cart badge count)
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Whether any line matches (product, size), ignoring eggless
    pub fn contains(&self, product_id: &str, selected_size: Option<f64>) -> bool {
        self.lines
            .iter()
            .any(|line| line.matches(product_id, selected_size))
    }

    /// Whether any line belongs to the given category
    pub fn has_category(&self, category: ProductCategory) -> bool {
        self.lines
            .iter()
            .any(|line| line.product.category == category)
    }

    pub fn has_cakes(&self) -> bool {
        self.has_category(ProductCategory::Cakes)
    }

    pub fn has_decorations(&self) -> bool {
        self.has_category(ProductCategory::Decoration)
    }
}

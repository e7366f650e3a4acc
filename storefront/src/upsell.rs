//! Upsell prompt state
//!
//! When the buyer heads to checkout with only cakes (or only
//! decorations) in the cart, the shop offers the missing category
//! first. A cart holding both, or neither, goes straight through.

use crate::cart::CartStore;

/// Which category to offer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsellKind {
    Cakes,
    Decorations,
}

/// Open/closed state of the upsell prompt
#[derive(Debug, Default)]
pub struct UpsellPrompt {
    kind: Option<UpsellKind>,
}

impl UpsellPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// The upsell a cart warrants, if any
    pub fn for_cart(cart: &CartStore) -> Option<UpsellKind> {
        match (cart.has_cakes(), cart.has_decorations()) {
            (true, false) => Some(UpsellKind::Decorations),
            (false, true) => Some(UpsellKind::Cakes),
            _ => None,
        }
    }

    pub fn open(&mut self, kind: UpsellKind) {
        self.kind = Some(kind);
    }

    pub fn close(&mut self) {
        self.kind = None;
    }

    pub fn is_open(&self) -> bool {
        self.kind.is_some()
    }

    pub fn kind(&self) -> Option<UpsellKind> {
        self.kind
    }
}

//! Admin mock layer
//!
//! A parallel mutation path over separately seeded collections. Nothing
//! here shares state with the storefront cart or catalog: the admin
//! panel edits its own copies. Order and custom-order management lives
//! on [`MockOrderApi`](crate::orders::MockOrderApi); this module owns
//! the product collection.

mod products;

pub use products::{AdminError, AdminProductStore, AdminResult};

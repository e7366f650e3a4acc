//! Shared types for the Blackberry Cakes storefront
//!
//! Data models, cart line types and catalog constants used across the
//! storefront and message-composer crates.

pub mod cart;
pub mod checkout;
pub mod constants;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

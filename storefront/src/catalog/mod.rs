//! Product catalog: seeded data, filtering and the mock access layer

mod filters;
mod seed;
mod service;

pub use filters::{ProductFilters, SortBy};
pub use seed::products;
pub use service::MockCatalog;

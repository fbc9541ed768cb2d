//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `catalog` - Remote catalog service (HTTP) and in-memory fixtures
//! - `orders` - Order persistence (PostgreSQL, in-memory)

pub mod catalog;
pub mod orders;

pub use catalog::{HttpCatalogConfig, HttpCatalogSource, InMemoryCatalogSource};
pub use orders::{InMemoryOrderRepository, PostgresOrderRepository};

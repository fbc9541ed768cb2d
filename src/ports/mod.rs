//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CatalogSource` - Remote catalog service (menu items, vendors, buildings)
//! - `OrderRepository` - Local order persistence and its read projections

mod catalog_source;
mod order_repository;

pub use catalog_source::{CatalogSource, TransportError};
pub use order_repository::OrderRepository;

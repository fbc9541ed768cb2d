//! Catalog source adapters.
//!
//! - `HttpCatalogSource` - JSON client for the remote catalog service
//! - `InMemoryCatalogSource` - Fixture-backed source with failure injection

mod http_source;
mod in_memory;
mod wire;

pub use http_source::{HttpCatalogConfig, HttpCatalogSource};
pub use in_memory::InMemoryCatalogSource;

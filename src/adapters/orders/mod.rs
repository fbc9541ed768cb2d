//! Order persistence adapters.
//!
//! - `InMemoryOrderRepository` - Single-lock store for tests and development
//! - `PostgresOrderRepository` - Orders and their items, written in one transaction

mod in_memory;
mod postgres;

pub use in_memory::InMemoryOrderRepository;
pub use postgres::PostgresOrderRepository;

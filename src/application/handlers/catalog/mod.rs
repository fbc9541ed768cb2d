//! Catalog query handlers.

mod aggregator;

pub use aggregator::CatalogAggregator;

//! Canteen Core - food-ordering domain for a campus canteen.
//!
//! Aggregates the remote catalog into orderable items, keeps a single-vendor
//! cart, assembles carts into persisted orders and tracks each order through
//! its courier-driven delivery lifecycle.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;

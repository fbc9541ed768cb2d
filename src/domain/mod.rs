//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, state machine, errors)
//! - `catalog` - Raw catalog records, the vendor join and price normalization
//! - `cart` - Single-vendor cart aggregate and its snapshots
//! - `order` - Order assembly, delivery lifecycle and receipt projection

pub mod cart;
pub mod catalog;
pub mod foundation;
pub mod order;

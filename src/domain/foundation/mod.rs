//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, the state machine trait and error types
//! that form the vocabulary of the ordering domain.

mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{BuildingId, ConsumerId, CourierId, MenuItemId, OrderId, VendorId};
pub use state_machine::{IllegalTransition, StateMachine};
pub use timestamp::Timestamp;

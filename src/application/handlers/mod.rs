//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod cart;
pub mod catalog;
pub mod order;

pub use cart::{AddOutcome, CartStore, PendingConfirmation};
pub use catalog::CatalogAggregator;
pub use order::{
    AdvanceStatusCommand, AdvanceStatusHandler, AdvanceStatusResult, AssignCourierCommand,
    AssignCourierHandler, CompleteOrderCommand, CompleteOrderHandler, GetOrderHandler,
    GetOrderQuery, ListOrdersHandler, ListOrdersQuery, OrderDetail, OrderError, OrderView,
    ResetOrdersHandler, SubmitOrderCommand, SubmitOrderHandler, SubmitOrderResult,
};

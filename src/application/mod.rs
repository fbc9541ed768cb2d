//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Write paths (cart mutations, submission, status changes) and read paths
//! (catalog queries, order listings) live side by side per concern.

pub mod handlers;

pub use handlers::{
    AddOutcome, AdvanceStatusCommand, AdvanceStatusHandler, AdvanceStatusResult,
    AssignCourierCommand, AssignCourierHandler, CartStore, CatalogAggregator,
    CompleteOrderCommand, CompleteOrderHandler, GetOrderHandler, GetOrderQuery,
    ListOrdersHandler, ListOrdersQuery, OrderDetail, OrderError, OrderView, PendingConfirmation,
    ResetOrdersHandler, SubmitOrderCommand, SubmitOrderHandler, SubmitOrderResult,
};

//! Order command and query handlers.

mod advance_status;
mod assign_courier;
mod complete_order;
mod errors;
mod get_order;
mod list_orders;
mod reset_orders;
mod submit_order;
mod views;

pub use advance_status::{AdvanceStatusCommand, AdvanceStatusHandler, AdvanceStatusResult};
pub use assign_courier::{AssignCourierCommand, AssignCourierHandler};
pub use complete_order::{CompleteOrderCommand, CompleteOrderHandler};
pub use errors::OrderError;
pub use get_order::{GetOrderHandler, GetOrderQuery};
pub use list_orders::{ListOrdersHandler, ListOrdersQuery};
pub use reset_orders::ResetOrdersHandler;
pub use submit_order::{SubmitOrderCommand, SubmitOrderHandler, SubmitOrderResult};
pub use views::{OrderDetail, OrderView};

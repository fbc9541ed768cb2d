//! Cart domain module.
//!
//! A cart holds lines from exactly one vendor. Adding an item from another
//! vendor is refused by the aggregate; deciding whether to start over is left
//! to the caller (see the application-level `CartStore`).

mod aggregate;
mod line;
mod snapshot;

pub use aggregate::{Cart, VendorConflict};
pub use line::CartLine;
pub use snapshot::CartSnapshot;

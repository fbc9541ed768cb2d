//! Order aggregate.
//!
//! An order is written once at submission. Afterwards only its status and
//! its assigned courier change. Items live separately and are immutable.
//!
//! # Invariants
//!
//! - `total_price` is frozen at submission
//! - Status changes go through [`Order::advance`] or [`Order::complete`]
//! - An unrecognized stored status blocks every transition
//! - Once a courier is assigned, other couriers cannot touch the order
//! - Writes are conditional on the [`OrderRevision`] the change was based on

use serde::{Deserialize, Serialize};

use super::errors::LifecycleError;
use super::status::{OrderStatus, StoredStatus};
use crate::domain::foundation::{
    ConsumerId, CourierId, IllegalTransition, OrderId, StateMachine, Timestamp,
};

/// The mutable part of an order as it was loaded.
///
/// A repository only applies an update while the stored order still
/// matches this revision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRevision {
    pub status: StoredStatus,
    pub courier_id: Option<CourierId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    consumer_id: ConsumerId,
    total_price: i64,
    status: StoredStatus,
    created_at: Timestamp,
    delivery_address: String,
    proof_image: Option<String>,
    courier_id: Option<CourierId>,
}

impl Order {
    /// Rebuilds an order from persisted fields.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: OrderId,
        consumer_id: ConsumerId,
        total_price: i64,
        status: StoredStatus,
        created_at: Timestamp,
        delivery_address: String,
        proof_image: Option<String>,
        courier_id: Option<CourierId>,
    ) -> Self {
        Self {
            id,
            consumer_id,
            total_price,
            status,
            created_at,
            delivery_address,
            proof_image,
            courier_id,
        }
    }

    // === Accessors ===

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn consumer_id(&self) -> &ConsumerId {
        &self.consumer_id
    }

    pub fn total_price(&self) -> i64 {
        self.total_price
    }

    pub fn status(&self) -> &StoredStatus {
        &self.status
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn delivery_address(&self) -> &str {
        &self.delivery_address
    }

    pub fn proof_image(&self) -> Option<&str> {
        self.proof_image.as_deref()
    }

    pub fn courier_id(&self) -> Option<&CourierId> {
        self.courier_id.as_ref()
    }

    /// Snapshot of status and courier, taken before a change.
    pub fn revision(&self) -> OrderRevision {
        OrderRevision {
            status: self.status.clone(),
            courier_id: self.courier_id.clone(),
        }
    }

    /// Whether this order still matches a previously taken revision.
    pub fn matches(&self, revision: &OrderRevision) -> bool {
        self.status == revision.status && self.courier_id == revision.courier_id
    }

    /// The lifecycle status, or an error if the stored code is unknown.
    pub fn lifecycle_status(&self) -> Result<OrderStatus, LifecycleError> {
        match &self.status {
            StoredStatus::Known(status) => Ok(*status),
            StoredStatus::Unrecognized(raw) => Err(LifecycleError::UnrecognizedStatus(raw.clone())),
        }
    }

    fn ensure_courier(&self, courier: &CourierId) -> Result<(), LifecycleError> {
        match &self.courier_id {
            Some(assigned) if assigned != courier => Err(LifecycleError::Forbidden(format!(
                "order {} is assigned to another courier",
                self.id
            ))),
            _ => Ok(()),
        }
    }

    // === Transitions ===

    /// Courier moves the order to its next status.
    ///
    /// An unassigned order is claimed by the courier that advances it.
    /// Returns the previous status.
    pub fn advance(
        &mut self,
        courier: &CourierId,
        target: OrderStatus,
    ) -> Result<OrderStatus, LifecycleError> {
        self.ensure_courier(courier)?;
        let current = self.lifecycle_status()?;
        let next = current.transition_to(target)?;

        self.status = next.into();
        if self.courier_id.is_none() {
            self.courier_id = Some(courier.clone());
        }
        Ok(current)
    }

    /// Consumer confirms receipt, finishing the order.
    ///
    /// Only the ordering consumer may do this, and only before the order
    /// reached a terminal status. Returns the previous status.
    pub fn complete(&mut self, consumer: &ConsumerId) -> Result<OrderStatus, LifecycleError> {
        if &self.consumer_id != consumer {
            return Err(LifecycleError::Forbidden(format!(
                "order {} belongs to another consumer",
                self.id
            )));
        }
        let current = self.lifecycle_status()?;
        if !current.can_consumer_complete() {
            return Err(IllegalTransition::new(current, OrderStatus::Selesai).into());
        }

        self.status = OrderStatus::Selesai.into();
        Ok(current)
    }

    /// Courier claims the order without changing its status.
    ///
    /// Claiming an order already held by the same courier is a no-op.
    pub fn assign_courier(&mut self, courier: &CourierId) -> Result<(), LifecycleError> {
        self.ensure_courier(courier)?;
        let current = self.lifecycle_status()?;
        if current.is_terminal() {
            return Err(LifecycleError::Forbidden(format!(
                "order {} is already {}",
                self.id, current
            )));
        }
        self.courier_id = Some(courier.clone());
        Ok(())
    }
}

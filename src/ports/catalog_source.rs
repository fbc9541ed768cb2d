//! Catalog source port.
//!
//! Defines the contract for fetching the three raw catalog collections from
//! the remote catalog service. Each call is independent; the aggregator
//! decides how to combine them.
//!
//! # Design
//!
//! - **No retries**: implementations report failures, callers own backoff
//! - **Empty is success**: an empty list is a valid answer, not an error

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::catalog::{Building, MenuItem, Vendor};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Failure of a single remote catalog call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Catalog service returned status {status}")]
    Status { status: u16 },

    #[error("Malformed catalog payload: {0}")]
    Decode(String),
}

impl TransportError {
    pub fn network(message: impl Into<String>) -> Self {
        TransportError::Network(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        TransportError::Decode(message.into())
    }
}

impl From<TransportError> for DomainError {
    fn from(err: TransportError) -> Self {
        DomainError::new(ErrorCode::TransportFailure, err.to_string())
    }
}

/// Port for the remote catalog service.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// List every menu item.
    async fn list_menu_items(&self) -> Result<Vec<MenuItem>, TransportError>;

    /// List every vendor ("tenant").
    async fn list_vendors(&self) -> Result<Vec<Vendor>, TransportError>;

    /// List every delivery building.
    async fn list_buildings(&self) -> Result<Vec<Building>, TransportError>;
}

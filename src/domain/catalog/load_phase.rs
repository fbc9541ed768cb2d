//! Catalog load lifecycle and the snapshot published to observers.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::orderable_item::OrderableItem;
use super::records::Building;
use crate::domain::foundation::StateMachine;

/// Phase of the catalog aggregator.
///
/// `Idle → Loading → {Idle, Error}`; `Error` is not terminal, any new load
/// moves back to `Loading`. Overlapping loads keep the phase at `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Error,
}

impl StateMachine for LoadPhase {
    fn valid_transitions(&self) -> Vec<Self> {
        use LoadPhase::*;
        match self {
            Idle => vec![Loading],
            Loading => vec![Loading, Idle, Error],
            Error => vec![Loading],
        }
    }
}

impl fmt::Display for LoadPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LoadPhase::Idle => "idle",
            LoadPhase::Loading => "loading",
            LoadPhase::Error => "error",
        };
        write!(f, "{}", s)
    }
}

/// Everything an observer of the catalog needs, published atomically.
///
/// In the `Error` phase `items` and `buildings` are always empty; a partial
/// join is never exposed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogSnapshot {
    pub phase: LoadPhase,
    pub items: Arc<Vec<OrderableItem>>,
    pub buildings: Arc<Vec<Building>>,
    /// Human-readable reason for the last failure, if in `Error`.
    pub error: Option<String>,
}

impl CatalogSnapshot {
    /// A successful load result.
    pub fn loaded(items: Vec<OrderableItem>, buildings: Vec<Building>) -> Self {
        Self {
            phase: LoadPhase::Idle,
            items: Arc::new(items),
            buildings: Arc::new(buildings),
            error: None,
        }
    }

    /// A failed load result: empty catalog plus the reason.
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            phase: LoadPhase::Error,
            items: Arc::new(Vec::new()),
            buildings: Arc::new(Vec::new()),
            error: Some(reason.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.phase == LoadPhase::Error
    }
}

//! OrderStatus enum for the delivery lifecycle.
//!
//! Status codes are the Indonesian words the storage and transport layers
//! use: `diterima` (received), `diproses` (being prepared),
//! `dalam_pengantaran` (out for delivery), `selesai` (done) and
//! `dibatalkan` (cancelled).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{StateMachine, ValidationError};

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Diterima,
    Diproses,
    DalamPengantaran,
    Selesai,
    Dibatalkan,
}

impl OrderStatus {
    /// Status every new order starts in.
    pub const INITIAL: OrderStatus = OrderStatus::Diterima;

    pub fn all() -> &'static [OrderStatus] {
        &[
            OrderStatus::Diterima,
            OrderStatus::Diproses,
            OrderStatus::DalamPengantaran,
            OrderStatus::Selesai,
            OrderStatus::Dibatalkan,
        ]
    }

    /// Storage/transport code.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Diterima => "diterima",
            OrderStatus::Diproses => "diproses",
            OrderStatus::DalamPengantaran => "dalam_pengantaran",
            OrderStatus::Selesai => "selesai",
            OrderStatus::Dibatalkan => "dibatalkan",
        }
    }

    /// Label shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Diterima => "Diterima",
            OrderStatus::Diproses => "Diproses",
            OrderStatus::DalamPengantaran => "Dalam Pengantaran",
            OrderStatus::Selesai => "Selesai",
            OrderStatus::Dibatalkan => "Dibatalkan",
        }
    }

    /// Returns true if the consumer may still confirm receipt.
    pub fn can_consumer_complete(&self) -> bool {
        !self.is_terminal()
    }
}

/// Courier-facing progression.
///
/// - diterima -> diproses | dibatalkan
/// - diproses -> dalam_pengantaran | dibatalkan
/// - dalam_pengantaran -> selesai | dibatalkan
/// - selesai, dibatalkan: terminal
impl StateMachine for OrderStatus {
    fn valid_transitions(&self) -> Vec<Self> {
        use OrderStatus::*;
        match self {
            Diterima => vec![Diproses, Dibatalkan],
            Diproses => vec![DalamPengantaran, Dibatalkan],
            DalamPengantaran => vec![Selesai, Dibatalkan],
            Selesai | Dibatalkan => vec![],
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::all()
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ValidationError::invalid_format("status", format!("unknown status '{}'", s)))
    }
}

/// A status value as read from storage or transport.
///
/// Unknown codes are kept verbatim for display but never take part in
/// transitions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredStatus {
    Known(OrderStatus),
    Unrecognized(String),
}

impl StoredStatus {
    /// Classifies a raw status code.
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<OrderStatus>() {
            Ok(status) => StoredStatus::Known(status),
            Err(_) => StoredStatus::Unrecognized(raw.to_string()),
        }
    }

    /// The lifecycle status, if recognized.
    pub fn known(&self) -> Option<OrderStatus> {
        match self {
            StoredStatus::Known(status) => Some(*status),
            StoredStatus::Unrecognized(_) => None,
        }
    }

    /// Raw code for persistence.
    pub fn as_str(&self) -> &str {
        match self {
            StoredStatus::Known(status) => status.as_str(),
            StoredStatus::Unrecognized(raw) => raw,
        }
    }

    /// User-facing label; unknown codes are shown capitalized.
    pub fn display_label(&self) -> String {
        match self {
            StoredStatus::Known(status) => status.label().to_string(),
            StoredStatus::Unrecognized(raw) => capitalize(raw),
        }
    }
}

impl From<OrderStatus> for StoredStatus {
    fn from(status: OrderStatus) -> Self {
        StoredStatus::Known(status)
    }
}

fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

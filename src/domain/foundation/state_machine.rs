//! State machine trait for status enums.
//!
//! Provides a consistent interface for validating and performing state
//! transitions across lifecycle enums (catalog load phase, order status).

use std::fmt;
use thiserror::Error;

/// A requested transition that is not in the current state's legal set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot transition from {from} to {to}")]
pub struct IllegalTransition {
    pub from: String,
    pub to: String,
}

impl IllegalTransition {
    pub fn new(from: impl fmt::Display, to: impl fmt::Display) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// Trait for status enums that represent state machines.
///
/// Implementors define the legal next states and get validated transition
/// methods for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for LoadPhase {
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Idle => vec![Loading],
///             Loading => vec![Loading, Idle, Error],
///             Error => vec![Loading],
///         }
///     }
/// }
///
/// let next = LoadPhase::Idle.transition_to(LoadPhase::Loading)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + fmt::Display {
    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, IllegalTransition> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(IllegalTransition::new(self, target))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestStatus {
        Draft,
        Active,
        Archived,
    }

    impl fmt::Display for TestStatus {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{:?}", self)
        }
    }

    impl StateMachine for TestStatus {
        fn valid_transitions(&self) -> Vec<Self> {
            use TestStatus::*;
            match self {
                Draft => vec![Active],
                Active => vec![Archived],
                Archived => vec![],
            }
        }
    }

    #[test]
    fn transition_to_succeeds_for_valid_transition() {
        assert_eq!(
            TestStatus::Draft.transition_to(TestStatus::Active),
            Ok(TestStatus::Active)
        );
    }

    #[test]
    fn transition_to_fails_for_invalid_transition() {
        let err = TestStatus::Draft
            .transition_to(TestStatus::Archived)
            .unwrap_err();
        assert_eq!(err.from, "Draft");
        assert_eq!(err.to, "Archived");
        assert_eq!(err.to_string(), "Cannot transition from Draft to Archived");
    }

    #[test]
    fn is_terminal_only_for_states_without_exits() {
        assert!(TestStatus::Archived.is_terminal());
        assert!(!TestStatus::Draft.is_terminal());
    }
}

//! Status enums for checkout.

use serde::{Deserialize, Serialize};

/// Checkout payment status.
///
/// Moves `Idle → Processing → Success | Error`. A finished attempt is reset
/// to `Idle` before the customer can submit again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Idle,
    Processing,
    Success,
    Error,
}

impl PaymentStatus {
    /// Whether a new payment may be submitted from this status.
    ///
    /// Only an attempt already in flight blocks submission; a finished
    /// attempt is treated as reset.
    #[must_use]
    pub const fn can_submit(self) -> bool {
        !matches!(self, Self::Processing)
    }

    /// Whether the attempt has finished, successfully or not.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Success | Self::Error)
    }

    /// Status after a reset: terminal states return to `Idle`.
    #[must_use]
    pub const fn reset(self) -> Self {
        match self {
            Self::Processing => Self::Processing,
            Self::Idle | Self::Success | Self::Error => Self::Idle,
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Processing => write!(f, "processing"),
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processing_blocks_submission() {
        assert!(PaymentStatus::Idle.can_submit());
        assert!(PaymentStatus::Error.can_submit());
        assert!(PaymentStatus::Success.can_submit());
        assert!(!PaymentStatus::Processing.can_submit());
    }

    #[test]
    fn test_reset_rearms_terminal_states() {
        assert_eq!(PaymentStatus::Error.reset(), PaymentStatus::Idle);
        assert_eq!(PaymentStatus::Success.reset(), PaymentStatus::Idle);
        assert_eq!(PaymentStatus::Processing.reset(), PaymentStatus::Processing);
        assert!(PaymentStatus::Error.is_terminal());
        assert!(!PaymentStatus::Idle.is_terminal());
    }

    #[test]
    fn test_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Processing).ok().as_deref(),
            Some("\"processing\"")
        );
        assert_eq!(PaymentStatus::Error.to_string(), "error");
    }
}

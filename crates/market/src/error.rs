//! Unified error handling for the market engine.
//!
//! Every fallible engine operation returns `Result<T, MarketError>`. No
//! error here is fatal: validation rejections and permission failures are
//! surfaced to the caller, and not-found / wrong-state conditions are
//! reported rather than silently absorbed.

use estee_core::OrderStatus;
use thiserror::Error;

use crate::store::StorageError;

/// Engine-level error type.
#[derive(Debug, Error)]
pub enum MarketError {
    /// Malformed input, rejected before any state change.
    #[error("validation error: {0}")]
    Validation(String),

    /// A referenced entity does not exist.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Entity kind, e.g. `"product"` or `"order"`.
        kind: &'static str,
        /// The identifier that failed to resolve.
        id: String,
    },

    /// An order lifecycle transition was attempted from the wrong state.
    #[error("invalid order transition: {from} → {to}")]
    InvalidTransition {
        /// Status the order is currently in.
        from: OrderStatus,
        /// Status the caller tried to move to.
        to: OrderStatus,
    },

    /// The operation requires a signed-in user.
    ///
    /// Recoverable: the caller should redirect to authentication.
    #[error("sign in required")]
    AuthRequired,

    /// The operation requires the admin role.
    #[error("admin role required")]
    Forbidden,

    /// The persistence layer failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl MarketError {
    /// Shorthand for a [`MarketError::NotFound`] with a displayable id.
    pub fn not_found(kind: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

/// Result type alias for `MarketError`.
pub type Result<T> = std::result::Result<T, MarketError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MarketError::Validation("name cannot be empty".to_string());
        assert_eq!(err.to_string(), "validation error: name cannot be empty");

        let err = MarketError::not_found("product", "abc");
        assert_eq!(err.to_string(), "product not found: abc");

        let err = MarketError::InvalidTransition {
            from: OrderStatus::Interest,
            to: OrderStatus::Verified,
        };
        assert_eq!(
            err.to_string(),
            "invalid order transition: interest → verified"
        );
    }
}

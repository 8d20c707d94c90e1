//! Customer account actions.
//!
//! Actions run on behalf of the customer signed in to the current request
//! and report their outcome as an [`ActionState`], a uniform result that UI
//! layers can render without inspecting the underlying failure.
//!
//! - [`delete_address`]: Removes a saved address from the customer's account
//! - [`ActionContext`]: The collaborators an action runs with

pub mod addresses;

use serde::{Deserialize, Serialize};

pub use addresses::{delete_address, ActionContext, DELETE_CUSTOMER_ADDRESS_MUTATION};

/// Message used when a failure carries no text of its own.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error.";

/// Outcome of an account action.
///
/// Serializes as `{"status": "success" | "error", "message": ...}`.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::ActionState;
///
/// let state = ActionState::error("Address not found");
/// assert!(!state.is_success());
/// assert_eq!(state.message(), "Address not found");
///
/// let json = serde_json::to_value(&state).unwrap();
/// assert_eq!(json["status"], "error");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ActionState {
    /// The action completed.
    Success {
        /// Confirmation shown to the customer.
        message: String,
    },
    /// The action failed.
    Error {
        /// Failure description shown to the customer.
        message: String,
    },
}

impl ActionState {
    /// A successful outcome with `message`.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }

    /// A failed outcome with `message`.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// A failed outcome describing `error`.
    ///
    /// Falls back to [`UNKNOWN_ERROR_MESSAGE`] when the error renders as
    /// blank text.
    #[must_use]
    pub fn from_failure(error: &dyn std::error::Error) -> Self {
        let message = error.to_string();
        if message.trim().is_empty() {
            Self::error(UNKNOWN_ERROR_MESSAGE)
        } else {
            Self::error(message)
        }
    }

    /// Returns `true` for [`ActionState::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the message of either variant.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Success { message } | Self::Error { message } => message,
        }
    }
}

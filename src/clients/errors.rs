//! Error types for API client operations.
//!
//! Failures are split by where they happen so a caller can tell them apart:
//!
//! - [`TransportError`]: the request never produced a usable body (network
//!   failure, or a body that is not JSON)
//! - [`ValidationError`]: the body is JSON but does not have the expected shape
//! - [`InvalidFetchRequestError`]: a request was rejected before being sent
//! - [`GraphqlErrors`]: the GraphQL endpoint answered with a top-level `errors` list
//! - [`ApiError`]: unified error type encompassing all of the above
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::{ApiClient, ApiError};
//!
//! match client.query::<ShopResponse>("query { site { settings { storeName } } }").await {
//!     Ok(response) => println!("Store: {}", response.data.site.settings.store_name),
//!     Err(ApiError::Transport(e)) => println!("Could not reach the API: {e}"),
//!     Err(ApiError::Validation(e)) => println!("Unexpected response: {e}"),
//!     Err(other) => println!("Request failed: {other}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request fails at the network level or its body
/// cannot be read as JSON.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body is not valid JSON.
    #[error("Response from {url} (status {status}) is not valid JSON: {reason}")]
    InvalidJson {
        /// The URL the request was sent to.
        url: String,
        /// The HTTP status code of the response.
        status: u16,
        /// The parser's description of the problem.
        reason: String,
    },
}

/// Error returned when a JSON response does not match the expected shape.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::ValidationError;
///
/// let error = ValidationError {
///     shape: "StorefrontTokenResponse".to_string(),
///     reason: "missing field `token`".to_string(),
/// };
///
/// assert!(error.to_string().contains("StorefrontTokenResponse"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Response does not match the expected {shape} shape: {reason}")]
pub struct ValidationError {
    /// Name of the expected shape.
    pub shape: String,
    /// Why the body was rejected.
    pub reason: String,
}

impl ValidationError {
    /// Builds a validation error for the shape `T` from a decoding failure.
    pub(crate) fn for_shape<T>(error: &serde_json::Error) -> Self {
        Self {
            shape: short_type_name(std::any::type_name::<T>()),
            reason: error.to_string(),
        }
    }
}

/// Drops module paths from every segment of a type name, keeping generic
/// arguments (`alloc::vec::Vec<app::Site>` becomes `Vec<Site>`).
fn short_type_name(full: &str) -> String {
    let mut short = String::with_capacity(full.len());
    let mut segment = String::new();
    for c in full.chars() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            segment.push(c);
        } else {
            short.push_str(last_path_segment(&segment));
            segment.clear();
            short.push(c);
        }
    }
    short.push_str(last_path_segment(&segment));
    short
}

fn last_path_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

/// Error returned when a request fails validation before being sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidFetchRequestError {
    /// A non-empty endpoint does not start with `/`.
    #[error("Endpoint '{endpoint}' must start with '/'.")]
    RelativeEndpoint {
        /// The endpoint that was provided.
        endpoint: String,
    },

    /// A header name or value cannot be sent over HTTP.
    #[error("Invalid header '{name}'.")]
    InvalidHeader {
        /// The offending header name.
        name: String,
    },
}

/// A single entry of a GraphQL `errors` list.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct GraphqlErrorEntry {
    /// Human-readable error message.
    pub message: String,
}

/// Error returned when the GraphQL endpoint reports top-level errors.
///
/// These are protocol-level errors (malformed document, unauthorized
/// customer context). Business errors reported inside a mutation payload are
/// data, not errors, and never produce this type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{}", .messages.join("\n"))]
pub struct GraphqlErrors {
    /// The reported error messages, in response order.
    pub messages: Vec<String>,
}

/// Unified error type for all API client operations.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::{ApiError, ValidationError};
///
/// let error: ApiError = ValidationError {
///     shape: "ShopResponse".to_string(),
///     reason: "missing field `data`".to_string(),
/// }
/// .into();
///
/// assert!(error.is_validation());
/// assert!(!error.is_transport());
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure or unreadable body.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The body does not match the expected shape.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Request validation failed before sending.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidFetchRequestError),

    /// The GraphQL endpoint reported top-level errors.
    #[error(transparent)]
    Graphql(#[from] GraphqlErrors),
}

impl ApiError {
    /// Returns `true` for network failures and unreadable bodies.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns `true` for response shape mismatches.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

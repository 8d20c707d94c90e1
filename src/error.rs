//! Error types for client configuration.
//!
//! Configuration is validated once, when the [`ClientConfig`](crate::ClientConfig)
//! is built. A failure here is fatal for the client: there is no partial or
//! degraded construction.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::{StoreHash, ConfigError};
//!
//! let result = StoreHash::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyStoreHash)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a client configuration.
///
/// Each variant carries a message that names the offending field, so the
/// error can be surfaced directly at process start-up.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Store hash cannot be empty.
    #[error("Store hash cannot be empty. Please provide the hash of your BigCommerce store.")]
    EmptyStoreHash,

    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid BigCommerce API access token.")]
    EmptyAccessToken,

    /// Channel id is not an integer.
    #[error("Invalid channel id '{value}'. Expected an integer (e.g., '1').")]
    InvalidChannelId {
        /// The value that failed to parse.
        value: String,
    },

    /// A base URL override is malformed.
    #[error("Invalid URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.bigcommerce.com').")]
    InvalidUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The storefront domain override is empty or contains illegal characters.
    #[error("Invalid storefront domain '{domain}'. Expected a bare host name (e.g., 'mybigcommerce.com').")]
    InvalidStorefrontDomain {
        /// The invalid domain that was provided.
        domain: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

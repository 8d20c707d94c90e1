//! HTTP client types for BigCommerce API communication.
//!
//! This module provides the client layer for authenticated calls to the
//! BigCommerce REST API and the storefront GraphQL API.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ApiClient`]: The async client for REST and storefront GraphQL calls
//! - [`FetchRequest`]: Options for a raw REST call
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`GraphqlRequest`]: A GraphQL operation with variables and customer context
//! - [`GraphqlTransport`]: Executes [`GraphqlRequest`]s; implemented by [`ApiClient`]
//! - [`StorefrontToken`]: Short-lived bearer token for the storefront API
//! - [`ApiError`]: Error type covering every failure of a call
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::{ApiClient, FetchRequest};
//!
//! let client = ApiClient::from_env()?;
//!
//! // Raw REST call
//! let response = client.fetch("/v3/channels", FetchRequest::get()).await?;
//!
//! // Storefront GraphQL query
//! let site: serde_json::Value = client
//!     .query("query { site { settings { storeName } } }")
//!     .await?;
//! ```

mod api_client;
pub mod errors;
mod fetch_request;
pub mod graphql;
pub mod token;

pub use api_client::{ApiClient, SDK_VERSION};
pub use errors::{
    ApiError, GraphqlErrorEntry, GraphqlErrors, InvalidFetchRequestError, TransportError,
    ValidationError,
};
pub use fetch_request::{FetchBody, FetchRequest, FetchRequestBuilder, HttpMethod};
pub use graphql::{CachePolicy, GraphqlRequest, GraphqlTransport};
pub use token::{StorefrontToken, StorefrontTokenRequest, StorefrontTokenResponse};

//! # BigCommerce Storefront API
//!
//! A Rust client for the BigCommerce REST and storefront GraphQL APIs, with
//! customer account actions built on top of it.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - Validated newtypes for store credentials and endpoint overrides
//! - Raw authenticated REST calls via [`ApiClient::fetch`]
//! - Storefront GraphQL queries with per-call token exchange via [`ApiClient::query`]
//! - Distinct transport, validation and GraphQL errors via [`ApiError`]
//! - Account actions such as [`delete_address`], reporting an [`ActionState`]
//!
//! ## Quick Start
//!
//! ```rust
//! use bigcommerce_api::{ApiClient, ClientConfig, StoreHash, AccessToken, ChannelId};
//!
//! let config = ClientConfig::builder()
//!     .store_hash(StoreHash::new("abc123").unwrap())
//!     .access_token(AccessToken::new("your-access-token").unwrap())
//!     .channel_id(ChannelId::new(1))
//!     .build()
//!     .unwrap();
//!
//! let client = ApiClient::new(config);
//! assert_eq!(
//!     client.storefront_api_url(),
//!     "https://store-abc123.mybigcommerce.com/graphql"
//! );
//! ```
//!
//! ## Storefront Queries
//!
//! Every query first exchanges the access token for a short-lived storefront
//! token, then posts the document to the channel's storefront endpoint. The
//! response is validated against the requested type:
//!
//! ```rust,ignore
//! use bigcommerce_api::{ApiClient, ApiError};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct SiteResponse { data: serde_json::Value }
//!
//! let client = ApiClient::from_env()?;
//! match client.query::<SiteResponse>("query { site { id } }").await {
//!     Ok(site) => println!("{}", site.data),
//!     Err(e) if e.is_validation() => println!("Unexpected shape: {e}"),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```
//!
//! ## Account Actions
//!
//! Actions take their collaborators explicitly: a [`GraphqlTransport`]
//! (usually an [`ApiClient`]), a [`SessionContext`] naming the signed-in
//! customer, and a [`PathRevalidator`] for stale page renderings.
//!
//! ```rust,ignore
//! use bigcommerce_api::{delete_address, ActionContext, ActionState, RevalidateScope};
//!
//! let revalidator = |path: &str, scope: RevalidateScope| cache.invalidate(path, scope);
//! let ctx = ActionContext::new(&client, &session, &revalidator);
//!
//! match delete_address(&ctx, address_id, None).await {
//!     ActionState::Success { message } => flash_notice(message),
//!     ActionState::Error { message } => flash_error(message),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is passed explicitly, not stored globally
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime

pub mod account;
pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod revalidate;

// Re-export public types at crate root for convenience
pub use config::{
    AccessToken, BaseUrl, ChannelId, ClientConfig, ClientConfigBuilder, StoreHash,
    StorefrontDomain,
};
pub use error::ConfigError;

// Re-export client types
pub use clients::{
    ApiClient, ApiError, CachePolicy, FetchBody, FetchRequest, FetchRequestBuilder, GraphqlErrors,
    GraphqlRequest, GraphqlTransport, HttpMethod, InvalidFetchRequestError, StorefrontToken,
    TransportError, ValidationError,
};

// Re-export session and action types
pub use account::{delete_address, ActionContext, ActionState};
pub use auth::{CustomerId, SessionContext, StaticSession};
pub use revalidate::{PathRevalidator, RevalidateScope};

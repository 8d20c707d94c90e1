//! Configuration types for the BigCommerce API client.
//!
//! This module provides the configuration the [`ApiClient`](crate::ApiClient)
//! is built from. Configuration is validated once, up front, and is immutable
//! afterwards.
//!
//! # Overview
//!
//! - [`ClientConfig`]: The validated client configuration
//! - [`ClientConfigBuilder`]: A builder for constructing [`ClientConfig`] instances
//! - [`StoreHash`], [`AccessToken`], [`ChannelId`]: Required credential values
//! - [`BaseUrl`], [`StorefrontDomain`]: Optional endpoint overrides
//!
//! # Environment
//!
//! [`ClientConfig::from_env`] reads the following variables. Each name is
//! also accepted with a `NEXT_PUBLIC_` prefix, which is how storefront
//! deployments commonly expose them.
//!
//! | Variable | Required | Default |
//! |---|---|---|
//! | `BIGCOMMERCE_STORE_HASH` | yes | |
//! | `BIGCOMMERCE_ACCESS_TOKEN` | yes | |
//! | `BIGCOMMERCE_CHANNEL_ID` | yes | |
//! | `BIGCOMMERCE_API_URL` | no | `https://api.bigcommerce.com` |
//! | `BIGCOMMERCE_PERMANENT_STORE_DOMAIN` | no | `mybigcommerce.com` |
//! | `BIGCOMMERCE_STOREFRONT_URL` | no | derived from store hash and channel |
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::{ClientConfig, StoreHash, AccessToken, ChannelId};
//!
//! let config = ClientConfig::builder()
//!     .store_hash(StoreHash::new("abc123").unwrap())
//!     .access_token(AccessToken::new("my-token").unwrap())
//!     .channel_id(ChannelId::new(1))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.store_hash().as_ref(), "abc123");
//! ```

mod newtypes;

pub use newtypes::{AccessToken, BaseUrl, ChannelId, StoreHash, StorefrontDomain};

use crate::error::ConfigError;

/// Default REST API host.
pub const DEFAULT_API_URL: &str = "https://api.bigcommerce.com";

/// Environment variable holding the store hash.
pub const ENV_STORE_HASH: &str = "BIGCOMMERCE_STORE_HASH";
/// Environment variable holding the API access token.
pub const ENV_ACCESS_TOKEN: &str = "BIGCOMMERCE_ACCESS_TOKEN";
/// Environment variable holding the channel id.
pub const ENV_CHANNEL_ID: &str = "BIGCOMMERCE_CHANNEL_ID";
/// Environment variable overriding the REST API host.
pub const ENV_API_URL: &str = "BIGCOMMERCE_API_URL";
/// Environment variable overriding the storefront domain.
pub const ENV_STOREFRONT_DOMAIN: &str = "BIGCOMMERCE_PERMANENT_STORE_DOMAIN";
/// Environment variable overriding the full storefront origin.
pub const ENV_STOREFRONT_URL: &str = "BIGCOMMERCE_STOREFRONT_URL";

const PUBLIC_ENV_PREFIX: &str = "NEXT_PUBLIC_";

/// Validated configuration for the BigCommerce API client.
///
/// A `ClientConfig` can only be obtained through [`ClientConfigBuilder::build`]
/// or [`ClientConfig::from_env`], both of which reject missing or malformed
/// values.
///
/// # Thread Safety
///
/// `ClientConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    store_hash: StoreHash,
    access_token: AccessToken,
    channel_id: ChannelId,
    api_url: BaseUrl,
    storefront_domain: StorefrontDomain,
    storefront_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required variable is missing or any
    /// variable holds a malformed value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    ///
    /// `lookup` is called with the `BIGCOMMERCE_*` names listed in the
    /// [module documentation](self), then with their `NEXT_PUBLIC_` variants.
    /// Blank values count as unset for optional overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required value is missing or malformed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use bigcommerce_api::ClientConfig;
    ///
    /// let vars = HashMap::from([
    ///     ("BIGCOMMERCE_STORE_HASH", "abc123"),
    ///     ("BIGCOMMERCE_ACCESS_TOKEN", "token"),
    ///     ("BIGCOMMERCE_CHANNEL_ID", "1"),
    /// ]);
    ///
    /// let config = ClientConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();
    /// assert_eq!(config.channel_id().value(), 1);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key).or_else(|| lookup(&format!("{PUBLIC_ENV_PREFIX}{key}")))
        };
        let get_optional = |key: &str| get(key).filter(|value| !value.trim().is_empty());

        let mut builder = ClientConfigBuilder::new();

        // An unset required variable is reported as missing; a set but
        // invalid one reports its own validation error.
        if let Some(hash) = get(ENV_STORE_HASH) {
            builder = builder.store_hash(StoreHash::new(hash)?);
        }
        if let Some(token) = get(ENV_ACCESS_TOKEN) {
            builder = builder.access_token(AccessToken::new(token)?);
        }
        if let Some(channel) = get(ENV_CHANNEL_ID) {
            builder = builder.channel_id(channel.parse()?);
        }
        if let Some(url) = get_optional(ENV_API_URL) {
            builder = builder.api_url(BaseUrl::new(url)?);
        }
        if let Some(domain) = get_optional(ENV_STOREFRONT_DOMAIN) {
            builder = builder.storefront_domain(StorefrontDomain::new(domain)?);
        }
        if let Some(url) = get_optional(ENV_STOREFRONT_URL) {
            builder = builder.storefront_url(BaseUrl::new(url)?);
        }

        builder.build()
    }

    /// Returns the store hash.
    #[must_use]
    pub const fn store_hash(&self) -> &StoreHash {
        &self.store_hash
    }

    /// Returns the API access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the storefront channel id.
    #[must_use]
    pub const fn channel_id(&self) -> ChannelId {
        self.channel_id
    }

    /// Returns the REST API host.
    #[must_use]
    pub const fn api_url(&self) -> &BaseUrl {
        &self.api_url
    }

    /// Returns the permanent storefront domain.
    #[must_use]
    pub const fn storefront_domain(&self) -> &StorefrontDomain {
        &self.storefront_domain
    }

    /// Returns the storefront origin override, if configured.
    #[must_use]
    pub const fn storefront_url(&self) -> Option<&BaseUrl> {
        self.storefront_url.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// Required fields are `store_hash`, `access_token`, and `channel_id`.
///
/// # Defaults
///
/// - `api_url`: `https://api.bigcommerce.com`
/// - `storefront_domain`: `mybigcommerce.com`
/// - `storefront_url`: `None` (derived from store hash and channel)
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::{ClientConfig, StoreHash, AccessToken, ChannelId, BaseUrl};
///
/// let config = ClientConfig::builder()
///     .store_hash(StoreHash::new("abc123").unwrap())
///     .access_token(AccessToken::new("my-token").unwrap())
///     .channel_id(ChannelId::new(5))
///     .api_url(BaseUrl::new("https://api.bigcommerce.com").unwrap())
///     .user_agent_prefix("MyStorefront/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    store_hash: Option<StoreHash>,
    access_token: Option<AccessToken>,
    channel_id: Option<ChannelId>,
    api_url: Option<BaseUrl>,
    storefront_domain: Option<StorefrontDomain>,
    storefront_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store hash (required).
    #[must_use]
    pub fn store_hash(mut self, hash: StoreHash) -> Self {
        self.store_hash = Some(hash);
        self
    }

    /// Sets the API access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the storefront channel id (required).
    #[must_use]
    pub const fn channel_id(mut self, channel_id: ChannelId) -> Self {
        self.channel_id = Some(channel_id);
        self
    }

    /// Overrides the REST API host.
    #[must_use]
    pub fn api_url(mut self, url: BaseUrl) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Overrides the permanent storefront domain.
    #[must_use]
    pub fn storefront_domain(mut self, domain: StorefrontDomain) -> Self {
        self.storefront_domain = Some(domain);
        self
    }

    /// Sends storefront GraphQL requests to `<url>/graphql` instead of the
    /// host derived from the store hash and channel.
    ///
    /// Intended for proxies and local test servers.
    #[must_use]
    pub fn storefront_url(mut self, url: BaseUrl) -> Self {
        self.storefront_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ClientConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `store_hash`,
    /// `access_token`, or `channel_id` is not set.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let store_hash = self.store_hash.ok_or(ConfigError::MissingRequiredField {
            field: "store_hash",
        })?;
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;
        let channel_id = self.channel_id.ok_or(ConfigError::MissingRequiredField {
            field: "channel_id",
        })?;

        let api_url = match self.api_url {
            Some(url) => url,
            None => BaseUrl::new(DEFAULT_API_URL)?,
        };

        Ok(ClientConfig {
            store_hash,
            access_token,
            channel_id,
            api_url,
            storefront_domain: self.storefront_domain.unwrap_or_default(),
            storefront_url: self.storefront_url,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

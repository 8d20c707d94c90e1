//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around the raw values that make up
//! a client configuration. Invalid values are rejected on construction with
//! clear error messages.

use crate::error::ConfigError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A validated BigCommerce store hash.
///
/// The store hash identifies the store in REST API paths
/// (`/stores/<hash>/...`) and in the storefront host name.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::StoreHash;
///
/// let hash = StoreHash::new("abc123").unwrap();
/// assert_eq!(hash.as_ref(), "abc123");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreHash(String);

impl StoreHash {
    /// Creates a new validated store hash.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyStoreHash`] if the hash is empty.
    pub fn new(hash: impl Into<String>) -> Result<Self, ConfigError> {
        let hash = hash.into();
        if hash.is_empty() {
            return Err(ConfigError::EmptyStoreHash);
        }
        Ok(Self(hash))
    }
}

impl AsRef<str> for StoreHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated BigCommerce API access token.
///
/// The token is sent as the `X-Auth-Token` header on REST calls. Its value is
/// masked in debug output so it cannot leak into logs.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::AccessToken;
///
/// let token = AccessToken::new("my-token").unwrap();
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A storefront channel identifier.
///
/// Channel `1` is the store's default channel. The platform omits it from the
/// storefront host name; every other channel appears as a `-<id>` suffix.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::ChannelId;
///
/// assert!(ChannelId::DEFAULT.is_default());
/// assert_eq!(ChannelId::new(5).host_suffix(), "-5");
///
/// let parsed: ChannelId = "42".parse().unwrap();
/// assert_eq!(parsed.value(), 42);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChannelId(i64);

impl ChannelId {
    /// The default storefront channel.
    pub const DEFAULT: Self = Self(1);

    /// Wraps a raw channel id.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw channel id.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Returns `true` for the default channel.
    #[must_use]
    pub const fn is_default(self) -> bool {
        self.0 == Self::DEFAULT.0
    }

    /// Returns the storefront host name segment for this channel.
    ///
    /// Empty for the default channel, `-<id>` otherwise.
    #[must_use]
    pub fn host_suffix(self) -> String {
        if self.is_default() {
            String::new()
        } else {
            format!("-{}", self.0)
        }
    }
}

impl FromStr for ChannelId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| ConfigError::InvalidChannelId {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for ChannelId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

/// A validated base URL (scheme and host, optional port and path).
///
/// Used for the REST API host and for the storefront origin override.
/// Trailing slashes are stripped so paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::BaseUrl;
///
/// let url = BaseUrl::new("https://api.bigcommerce.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.bigcommerce.com");
/// assert!(BaseUrl::new("api.bigcommerce.com").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the URL has no scheme or host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(invalid());
        }

        let remainder = &url[host_start..];
        if remainder.starts_with([':', '/', '?', '#']) {
            return Err(invalid());
        }

        Ok(Self(url))
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The permanent domain that storefront hosts live under.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::StorefrontDomain;
///
/// let domain = StorefrontDomain::default();
/// assert_eq!(domain.as_ref(), "mybigcommerce.com");
/// assert!(StorefrontDomain::new("https://example.com").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorefrontDomain(String);

impl StorefrontDomain {
    /// The platform's permanent storefront domain.
    pub const DEFAULT: &'static str = "mybigcommerce.com";

    /// Creates a new validated storefront domain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStorefrontDomain`] if the domain is
    /// empty or is not a bare host name.
    pub fn new(domain: impl Into<String>) -> Result<Self, ConfigError> {
        let domain: String = domain.into();
        let domain = domain.trim().to_lowercase();
        let valid = !domain.is_empty()
            && !domain.starts_with('.')
            && !domain.ends_with('.')
            && domain
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.');
        if !valid {
            return Err(ConfigError::InvalidStorefrontDomain { domain });
        }
        Ok(Self(domain))
    }
}

impl Default for StorefrontDomain {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl AsRef<str> for StorefrontDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

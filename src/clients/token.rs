//! Storefront token exchange types.
//!
//! Storefront GraphQL calls are authenticated with a short-lived token that
//! the REST API issues through customer impersonation. This module holds the
//! request and response shapes of that exchange and the expiry computation.
//!
//! # Security
//!
//! [`StorefrontToken`] masks its value in debug output, preventing accidental
//! exposure in logs.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::clients::token::{expires_at_utc, StorefrontToken};
//! use chrono::{TimeZone, Utc};
//!
//! let now = Utc.timestamp_millis_opt(1_700_000_000_500).unwrap();
//! assert_eq!(expires_at_utc(now, 300), 1_700_000_300);
//!
//! let token = StorefrontToken::new("eyJ...");
//! assert_eq!(format!("{:?}", token), "StorefrontToken(*****)");
//! ```

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

use crate::config::ChannelId;

/// REST endpoint that issues storefront tokens for customer impersonation.
pub const TOKEN_ENDPOINT: &str = "/v3/storefront/api-token-customer-impersonation";

/// Header naming the impersonated customer on the token request.
pub const CUSTOMER_ID_HEADER: &str = "x-bc-customer-id";

/// Lifetime requested for each storefront token, in seconds.
pub const TOKEN_TTL_SECONDS: i64 = 300;

/// A storefront API bearer token.
///
/// The [`Debug`] implementation masks the token value:
///
/// ```rust
/// use bigcommerce_api::StorefrontToken;
///
/// let token = StorefrontToken::new("secret-token");
/// assert_eq!(format!("{:?}", token), "StorefrontToken(*****)");
/// assert_eq!(token.bearer(), "Bearer secret-token");
/// ```
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct StorefrontToken(String);

impl StorefrontToken {
    /// Wraps a raw token value.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the `Authorization` header value for this token.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl AsRef<str> for StorefrontToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StorefrontToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StorefrontToken(*****)")
    }
}

/// Body of the token exchange request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StorefrontTokenRequest {
    /// The channel the token is scoped to.
    pub channel_id: ChannelId,
    /// Expiry as unix seconds.
    pub expires_at: i64,
}

impl StorefrontTokenRequest {
    /// Builds a request for `channel_id` expiring [`TOKEN_TTL_SECONDS`] after `now`.
    #[must_use]
    pub fn new(channel_id: ChannelId, now: DateTime<Utc>) -> Self {
        Self {
            channel_id,
            expires_at: expires_at_utc(now, TOKEN_TTL_SECONDS),
        }
    }
}

impl From<StorefrontTokenRequest> for serde_json::Value {
    fn from(request: StorefrontTokenRequest) -> Self {
        serde_json::json!({
            "channel_id": request.channel_id,
            "expires_at": request.expires_at,
        })
    }
}

/// Payload of a successful token exchange.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StorefrontTokenData {
    /// The issued storefront token.
    pub token: StorefrontToken,
}

/// Response of the token exchange endpoint.
///
/// `meta` is accepted as-is; only `data.token` is required.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StorefrontTokenResponse {
    /// The issued token.
    pub data: StorefrontTokenData,
    /// Opaque response metadata.
    #[serde(default)]
    pub meta: serde_json::Value,
}

/// Returns the unix time, in whole seconds, `seconds` after `now`.
///
/// Sub-second precision is floored, so for a current time of `T`
/// milliseconds the result is `floor((T + seconds * 1000) / 1000)`.
#[must_use]
pub fn expires_at_utc(now: DateTime<Utc>, seconds: i64) -> i64 {
    (now + Duration::seconds(seconds)).timestamp()
}

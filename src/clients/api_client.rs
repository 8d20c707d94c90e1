//! Client for the BigCommerce REST and storefront GraphQL APIs.
//!
//! This module provides the [`ApiClient`] type. It makes two kinds of calls:
//!
//! - [`fetch`](ApiClient::fetch): a raw, token-authenticated REST request
//! - [`query`](ApiClient::query): a GraphQL query against the storefront API,
//!   authenticated with a storefront token exchanged on every call
//!
//! # Storefront Endpoint
//!
//! The storefront host is derived from the store hash and the channel:
//!
//! - Default channel (`1`): `https://store-<hash>.mybigcommerce.com/graphql`
//! - Other channels: `https://store-<hash>-<channel>.mybigcommerce.com/graphql`

use chrono::Utc;
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CACHE_CONTROL, CONTENT_TYPE,
    USER_AGENT,
};
use serde::de::DeserializeOwned;

use crate::clients::errors::{
    ApiError, GraphqlErrors, InvalidFetchRequestError, TransportError, ValidationError,
};
use crate::clients::fetch_request::{FetchBody, FetchRequest, HttpMethod};
use crate::clients::graphql::{CachePolicy, GraphqlEnvelope, GraphqlRequest, GraphqlTransport};
use crate::clients::token::{
    StorefrontToken, StorefrontTokenRequest, StorefrontTokenResponse, CUSTOMER_ID_HEADER,
    TOKEN_ENDPOINT,
};
use crate::config::ClientConfig;
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the REST API access token.
const AUTH_TOKEN_HEADER: &str = "x-auth-token";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Client for the BigCommerce REST and storefront GraphQL APIs.
///
/// The client owns its [`ClientConfig`] and never mutates it. Construct one
/// at start-up and share it (by reference or `Arc`) with everything that
/// needs API access.
///
/// No storefront token is cached: every [`query`](Self::query) performs its
/// own token exchange, so concurrent queries never share a token.
///
/// # Thread Safety
///
/// `ApiClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use bigcommerce_api::ApiClient;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct SiteResponse {
///     data: serde_json::Value,
/// }
///
/// let client = ApiClient::from_env()?;
/// let site: SiteResponse = client
///     .query("query { site { settings { storeName } } }")
///     .await?;
/// ```
#[derive(Debug)]
pub struct ApiClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Validated configuration.
    config: ClientConfig,
    /// User-Agent sent with every request.
    user_agent: String,
}

// Verify ApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiClient>();
};

impl ApiClient {
    /// Creates a new client from a validated configuration.
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialized.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bigcommerce_api::{ApiClient, ClientConfig, StoreHash, AccessToken, ChannelId};
    ///
    /// let config = ClientConfig::builder()
    ///     .store_hash(StoreHash::new("abc123").unwrap())
    ///     .access_token(AccessToken::new("token").unwrap())
    ///     .channel_id(ChannelId::new(1))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = ApiClient::new(config);
    /// assert_eq!(client.api_url(), "https://api.bigcommerce.com/stores/abc123");
    /// ```
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}BigCommerce Storefront API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            config,
            user_agent,
        }
    }

    /// Creates a new client from the process environment.
    ///
    /// See [`ClientConfig::from_env`] for the variables read.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the environment does not hold a valid
    /// configuration.
    pub fn from_env() -> Result<Self, ConfigError> {
        ClientConfig::from_env().map(Self::new)
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the User-Agent sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the REST base URL, `<api_url>/stores/<storeHash>`.
    #[must_use]
    pub fn api_url(&self) -> String {
        format!(
            "{}/stores/{}",
            self.config.api_url(),
            self.config.store_hash()
        )
    }

    /// Returns the storefront GraphQL endpoint for the configured channel.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bigcommerce_api::{ApiClient, ClientConfig, StoreHash, AccessToken, ChannelId};
    ///
    /// let config = ClientConfig::builder()
    ///     .store_hash(StoreHash::new("abc123").unwrap())
    ///     .access_token(AccessToken::new("token").unwrap())
    ///     .channel_id(ChannelId::new(5))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = ApiClient::new(config);
    /// assert_eq!(
    ///     client.storefront_api_url(),
    ///     "https://store-abc123-5.mybigcommerce.com/graphql"
    /// );
    /// ```
    #[must_use]
    pub fn storefront_api_url(&self) -> String {
        if let Some(origin) = self.config.storefront_url() {
            return format!("{origin}/graphql");
        }

        format!(
            "https://store-{}{}.{}/graphql",
            self.config.store_hash(),
            self.config.channel_id().host_suffix(),
            self.config.storefront_domain().as_ref()
        )
    }

    /// Sends a REST request to `<api_url>/stores/<storeHash><endpoint>`.
    ///
    /// The request carries `Accept` and `Content-Type` set to JSON and the
    /// access token in `X-Auth-Token`. Headers in `request` are applied last
    /// and replace defaults of the same name.
    ///
    /// The response is returned as-is: its status is not checked and its
    /// body is not read. An empty `endpoint` addresses the store root.
    ///
    /// # Errors
    ///
    /// - [`ApiError::InvalidRequest`] if a non-empty `endpoint` does not start
    ///   with `/`, or a header cannot be sent
    /// - [`ApiError::Transport`] if the request cannot be sent
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use bigcommerce_api::FetchRequest;
    ///
    /// let response = client.fetch("/v3/channels", FetchRequest::get()).await?;
    /// println!("Status: {}", response.status());
    /// ```
    #[tracing::instrument(skip(self, request), fields(method = %request.method))]
    pub async fn fetch(
        &self,
        endpoint: &str,
        request: FetchRequest,
    ) -> Result<reqwest::Response, ApiError> {
        if !endpoint.is_empty() && !endpoint.starts_with('/') {
            return Err(InvalidFetchRequestError::RelativeEndpoint {
                endpoint: endpoint.to_string(),
            }
            .into());
        }

        let url = format!("{}{endpoint}", self.api_url());

        let mut headers = self.json_headers()?;
        headers.insert(
            HeaderName::from_static(AUTH_TOKEN_HEADER),
            header_value(AUTH_TOKEN_HEADER, self.config.access_token().as_ref())?,
        );
        for (name, value) in &request.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| InvalidFetchRequestError::InvalidHeader { name: name.clone() })?;
            headers.insert(header_name, header_value(name, value)?);
        }

        let mut builder = self
            .client
            .request(request.method.as_reqwest(), &url)
            .headers(headers);
        builder = match request.body {
            Some(FetchBody::Json(body)) => builder.json(&body),
            Some(FetchBody::Raw(body)) => builder.body(body),
            None => builder,
        };

        tracing::debug!("Sending {} request to {}", request.method, url);
        let response = builder.send().await.map_err(|e| {
            tracing::warn!("Request to {} failed: {}", url, e);
            TransportError::Network(e)
        })?;

        Ok(response)
    }

    /// Executes a GraphQL query against the storefront API.
    ///
    /// This performs two requests:
    ///
    /// 1. A storefront token exchange through the REST API, for the
    ///    configured channel and expiring five minutes from now
    /// 2. A POST of `{"query": document}` to the
    ///    [storefront endpoint](Self::storefront_api_url), authenticated
    ///    with the token as a bearer credential
    ///
    /// The whole JSON response body is then validated against `T`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Transport`] if either request fails or returns a body
    ///   that is not JSON
    /// - [`ApiError::Validation`] if the token response or the query
    ///   response does not match its expected shape
    ///
    /// A failed token exchange aborts the query.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Response { data: Data }
    /// #[derive(Deserialize)]
    /// struct Data { site: serde_json::Value }
    ///
    /// let response: Response = client.query("query { site { id } }").await?;
    /// ```
    #[tracing::instrument(skip_all, fields(channel = %self.config.channel_id()))]
    pub async fn query<T: DeserializeOwned>(&self, document: &str) -> Result<T, ApiError> {
        let token = self.generate_storefront_token().await?;

        let body = serde_json::json!({ "query": document });
        let value = self.post_graphql(&token, &body, HeaderMap::new()).await?;

        Ok(decode::<T>(value)?)
    }

    /// Exchanges the access token for a short-lived storefront token.
    async fn generate_storefront_token(&self) -> Result<StorefrontToken, ApiError> {
        let token_request = StorefrontTokenRequest::new(self.config.channel_id(), Utc::now());
        let request = FetchRequest::builder(HttpMethod::Post)
            .header(CUSTOMER_ID_HEADER, "")
            .body(token_request)
            .build();

        let response = self.fetch(TOKEN_ENDPOINT, request).await?;
        let value = read_json(response).await?;
        let token_response: StorefrontTokenResponse = decode(value)?;

        tracing::debug!(
            "Issued storefront token for channel {} expiring at {}",
            token_request.channel_id,
            token_request.expires_at
        );

        Ok(token_response.data.token)
    }

    /// POSTs a GraphQL body to the storefront endpoint and reads the JSON reply.
    async fn post_graphql(
        &self,
        token: &StorefrontToken,
        body: &serde_json::Value,
        extra_headers: HeaderMap,
    ) -> Result<serde_json::Value, ApiError> {
        let url = self.storefront_api_url();

        let mut headers = self.json_headers()?;
        headers.insert(AUTHORIZATION, header_value("Authorization", &token.bearer())?);
        headers.extend(extra_headers);

        tracing::debug!("Sending GraphQL request to {}", url);
        let response = self
            .client
            .post(&url)
            .headers(headers)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("GraphQL request to {} failed: {}", url, e);
                TransportError::Network(e)
            })?;

        read_json(response).await
    }

    /// Headers shared by REST and GraphQL requests.
    fn json_headers(&self) -> Result<HeaderMap, InvalidFetchRequestError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers.insert(USER_AGENT, header_value("User-Agent", &self.user_agent)?);
        Ok(headers)
    }
}

#[async_trait::async_trait]
impl GraphqlTransport for ApiClient {
    type Error = ApiError;

    /// Executes `request` against the storefront API.
    ///
    /// The signed-in customer, if any, is sent in `X-Bc-Customer-Id`. A
    /// non-empty top-level `errors` list fails the call with
    /// [`ApiError::Graphql`].
    #[tracing::instrument(skip_all, fields(customer = ?request.customer_id))]
    async fn execute(&self, request: GraphqlRequest) -> Result<serde_json::Value, ApiError> {
        let token = self.generate_storefront_token().await?;

        let mut headers = HeaderMap::new();
        if let Some(customer_id) = &request.customer_id {
            headers.insert(
                HeaderName::from_static(CUSTOMER_ID_HEADER),
                header_value(CUSTOMER_ID_HEADER, customer_id.as_ref())?,
            );
        }
        if request.cache == CachePolicy::NoStore {
            headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        }

        let value = self.post_graphql(&token, &request.body(), headers).await?;
        let envelope: GraphqlEnvelope = decode(value)?;

        let errors = envelope.errors.unwrap_or_default();
        if !errors.is_empty() {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            tracing::warn!("GraphQL request returned {} error(s)", messages.len());
            return Err(GraphqlErrors { messages }.into());
        }

        envelope.data.ok_or_else(|| {
            ValidationError {
                shape: "GraphqlEnvelope".to_string(),
                reason: "missing field `data`".to_string(),
            }
            .into()
        })
    }
}

/// Reads a response body as JSON without looking at the status code.
async fn read_json(response: reqwest::Response) -> Result<serde_json::Value, ApiError> {
    let url = response.url().to_string();
    let status = response.status().as_u16();
    let text = response.text().await.map_err(TransportError::Network)?;

    serde_json::from_str(&text).map_err(|e| {
        tracing::warn!("Response from {} (status {}) is not JSON", url, status);
        TransportError::InvalidJson {
            url,
            status,
            reason: e.to_string(),
        }
        .into()
    })
}

/// Validates a JSON value against the shape `T`.
fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, ValidationError> {
    serde_json::from_value(value).map_err(|e| ValidationError::for_shape::<T>(&e))
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, InvalidFetchRequestError> {
    HeaderValue::from_str(value).map_err(|_| InvalidFetchRequestError::InvalidHeader {
        name: name.to_string(),
    })
}

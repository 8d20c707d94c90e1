//! Request options for raw REST calls.
//!
//! This module provides the [`FetchRequest`] type and its builder, the
//! options accepted by [`ApiClient::fetch`](crate::ApiClient::fetch).

use std::collections::BTreeMap;
use std::fmt;

/// HTTP methods supported by [`ApiClient::fetch`](crate::ApiClient::fetch).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    #[default]
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    pub(crate) fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// Body of a REST call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchBody {
    /// A JSON value, serialized when the request is sent.
    Json(serde_json::Value),
    /// Pre-serialized text, sent as-is.
    Raw(String),
}

/// Options for a single REST call.
///
/// Caller headers are merged over the client's defaults, so a header set here
/// replaces the default of the same name. No method requires a body.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::{FetchBody, FetchRequest, HttpMethod};
/// use serde_json::json;
///
/// let get = FetchRequest::get();
/// assert_eq!(get.method, HttpMethod::Get);
///
/// let post = FetchRequest::builder(HttpMethod::Post)
///     .header("x-bc-customer-id", "")
///     .body(json!({ "channel_id": 1 }))
///     .build();
/// assert_eq!(post.body, Some(FetchBody::Json(json!({ "channel_id": 1 }))));
///
/// let raw = FetchRequest::builder(HttpMethod::Put)
///     .raw_body(r#"{"name":"Wholesale"}"#)
///     .build();
/// assert_eq!(raw.body, Some(FetchBody::Raw(r#"{"name":"Wholesale"}"#.to_string())));
/// ```
#[derive(Clone, Debug, Default)]
pub struct FetchRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// Headers merged over the client's defaults.
    pub headers: BTreeMap<String, String>,
    /// Request body, if any.
    pub body: Option<FetchBody>,
}

impl FetchRequest {
    /// Creates a new builder for the given method.
    #[must_use]
    pub fn builder(method: HttpMethod) -> FetchRequestBuilder {
        FetchRequestBuilder::new(method)
    }

    /// A bodiless GET request.
    #[must_use]
    pub fn get() -> Self {
        Self::default()
    }
}

/// Builder for constructing [`FetchRequest`] instances.
#[derive(Debug)]
pub struct FetchRequestBuilder {
    request: FetchRequest,
}

impl FetchRequestBuilder {
    fn new(method: HttpMethod) -> Self {
        Self {
            request: FetchRequest {
                method,
                ..FetchRequest::default()
            },
        }
    }

    /// Adds a single header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.headers.insert(name.into(), value.into());
        self
    }

    /// Sets a JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.request.body = Some(FetchBody::Json(body.into()));
        self
    }

    /// Sets a pre-serialized request body, sent without re-encoding.
    #[must_use]
    pub fn raw_body(mut self, body: impl Into<String>) -> Self {
        self.request.body = Some(FetchBody::Raw(body.into()));
        self
    }

    /// Builds the [`FetchRequest`].
    #[must_use]
    pub fn build(self) -> FetchRequest {
        self.request
    }
}

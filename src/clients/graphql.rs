//! Session-aware GraphQL execution.
//!
//! Account actions issue GraphQL operations on behalf of the signed-in
//! customer. They do so through the [`GraphqlTransport`] trait, which
//! [`ApiClient`](crate::ApiClient) implements and which tests can replace.
//!
//! Unlike [`ApiClient::query`](crate::ApiClient::query), a transport call
//! carries variables and a customer context, checks the top-level `errors`
//! list, and hands back only the `data` member of the response.

use async_trait::async_trait;
use serde::Deserialize;

use crate::auth::CustomerId;
use crate::clients::errors::GraphqlErrorEntry;

/// Whether intermediaries may cache the response.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CachePolicy {
    /// Caching is left to the defaults of the HTTP stack.
    #[default]
    Default,
    /// The response must not be stored (`Cache-Control: no-store`).
    NoStore,
}

/// A GraphQL operation with its execution context.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::{CachePolicy, CustomerId, GraphqlRequest};
/// use serde_json::json;
///
/// let request = GraphqlRequest::new("query { customer { firstName } }")
///     .variables(json!({}))
///     .customer_id(Some(CustomerId::new("7")))
///     .cache(CachePolicy::NoStore);
///
/// assert_eq!(request.body()["query"], "query { customer { firstName } }");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GraphqlRequest {
    /// The GraphQL document.
    pub document: String,
    /// Operation variables; `Null` when the document takes none.
    pub variables: serde_json::Value,
    /// The customer the operation runs as, if any.
    pub customer_id: Option<CustomerId>,
    /// Caching policy for the response.
    pub cache: CachePolicy,
}

impl GraphqlRequest {
    /// Creates a request for `document` without variables or customer.
    #[must_use]
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            variables: serde_json::Value::Null,
            customer_id: None,
            cache: CachePolicy::Default,
        }
    }

    /// Sets the operation variables.
    #[must_use]
    pub fn variables(mut self, variables: serde_json::Value) -> Self {
        self.variables = variables;
        self
    }

    /// Sets the customer the operation runs as.
    #[must_use]
    pub fn customer_id(mut self, customer_id: Option<CustomerId>) -> Self {
        self.customer_id = customer_id;
        self
    }

    /// Sets the caching policy.
    #[must_use]
    pub const fn cache(mut self, cache: CachePolicy) -> Self {
        self.cache = cache;
        self
    }

    /// Returns the JSON request body.
    #[must_use]
    pub fn body(&self) -> serde_json::Value {
        let mut body = serde_json::json!({ "query": self.document });
        if !self.variables.is_null() {
            body["variables"] = self.variables.clone();
        }
        body
    }
}

/// Standard GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphqlEnvelope {
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphqlErrorEntry>>,
}

/// Executes GraphQL operations on behalf of a customer.
#[async_trait]
pub trait GraphqlTransport: Send + Sync {
    /// The error returned when an operation cannot be completed.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Executes `request` and returns the `data` member of the response.
    async fn execute(&self, request: GraphqlRequest) -> Result<serde_json::Value, Self::Error>;
}

//! Customer identity of the current request.
//!
//! Account actions run on behalf of whichever customer is signed in to the
//! storefront. The session layer itself lives outside this crate; it is
//! reached through the [`SessionContext`] trait.

use std::fmt;

use async_trait::async_trait;

/// Identifier of a storefront customer, as carried by the session.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::CustomerId;
///
/// let id = CustomerId::new("42");
/// assert_eq!(id.as_ref(), "42");
/// assert_eq!(CustomerId::from(42_u64), id);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CustomerId(String);

impl CustomerId {
    /// Wraps a raw customer id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl From<u64> for CustomerId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for CustomerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Access to the customer signed in to the current request.
///
/// Implementations typically read a session cookie or token. Returning
/// `None` means no customer is signed in; the platform then reports the
/// problem itself (e.g. `CustomerNotLoggedInError`).
#[async_trait]
pub trait SessionContext: Send + Sync {
    /// Returns the signed-in customer's id, if any.
    async fn customer_id(&self) -> Option<CustomerId>;
}

/// A session with a fixed customer, for server-side jobs and tests.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::{CustomerId, SessionContext, StaticSession};
///
/// # #[tokio::main]
/// # async fn main() {
/// let session = StaticSession::customer(CustomerId::new("7"));
/// assert_eq!(session.customer_id().await, Some(CustomerId::new("7")));
///
/// let anonymous = StaticSession::anonymous();
/// assert_eq!(anonymous.customer_id().await, None);
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticSession {
    customer_id: Option<CustomerId>,
}

impl StaticSession {
    /// A session signed in as `customer_id`.
    #[must_use]
    pub const fn customer(customer_id: CustomerId) -> Self {
        Self {
            customer_id: Some(customer_id),
        }
    }

    /// A session with no signed-in customer.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { customer_id: None }
    }
}

#[async_trait]
impl SessionContext for StaticSession {
    async fn customer_id(&self) -> Option<CustomerId> {
        self.customer_id.clone()
    }
}

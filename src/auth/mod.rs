//! Session types for account actions.
//!
//! - [`CustomerId`]: Identifier of a storefront customer
//! - [`SessionContext`]: Resolves the customer signed in to the current request
//! - [`StaticSession`]: A fixed-customer [`SessionContext`]

pub mod session;

pub use session::{CustomerId, SessionContext, StaticSession};

//! Saved address management.
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::{delete_address, ActionContext, ApiClient, RevalidateScope};
//!
//! let client = ApiClient::from_env()?;
//! let revalidator = |path: &str, scope: RevalidateScope| {
//!     tracing::info!("stale: {scope} {path}");
//! };
//! let ctx = ActionContext::new(&client, &session, &revalidator);
//!
//! let state = delete_address(&ctx, 42, None).await;
//! println!("{}", state.message());
//! ```

use serde::Deserialize;

use crate::account::ActionState;
use crate::auth::SessionContext;
use crate::clients::errors::ValidationError;
use crate::clients::graphql::{CachePolicy, GraphqlRequest, GraphqlTransport};
use crate::revalidate::{PathRevalidator, RevalidateScope};

/// Mutation removing one of the signed-in customer's saved addresses.
pub const DELETE_CUSTOMER_ADDRESS_MUTATION: &str = r"
mutation DeleteCustomerAddressMutation(
  $reCaptcha: ReCaptchaV2Input
  $input: DeleteCustomerAddressInput!
) {
  customer {
    deleteCustomerAddress(reCaptchaV2: $reCaptcha, input: $input) {
      errors {
        __typename
        ... on CustomerAddressDeletionError {
          __typename
          message
        }
        ... on CustomerNotLoggedInError {
          __typename
          message
        }
      }
    }
  }
}
";

/// Page listing the customer's saved addresses.
pub const ADDRESSES_PATH: &str = "/account/addresses";

const ADDRESS_DELETED_MESSAGE: &str = "Address deleted from your account.";

/// Collaborators an account action runs with.
///
/// - `client` executes GraphQL operations
/// - `session` resolves the signed-in customer
/// - `revalidator` is told which rendered pages went stale
#[derive(Debug)]
pub struct ActionContext<'a, C, S, R> {
    /// GraphQL transport.
    pub client: &'a C,
    /// Session of the current request.
    pub session: &'a S,
    /// Cache invalidation hook.
    pub revalidator: &'a R,
}

impl<'a, C, S, R> ActionContext<'a, C, S, R>
where
    C: GraphqlTransport,
    S: SessionContext,
    R: PathRevalidator,
{
    /// Bundles the collaborators of an action.
    #[must_use]
    pub const fn new(client: &'a C, session: &'a S, revalidator: &'a R) -> Self {
        Self {
            client,
            session,
            revalidator,
        }
    }
}

/// Kind of failure reported by the address deletion mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub enum AddressErrorKind {
    /// The platform refused to delete the address.
    CustomerAddressDeletionError,
    /// No customer is signed in.
    CustomerNotLoggedInError,
    /// Any other error type.
    #[serde(other)]
    Other,
}

/// One error reported by the mutation.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AddressError {
    /// GraphQL type of the error.
    #[serde(rename = "__typename")]
    pub kind: AddressErrorKind,
    /// Human-readable description.
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct DeleteAddressData {
    customer: CustomerMutations,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CustomerMutations {
    delete_customer_address: DeleteAddressResult,
}

#[derive(Debug, Deserialize)]
struct DeleteAddressResult {
    errors: Vec<AddressError>,
}

/// Builds the mutation variables for `address_id`.
fn deletion_variables(address_id: i64, recaptcha_token: Option<&str>) -> serde_json::Value {
    let mut variables = serde_json::json!({
        "input": { "addressEntityId": address_id },
    });
    if let Some(token) = recaptcha_token {
        variables["reCaptcha"] = serde_json::json!({ "token": token });
    }
    variables
}

/// Deletes a saved address from the signed-in customer's account.
///
/// Runs [`DELETE_CUSTOMER_ADDRESS_MUTATION`] for the customer resolved from
/// `ctx.session`, with caching disabled. Once the response is decoded,
/// [`ADDRESSES_PATH`] is revalidated with [`RevalidateScope::Page`], whether
/// or not the platform reported errors.
///
/// The outcome is always an [`ActionState`]:
///
/// - no reported errors: `Success` with a fixed confirmation
/// - reported errors: `Error` with their messages joined by newlines
/// - transport or decoding failure: `Error` with the failure's text, or
///   `"Unknown error."` when it has none
///
/// The address is not checked locally; deleting an unknown address surfaces
/// as a platform-reported error. No retry is attempted.
#[tracing::instrument(skip(ctx, recaptcha_token))]
pub async fn delete_address<C, S, R>(
    ctx: &ActionContext<'_, C, S, R>,
    address_id: i64,
    recaptcha_token: Option<String>,
) -> ActionState
where
    C: GraphqlTransport,
    S: SessionContext,
    R: PathRevalidator,
{
    let customer_id = ctx.session.customer_id().await;

    let request = GraphqlRequest::new(DELETE_CUSTOMER_ADDRESS_MUTATION)
        .variables(deletion_variables(address_id, recaptcha_token.as_deref()))
        .customer_id(customer_id)
        .cache(CachePolicy::NoStore);

    let data = match ctx.client.execute(request).await {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!("Address deletion request failed: {}", e);
            return ActionState::from_failure(&e);
        }
    };

    let result = match serde_json::from_value::<DeleteAddressData>(data) {
        Ok(decoded) => decoded.customer.delete_customer_address,
        Err(e) => {
            let error = ValidationError::for_shape::<DeleteAddressData>(&e);
            tracing::warn!("Address deletion response rejected: {}", error);
            return ActionState::from_failure(&error);
        }
    };

    ctx.revalidator
        .revalidate_path(ADDRESSES_PATH, RevalidateScope::Page);

    if result.errors.is_empty() {
        tracing::info!("Deleted address {}", address_id);
        return ActionState::success(ADDRESS_DELETED_MESSAGE);
    }

    tracing::debug!(
        "Address deletion reported {} error(s): {:?}",
        result.errors.len(),
        result.errors.iter().map(|e| e.kind).collect::<Vec<_>>()
    );

    let message = result
        .errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    ActionState::error(message)
}

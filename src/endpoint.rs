//! Endpoint templates for the push API device-token collection.
//!
//! Every operation the client exposes maps to one entry in the table below:
//! an HTTP verb bound to a path pattern. Patterns may contain the named
//! placeholders `:token_id` and `:user_id`, which are filled in by
//! [`resolve`] before the path reaches the transport.

use reqwest::Method;

use crate::error::{ApiError, ApiResult};

/// Placeholder for the hashed device token in a path pattern.
pub const TOKEN_ID: &str = ":token_id";
/// Placeholder for the caller-supplied user id in a path pattern.
pub const USER_ID: &str = ":user_id";

/// Logical operations of the device-token collection.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Operation {
    List,
    Create,
    Retrieve,
    Update,
    Delete,
    ListAssociatedUsers,
    AssociateUser,
    DissociateUser,
}

impl Operation {
    /// The HTTP verb used when dispatching this operation
    pub fn method(self) -> Method {
        match self {
            Operation::List | Operation::Retrieve | Operation::ListAssociatedUsers => Method::GET,
            Operation::Create | Operation::AssociateUser => Method::POST,
            Operation::Update => Method::PATCH,
            Operation::Delete | Operation::DissociateUser => Method::DELETE,
        }
    }

    /// The path pattern this operation resolves against
    pub fn pattern(self) -> &'static str {
        match self {
            Operation::List | Operation::Create => "/push/tokens",
            Operation::Retrieve | Operation::Update | Operation::Delete => {
                "/push/tokens/:token_id"
            }
            Operation::ListAssociatedUsers => "/push/tokens/:token_id/users",
            Operation::AssociateUser | Operation::DissociateUser => {
                "/push/tokens/:token_id/users/:user_id"
            }
        }
    }
}

/// Substitute the named placeholders in a path pattern.
///
/// The placeholders are disjoint substrings, so the fill order does not
/// affect the result. After substitution the path is checked for leftover
/// placeholders so a partially-resolved path is never dispatched.
pub fn resolve(pattern: &str, fills: &[(&'static str, &str)]) -> ApiResult<String> {
    let mut path = pattern.to_string();
    for (placeholder, value) in fills {
        path = path.replace(placeholder, value);
    }

    if let Some(start) = path.find(':') {
        let placeholder = path[start..]
            .split('/')
            .next()
            .unwrap_or_default()
            .to_string();
        return Err(ApiError::UnfilledPlaceholder(placeholder));
    }

    Ok(path)
}

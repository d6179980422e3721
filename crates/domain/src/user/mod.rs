//! User records and the user service.

mod model;
pub mod seed;
mod service;

pub use model::{AccountStatus, SUSPENDED_DOMAIN, User, UserId};
pub use service::{InMemoryUserService, UserService};

use common::ReasonCode;

/// Subject of every violation raised by `GetUser`.
pub const GET_USER_SUBJECT: &str = "UserService/GetUser";

/// Business rules `GetUser` can reject a request for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserFailureCode {
    UserNotFound,
    UserAccountSuspended,
}

impl ReasonCode for UserFailureCode {
    fn as_str(&self) -> &'static str {
        match self {
            UserFailureCode::UserNotFound => "USER_FAILURE_CODE_USER_NOT_FOUND",
            UserFailureCode::UserAccountSuspended => "USER_FAILURE_CODE_USER_ACCOUNT_SUSPENDED",
        }
    }
}

/// Reasons the user service can be unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserErrorReason {
    Maintenance,
}

impl ReasonCode for UserErrorReason {
    fn as_str(&self) -> &'static str {
        match self {
            UserErrorReason::Maintenance => "USER_ERROR_REASON_MAINTENANCE",
        }
    }
}

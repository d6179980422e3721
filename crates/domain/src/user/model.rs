use std::borrow::Borrow;

use common::Timestamp;
use serde::{Deserialize, Serialize};

/// Email domain reserved for administratively suspended accounts.
pub const SUSPENDED_DOMAIN: &str = "@suspended.example.com";

/// User identifier, e.g. `user-001`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Borrow<str> for UserId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Moderation state of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    #[default]
    Active,
    Suspended,
}

impl AccountStatus {
    /// Derives the status from an email address.
    ///
    /// An address is suspended iff it ends with [`SUSPENDED_DOMAIN`] and has
    /// a non-empty local part.
    pub fn from_email(email: &str) -> Self {
        if email.len() > SUSPENDED_DOMAIN.len() && email.ends_with(SUSPENDED_DOMAIN) {
            AccountStatus::Suspended
        } else {
            AccountStatus::Active
        }
    }
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub age: u32,
    pub account_status: AccountStatus,
    pub created_at: Timestamp,
}

impl User {
    /// Creates a user, deriving its account status once from the email.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        age: u32,
        created_at: Timestamp,
    ) -> Self {
        let email = email.into();
        Self {
            id: UserId::new(id),
            name: name.into(),
            account_status: AccountStatus::from_email(&email),
            email,
            age,
            created_at,
        }
    }

    pub fn is_suspended(&self) -> bool {
        self.account_status == AccountStatus::Suspended
    }
}

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Point in time carried by every entity.
pub type Timestamp = DateTime<Utc>;

/// One of the three domain services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceName {
    Users,
    Products,
    Orders,
}

impl ServiceName {
    /// Every service, in a fixed order.
    pub const ALL: [ServiceName; 3] = [ServiceName::Users, ServiceName::Products, ServiceName::Orders];

    /// Returns the RPC service name, e.g. `UserService`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceName::Users => "UserService",
            ServiceName::Products => "ProductService",
            ServiceName::Orders => "OrderService",
        }
    }

    /// Returns the URL slug, e.g. `users`.
    pub fn slug(&self) -> &'static str {
        match self {
            ServiceName::Users => "users",
            ServiceName::Products => "products",
            ServiceName::Orders => "orders",
        }
    }

    /// Returns the lower-case label used in maintenance messages.
    pub fn label(&self) -> &'static str {
        match self {
            ServiceName::Users => "user service",
            ServiceName::Products => "product service",
            ServiceName::Orders => "order service",
        }
    }
}

impl std::fmt::Display for ServiceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown service name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown service {0:?}")]
pub struct UnknownService(pub String);

impl FromStr for ServiceName {
    type Err = UnknownService;

    /// Accepts either the slug (`users`) or the RPC name (`UserService`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceName::ALL
            .into_iter()
            .find(|name| name.slug() == s || name.as_str() == s)
            .ok_or_else(|| UnknownService(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_name_parses_slug_and_rpc_name() {
        assert_eq!("users".parse(), Ok(ServiceName::Users));
        assert_eq!("ProductService".parse(), Ok(ServiceName::Products));
        assert_eq!("orders".parse(), Ok(ServiceName::Orders));
        assert_eq!(
            "inventory".parse::<ServiceName>(),
            Err(UnknownService("inventory".to_string()))
        );
    }

    #[test]
    fn service_name_labels() {
        assert_eq!(ServiceName::Users.to_string(), "UserService");
        assert_eq!(ServiceName::Orders.label(), "order service");
    }

    #[test]
    fn service_name_serialization() {
        let json = serde_json::to_string(&ServiceName::Products).unwrap();
        assert_eq!(json, "\"products\"");
    }
}

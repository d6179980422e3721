//! Gateway error types.

use common::ServiceName;
use thiserror::Error;

/// Errors that can occur while provisioning a client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// No client was registered for the service.
    #[error("no client configured for {0}")]
    NotConfigured(ServiceName),
}

/// Convenience type alias for gateway results.
pub type Result<T> = std::result::Result<T, GatewayError>;

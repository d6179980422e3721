use serde::{Deserialize, Serialize};

/// Per-call configuration passed to every client accessor.
///
/// Provisioning does not interpret it; it only travels with the call so
/// factories can scope or trace the handles they return.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Identifier of the inbound request being served.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}

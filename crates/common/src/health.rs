//! Service health state, read atomically on every request.

use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Serving state of a domain service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ServiceHealth {
    /// Normal operation.
    #[default]
    Serving,
    /// Still answering, but reported as not ready so callers stop routing new traffic.
    Draining,
    /// Lookups are rejected with a maintenance error.
    Unavailable,
}

impl ServiceHealth {
    /// Returns true if lookups should be answered.
    pub fn accepts_requests(&self) -> bool {
        !matches!(self, ServiceHealth::Unavailable)
    }

    /// Returns true if new traffic should be routed to the service.
    pub fn is_ready(&self) -> bool {
        matches!(self, ServiceHealth::Serving)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceHealth::Serving => "serving",
            ServiceHealth::Draining => "draining",
            ServiceHealth::Unavailable => "unavailable",
        }
    }

    fn to_bits(self) -> u8 {
        match self {
            ServiceHealth::Serving => 0,
            ServiceHealth::Draining => 1,
            ServiceHealth::Unavailable => 2,
        }
    }

    fn from_bits(bits: u8) -> Self {
        match bits {
            0 => ServiceHealth::Serving,
            1 => ServiceHealth::Draining,
            _ => ServiceHealth::Unavailable,
        }
    }
}

impl std::fmt::Display for ServiceHealth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown health state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown service health {0:?}: expected serving, draining or unavailable")]
pub struct HealthParseError(String);

impl FromStr for ServiceHealth {
    type Err = HealthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "serving" => Ok(ServiceHealth::Serving),
            "draining" => Ok(ServiceHealth::Draining),
            "unavailable" => Ok(ServiceHealth::Unavailable),
            _ => Err(HealthParseError(s.to_string())),
        }
    }
}

/// Shared, atomically updated health of one service.
///
/// Clones observe the same state, so a control surface can hold one clone
/// while the service reads another.
#[derive(Debug, Clone, Default)]
pub struct HealthState {
    bits: Arc<AtomicU8>,
}

impl HealthState {
    /// Creates a health cell with the given initial state.
    pub fn new(initial: ServiceHealth) -> Self {
        Self {
            bits: Arc::new(AtomicU8::new(initial.to_bits())),
        }
    }

    /// Returns the current state.
    pub fn get(&self) -> ServiceHealth {
        ServiceHealth::from_bits(self.bits.load(Ordering::Acquire))
    }

    /// Replaces the state, returning the previous one.
    pub fn set(&self, health: ServiceHealth) -> ServiceHealth {
        ServiceHealth::from_bits(self.bits.swap(health.to_bits(), Ordering::AcqRel))
    }
}

/// Cause attached to a maintenance unavailability error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{service} is under maintenance")]
pub struct MaintenanceError {
    /// Lower-case service label, e.g. `user service`.
    pub service: &'static str,
}

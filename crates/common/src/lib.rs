//! Shared building blocks for the domain services: the structured error
//! taxonomy, the pagination policy and service health.

pub mod health;
pub mod page;
pub mod status;
pub mod types;

pub use health::{HealthParseError, HealthState, MaintenanceError, ServiceHealth};
pub use page::{Page, PageRequest, paginate};
pub use status::{
    Code, Detail, DetailError, ReasonCode, Status, Violation, failed_precondition, unavailable,
};
pub use types::{ServiceName, Timestamp, UnknownService};

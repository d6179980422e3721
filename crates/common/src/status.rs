//! Structured status errors shared by every domain service.
//!
//! Every non-success outcome a service returns is built through one of two
//! constructors: [`failed_precondition`] for permanent rejections and
//! [`unavailable`] for transient outages. Callers branch on [`Status::code`]
//! and the attached [`Detail`]s rather than on message text.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest code accepted in a violation type or error-info reason.
pub const MAX_CODE_LEN: usize = 63;

/// Error category carried by every [`Status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Code {
    /// A business rule rejected the request. Retrying cannot succeed.
    FailedPrecondition,
    /// The service cannot serve right now. The same request may succeed later.
    Unavailable,
    /// Unclassified failure.
    Internal,
}

impl Code {
    /// Returns true if a caller may retry the request unchanged.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Code::Unavailable)
    }

    /// Returns the wire name of the code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Code::FailedPrecondition => "FAILED_PRECONDITION",
            Code::Unavailable => "UNAVAILABLE",
            Code::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed violation or reason code with a stable wire name.
pub trait ReasonCode {
    /// Returns the UPPER_SNAKE_CASE wire name of the code.
    fn as_str(&self) -> &'static str;
}

/// A single broken business rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// The typed violation code.
    #[serde(rename = "type")]
    pub kind: String,
    /// The operation that rejected the request, e.g. `UserService/GetUser`.
    pub subject: String,
    /// Human-readable explanation.
    pub description: String,
}

/// Structured payload attached to a [`Status`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "@type", rename_all = "snake_case")]
pub enum Detail {
    /// The business rules a rejected request broke.
    PreconditionFailure { violations: Vec<Violation> },
    /// The machine-readable reason behind an outage.
    ErrorInfo { reason: String },
}

impl Detail {
    fn validate(&self) -> Result<(), DetailError> {
        match self {
            Detail::PreconditionFailure { violations } => {
                if violations.is_empty() {
                    return Err(DetailError::NoViolations);
                }
                for violation in violations {
                    validate_code(&violation.kind)?;
                    if violation.subject.is_empty() {
                        return Err(DetailError::MissingSubject);
                    }
                }
                Ok(())
            }
            Detail::ErrorInfo { reason } => validate_code(reason),
        }
    }
}

/// Reasons a detail could not be attached to a [`Status`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetailError {
    /// The code is not an UPPER_SNAKE_CASE identifier of at most 63 characters.
    #[error("invalid code {0:?}: expected UPPER_SNAKE_CASE of at most 63 characters")]
    InvalidCode(String),

    /// A violation has no subject.
    #[error("violation is missing a subject")]
    MissingSubject,

    /// A precondition failure without any violation.
    #[error("precondition failure carries no violations")]
    NoViolations,
}

fn validate_code(code: &str) -> Result<(), DetailError> {
    let well_formed = code.len() <= MAX_CODE_LEN
        && code.starts_with(|c: char| c.is_ascii_uppercase())
        && !code.ends_with('_')
        && code
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');

    if well_formed {
        Ok(())
    } else {
        Err(DetailError::InvalidCode(code.to_string()))
    }
}

/// A categorized, machine-readable error returned by a domain service.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{code}: {message}")]
pub struct Status {
    code: Code,
    message: String,
    #[serde(default)]
    details: Vec<Detail>,
}

impl Status {
    /// Creates a status without details.
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// Attaches details, validating all of them first.
    ///
    /// Either every detail is attached or none is.
    pub fn with_details(
        mut self,
        details: impl IntoIterator<Item = Detail>,
    ) -> Result<Self, DetailError> {
        let details: Vec<Detail> = details.into_iter().collect();
        for detail in &details {
            detail.validate()?;
        }
        self.details.extend(details);
        Ok(self)
    }

    pub fn code(&self) -> Code {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> &[Detail] {
        &self.details
    }

    /// Returns the first precondition violation, if any.
    pub fn violation(&self) -> Option<&Violation> {
        self.details.iter().find_map(|detail| match detail {
            Detail::PreconditionFailure { violations } => violations.first(),
            Detail::ErrorInfo { .. } => None,
        })
    }

    /// Returns the first error-info reason, if any.
    pub fn reason(&self) -> Option<&str> {
        self.details.iter().find_map(|detail| match detail {
            Detail::ErrorInfo { reason } => Some(reason.as_str()),
            Detail::PreconditionFailure { .. } => None,
        })
    }

    /// Returns true if the violation code equals `code`.
    pub fn has_violation(&self, code: &impl ReasonCode) -> bool {
        self.violation()
            .is_some_and(|violation| violation.kind == code.as_str())
    }

    /// Returns true if the error-info reason equals `reason`.
    pub fn has_reason(&self, reason: &impl ReasonCode) -> bool {
        self.reason() == Some(reason.as_str())
    }

    pub fn is_retryable(&self) -> bool {
        self.code.is_retryable()
    }
}

/// Builds a permanent rejection carrying exactly one violation.
///
/// If the violation cannot be attached, the result is still a
/// `FailedPrecondition` status whose message is the description.
pub fn failed_precondition(
    code: &impl ReasonCode,
    subject: impl Into<String>,
    description: impl Into<String>,
) -> Status {
    let description = description.into();
    let violation = Violation {
        kind: code.as_str().to_string(),
        subject: subject.into(),
        description: description.clone(),
    };

    Status::new(Code::FailedPrecondition, description.clone())
        .with_details([Detail::PreconditionFailure {
            violations: vec![violation],
        }])
        .unwrap_or_else(|_| Status::new(Code::FailedPrecondition, description))
}

/// Builds a transient outage carrying the cause's message and one reason.
///
/// If the reason cannot be attached the status degrades to `Internal`.
pub fn unavailable<E>(cause: &E, reason: &impl ReasonCode) -> Status
where
    E: std::error::Error + ?Sized,
{
    Status::new(Code::Unavailable, cause.to_string())
        .with_details([Detail::ErrorInfo {
            reason: reason.as_str().to_string(),
        }])
        .unwrap_or_else(|e| Status::new(Code::Internal, format!("failed to set details: {e}")))
}

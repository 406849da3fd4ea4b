// models/src/errors.rs

pub use thiserror::Error;

/// Validation failures for labels arriving from forms or the wire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unknown weekday: {0}")]
    UnknownWeekday(String),
    #[error("unknown role: {0}")]
    UnknownRole(String),
    #[error("unknown appointment status: {0}")]
    UnknownStatus(String),
    #[error("unknown visit type: {0}")]
    UnknownVisitType(String),
}

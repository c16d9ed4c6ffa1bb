//! Error taxonomy for the planner core.

use thiserror::Error;

/// Rejection of a user-supplied device entry.
///
/// Always recoverable: the ledger is left unchanged and the host may show
/// the message as a warning.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("power must be > 0 W, got {power_watts}")]
    NonPositivePower { power_watts: f64 },

    #[error("hours per day must be > 0, got {hours_per_day}")]
    NonPositiveHours { hours_per_day: f64 },

    #[error("hours per day must be <= 24, got {hours_per_day}")]
    HoursExceedDay { hours_per_day: f64 },

    #[error("non-finite value for {what}")]
    NonFinite { what: &'static str },
}

/// Degenerate input to a formula.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("insulation thickness must be > 0 mm, got {thickness_mm}")]
    NonPositiveThickness { thickness_mm: f64 },

    #[error("non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

//! Error types for scheduling decisions.

use thiserror::Error;

/// Errors raised by the external optimization oracle.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OracleError {
    /// Transport-level failure reaching the oracle.
    #[error("oracle transport error: {0}")]
    Transport(String),
    /// Oracle reachable but its response could not be understood.
    #[error("oracle response invalid: {0}")]
    Validation(String),
}

/// Errors produced by the decision engine.
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// Request carried no candidate locations.
    #[error("no candidate locations provided")]
    EmptyLocations,
    /// A time span that must be positive was zero or negative.
    #[error("{0} must be a positive time span")]
    NonPositiveSpan(&'static str),
    /// Configuration rejected while building an engine.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Oracle call failed; the host owns retry policy.
    #[error(transparent)]
    Oracle(#[from] OracleError),
    /// Suspension host rejected or failed the suspend request.
    #[error("host error: {0}")]
    Host(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;

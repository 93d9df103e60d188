//! Suspension-host contract.
//!
//! The engine never parks work itself. When the verdict is to wait, it hands
//! the resume timestamp and a continuation identity to the host and yields;
//! the host owns parking (timer wheel, persisted wake-up record, queue) and
//! invokes the continuation at or after the resume instant.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::SchedulerError;

/// Identity of a continuation the host invokes on resume.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContinuationId(String);

impl ContinuationId {
    /// Create a continuation identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContinuationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContinuationId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Abstraction over the host's suspend/resume primitive.
///
/// Contract: the host guarantees the named continuation is invoked at or
/// after `resume_at`, relying at most on wall-clock time; exact punctuality
/// is not guaranteed. A `resume_at` that is not in the future must resolve
/// as an immediate resume.
#[async_trait]
pub trait SuspendHost: Send + Sync {
    /// Park the current work item and arrange for `continuation` to be
    /// invoked at or after `resume_at`.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::Host`] if the suspension cannot be
    /// registered; the decision attempt fails as a whole.
    async fn suspend(
        &self,
        resume_at: DateTime<Utc>,
        continuation: &ContinuationId,
    ) -> Result<(), SchedulerError>;
}

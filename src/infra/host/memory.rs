//! In-memory recording host for development/testing.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use crate::core::{ContinuationId, SchedulerError, SuspendHost};

/// One registered suspension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suspension {
    /// Requested resume instant, exactly as handed to the host.
    pub resume_at: DateTime<Utc>,
    /// Continuation to invoke on resume.
    pub continuation: ContinuationId,
}

/// Host that records suspensions without ever resuming anything.
///
/// Lets tests assert on the exact resume timestamp and continuation the
/// engine registered.
#[derive(Default)]
pub struct RecordingHost {
    suspensions: Mutex<Vec<Suspension>>,
}

impl RecordingHost {
    /// Create an empty recording host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of registered suspensions, in order.
    #[must_use]
    pub fn suspensions(&self) -> Vec<Suspension> {
        self.suspensions.lock().clone()
    }
}

#[async_trait]
impl SuspendHost for RecordingHost {
    async fn suspend(
        &self,
        resume_at: DateTime<Utc>,
        continuation: &ContinuationId,
    ) -> Result<(), SchedulerError> {
        self.suspensions.lock().push(Suspension {
            resume_at,
            continuation: continuation.clone(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[tokio::test]
    async fn records_suspensions_in_order() {
        let host = RecordingHost::new();
        let first = Utc.with_ymd_and_hms(2024, 1, 1, 14, 0, 0).unwrap();
        let second = Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap();

        host.suspend(first, &ContinuationId::new("a")).await.unwrap();
        host.suspend(second, &ContinuationId::new("b")).await.unwrap();

        let suspensions = host.suspensions();
        assert_eq!(suspensions.len(), 2);
        assert_eq!(suspensions[0].resume_at, first);
        assert_eq!(suspensions[1].continuation, ContinuationId::new("b"));
    }
}

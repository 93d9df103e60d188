//! Tokio timer-based suspension host.
//!
//! Parks work on a tokio timer: `suspend` spawns a task that sleeps until the
//! resume instant and then invokes the registered continuation. A resume
//! instant that is not in the future resolves as an immediate resume.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use crate::core::{ContinuationId, SchedulerError, SuspendHost};

type Continuation = Box<dyn Fn() + Send + Sync + 'static>;

/// Timer-based host backed by a tokio runtime handle.
#[derive(Clone)]
pub struct TimerHost {
    handle: tokio::runtime::Handle,
    continuations: Arc<Mutex<HashMap<ContinuationId, Arc<Continuation>>>>,
}

impl TimerHost {
    /// Create a host that spawns resume timers on the given runtime handle.
    #[must_use]
    pub fn new(handle: tokio::runtime::Handle) -> Self {
        Self {
            handle,
            continuations: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Create a host on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime, as
    /// [`tokio::runtime::Handle::current`] does.
    #[must_use]
    pub fn current() -> Self {
        Self::new(tokio::runtime::Handle::current())
    }

    /// Register the continuation invoked when a suspension under `id`
    /// resumes. Replaces any previous registration for the same identity.
    pub fn register(&self, id: ContinuationId, continuation: impl Fn() + Send + Sync + 'static) {
        self.continuations
            .lock()
            .insert(id, Arc::new(Box::new(continuation)));
    }
}

#[async_trait]
impl SuspendHost for TimerHost {
    async fn suspend(
        &self,
        resume_at: DateTime<Utc>,
        continuation: &ContinuationId,
    ) -> Result<(), SchedulerError> {
        let registered = self
            .continuations
            .lock()
            .get(continuation)
            .cloned()
            .ok_or_else(|| {
                SchedulerError::Host(format!("unknown continuation: {continuation}"))
            })?;

        let delay = (resume_at - Utc::now())
            .to_std()
            .unwrap_or(std::time::Duration::ZERO);
        let id = continuation.clone();

        tracing::info!(continuation = %id, resume_at = %resume_at, delay_secs = delay.as_secs(), "parking until resume instant");

        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            tracing::info!(continuation = %id, "resume timer fired");
            registered();
        });

        Ok(())
    }
}

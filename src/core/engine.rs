//! Scheduling decision engine.
//!
//! One decision per invocation: build a request, ask the oracle once, compare
//! the recommendation against the present moment, and either release the work
//! or register a suspension with the host. There is no retained state across
//! invocations and no retry loop; a new call is a fresh, independent attempt.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;

use super::audit::{build_decision_record, DecisionSink};
use super::deadline::DeadlineCalculator;
use super::error::SchedulerError;
use super::host::{ContinuationId, SuspendHost};
use super::oracle::{Coordinates, OptimizationSignal, Oracle};

/// The configuration surface of a single deferrable unit of work.
#[derive(Debug, Clone)]
pub struct WorkloadProfile {
    /// How long the work will take once started.
    pub expected_duration: Duration,
    /// Maximum delay tolerated before the work must begin.
    pub patience: Duration,
    /// Candidate geographic contexts, in caller order.
    pub locations: Vec<Coordinates>,
    /// Cost criterion the oracle minimizes.
    pub signal: OptimizationSignal,
}

/// The request handed to the oracle for one decision.
#[derive(Debug, Clone)]
pub struct SchedulingRequest {
    /// How long the work will take once started.
    pub expected_duration: Duration,
    /// Maximum delay tolerated before the work must begin.
    pub patience: Duration,
    /// Candidate geographic contexts, in caller order.
    pub locations: Vec<Coordinates>,
    /// Cost criterion the oracle minimizes.
    pub signal: OptimizationSignal,
    /// Latest instant at which execution may still begin.
    pub deadline: DateTime<Utc>,
}

impl SchedulingRequest {
    /// Check preconditions before any external call is made.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::EmptyLocations`] for an empty candidate set
    /// and [`SchedulerError::NonPositiveSpan`] for zero or negative spans.
    pub fn validate(&self) -> Result<(), SchedulerError> {
        if self.locations.is_empty() {
            return Err(SchedulerError::EmptyLocations);
        }
        if self.expected_duration <= Duration::zero() {
            return Err(SchedulerError::NonPositiveSpan("expected_duration"));
        }
        if self.patience <= Duration::zero() {
            return Err(SchedulerError::NonPositiveSpan("patience"));
        }
        Ok(())
    }
}

/// Verdict of a single scheduling decision, consumed immediately by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Release the work for immediate execution.
    ProceedNow,
    /// Park the work; the host resumes the continuation at `resume_at`.
    SuspendUntil {
        /// Absolute resume instant, exactly the oracle's recommendation.
        resume_at: DateTime<Utc>,
        /// Continuation the host invokes on resume.
        continuation: ContinuationId,
    },
}

/// The scheduling decision engine.
///
/// Holds the workload's configuration surface plus the injected oracle and
/// suspension-host capabilities. Oracle output is trusted: a recommendation
/// past the deadline is not re-validated here, by documented policy.
pub struct DecisionEngine<O, H> {
    profile: WorkloadProfile,
    calculator: DeadlineCalculator,
    continuation: ContinuationId,
    oracle: O,
    host: H,
    sink: Option<Arc<Mutex<Box<dyn DecisionSink>>>>,
}

impl<O, H> DecisionEngine<O, H> {
    /// Create an engine from a workload profile and capabilities.
    pub fn new(
        profile: WorkloadProfile,
        calculator: DeadlineCalculator,
        continuation: ContinuationId,
        oracle: O,
        host: H,
    ) -> Self {
        Self {
            profile,
            calculator,
            continuation,
            oracle,
            host,
            sink: None,
        }
    }

    /// Attach a decision sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Box<dyn DecisionSink>) -> Self {
        self.sink = Some(Arc::new(Mutex::new(sink)));
        self
    }

    /// The continuation identity suspensions are registered under.
    #[must_use]
    pub const fn continuation(&self) -> &ContinuationId {
        &self.continuation
    }

    /// The injected oracle capability.
    #[must_use]
    pub const fn oracle(&self) -> &O {
        &self.oracle
    }

    /// The injected suspension-host capability.
    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Build the request for a decision anchored at `now`.
    ///
    /// The deadline is `now + patience`, rounded per the calculator's policy.
    #[must_use]
    pub fn request_at(&self, now: DateTime<Utc>) -> SchedulingRequest {
        SchedulingRequest {
            expected_duration: self.profile.expected_duration,
            patience: self.profile.patience,
            locations: self.profile.locations.clone(),
            signal: self.profile.signal,
            deadline: self.calculator.deadline(now, self.profile.patience),
        }
    }
}

impl<O, H> DecisionEngine<O, H>
where
    O: Oracle,
    H: SuspendHost,
{
    /// Decide whether the work should run now or wait.
    ///
    /// Invokes the oracle exactly once, then compares its recommendation
    /// against `now` with a strict less-than: a recommendation already in the
    /// past yields [`Outcome::ProceedNow`] (missing the optimal window is
    /// cheaper than violating the deadline), while a recommendation at or
    /// after `now` yields [`Outcome::SuspendUntil`]. A recommendation exactly
    /// equal to `now` suspends-to-now, which the host resolves as an
    /// immediate resume; this sidesteps the race where `now` advances between
    /// computation and comparison.
    ///
    /// # Errors
    ///
    /// Precondition violations are rejected before the oracle is called;
    /// oracle failures propagate without retry.
    pub async fn decide(
        &self,
        request: &SchedulingRequest,
        now: DateTime<Utc>,
    ) -> Result<Outcome, SchedulerError> {
        request.validate()?;

        // Sub-hour precision is not supported by the oracle: truncate.
        let duration_hours = request.expected_duration.num_hours();

        let response = self
            .oracle
            .schedule(
                duration_hours,
                request.deadline,
                request.signal,
                &request.locations,
            )
            .await?;

        let diagnostics = &response.optimization_output;
        tracing::info!(
            continuation = %self.continuation,
            zone = %diagnostics.zone_key,
            unit = %diagnostics.metric_unit,
            immediate = diagnostics.metric_value_immediate_execution,
            optimal = diagnostics.metric_value_optimal_execution,
            start_window = diagnostics.metric_value_start_window_execution,
            optimal_start = %response.optimal_start_time,
            "oracle recommendation received"
        );

        let outcome = if response.optimal_start_time < now {
            tracing::info!(
                continuation = %self.continuation,
                "recommended window already passed, proceeding immediately"
            );
            Outcome::ProceedNow
        } else {
            tracing::info!(
                continuation = %self.continuation,
                resume_at = %response.optimal_start_time,
                "suspending until recommended start"
            );
            Outcome::SuspendUntil {
                resume_at: response.optimal_start_time,
                continuation: self.continuation.clone(),
            }
        };

        if let Some(sink) = &self.sink {
            let mut sink = sink.lock();
            sink.record(build_decision_record(
                self.continuation.as_str(),
                &outcome,
                &response,
                now,
            ));
        }

        Ok(outcome)
    }

    /// Run one full decision anchored at `now`: build the request, decide,
    /// and on a suspend verdict register the resume with the host.
    ///
    /// # Errors
    ///
    /// Propagates precondition, oracle, and host failures; there is no
    /// intermediate state to clean up.
    pub async fn run_at(&self, now: DateTime<Utc>) -> Result<Outcome, SchedulerError> {
        let request = self.request_at(now);
        let outcome = self.decide(&request, now).await?;

        if let Outcome::SuspendUntil {
            resume_at,
            continuation,
        } = &outcome
        {
            self.host.suspend(*resume_at, continuation).await?;
        }

        Ok(outcome)
    }

    /// Run one full decision anchored at the current wall-clock instant.
    ///
    /// # Errors
    ///
    /// Same as [`Self::run_at`].
    pub async fn run(&self) -> Result<Outcome, SchedulerError> {
        self.run_at(crate::util::clock::now_utc()).await
    }
}

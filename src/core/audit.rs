//! Decision-record sinks.
//!
//! Every verdict can be mirrored to a sink for observability: which way the
//! decision went, when, and what the oracle's cost diagnostics looked like.
//! Records never influence the decision itself.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::engine::Outcome;
use super::oracle::OptimizerResponse;

/// A single recorded scheduling verdict.
#[derive(Debug, Clone)]
pub struct DecisionRecord {
    /// Record identifier.
    pub record_id: String,
    /// Continuation the decision was made for.
    pub continuation: String,
    /// Verdict taken: `proceed` or `suspend`.
    pub action: String,
    /// Instant the decision was made.
    pub decided_at: DateTime<Utc>,
    /// Resume instant, present for suspend verdicts.
    pub resume_at: Option<DateTime<Utc>>,
    /// Grid zone the oracle computed its metrics for.
    pub zone_key: String,
    /// Unit of the metric values.
    pub metric_unit: String,
    /// Cost of starting immediately.
    pub metric_value_immediate: f64,
    /// Cost of starting at the recommended instant.
    pub metric_value_optimal: f64,
}

/// Decision sink abstraction.
pub trait DecisionSink: Send {
    /// Record a scheduling verdict.
    fn record(&mut self, record: DecisionRecord);
}

/// In-memory sink with a bounded ring buffer, for testing and dev.
pub struct InMemoryDecisionSink {
    records: VecDeque<DecisionRecord>,
    max_records: usize,
}

impl InMemoryDecisionSink {
    /// Create a new in-memory sink with a bounded buffer.
    #[must_use]
    pub fn new(max_records: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(max_records),
            max_records,
        }
    }

    /// Retrieve a snapshot of stored records.
    #[must_use]
    pub fn records(&self) -> Vec<DecisionRecord> {
        self.records.iter().cloned().collect()
    }
}

impl DecisionSink for InMemoryDecisionSink {
    fn record(&mut self, record: DecisionRecord) {
        if self.records.len() >= self.max_records {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }
}

/// Build a decision record from a verdict and the oracle response behind it.
#[must_use]
pub fn build_decision_record(
    continuation: &str,
    outcome: &Outcome,
    response: &OptimizerResponse,
    decided_at: DateTime<Utc>,
) -> DecisionRecord {
    let (action, resume_at) = match outcome {
        Outcome::ProceedNow => ("proceed", None),
        Outcome::SuspendUntil { resume_at, .. } => ("suspend", Some(*resume_at)),
    };
    let output = &response.optimization_output;
    DecisionRecord {
        record_id: Uuid::new_v4().to_string(),
        continuation: continuation.to_string(),
        action: action.to_string(),
        decided_at,
        resume_at,
        zone_key: output.zone_key.clone(),
        metric_unit: output.metric_unit.clone(),
        metric_value_immediate: output.metric_value_immediate_execution,
        metric_value_optimal: output.metric_value_optimal_execution,
    }
}

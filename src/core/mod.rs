//! Core decision abstractions: deadlines, oracle and host contracts, engine.

pub mod error;
pub mod deadline;
pub mod oracle;
pub mod host;
pub mod engine;
pub mod audit;

pub use error::{AppResult, OracleError, SchedulerError};
pub use deadline::{DeadlineCalculator, RoundingPolicy};
pub use oracle::{Coordinates, OptimizationOutput, OptimizationSignal, OptimizerResponse, Oracle};
pub use host::{ContinuationId, SuspendHost};
pub use engine::{DecisionEngine, Outcome, SchedulingRequest, WorkloadProfile};
pub use audit::{build_decision_record, DecisionRecord, DecisionSink, InMemoryDecisionSink};

//! # Carbon Scheduler
//!
//! A carbon-aware deferral scheduler for batch workloads.
//!
//! This library decides, for a single deferrable unit of work, *when* within an
//! allowed waiting window that work should actually run, so as to minimize the
//! carbon intensity of the electricity powering it while still guaranteeing the
//! work begins before a hard deadline.
//!
//! ## Core Problem Solved
//!
//! Deferrable workloads (nightly batch jobs, model training, report generation)
//! rarely need to start the instant they are triggered:
//!
//! - **Grid carbon intensity varies hourly**: running the same job a few hours
//!   later can cut its emissions substantially
//! - **Deadlines are hard**: the work must still begin before the caller's
//!   patience runs out, even if the forecast oracle is slow or wrong
//! - **Hosts differ**: the same decision logic must plug into timer-based,
//!   queue-based, or persisted suspend/resume mechanisms
//!
//! ## Key Features
//!
//! - **Single-shot decision engine**: one oracle call, one verdict - proceed
//!   immediately or suspend until the recommended start time
//! - **Deadline safety**: the engine never schedules in the past; a missed
//!   optimal window degrades to immediate execution, never a deadline breach
//! - **Pluggable oracle**: the optimizer is a trait - substitute a scripted
//!   in-memory oracle in tests or an HTTP client in production
//! - **Host-owned suspension**: the engine registers a resume timestamp and a
//!   continuation with a `SuspendHost` and yields; it holds no resources
//!   while parked
//!
//! ## Making a Decision
//!
//! ```rust,ignore
//! use carbon_scheduler::core::{
//!     ContinuationId, DeadlineCalculator, DecisionEngine, Outcome, WorkloadProfile,
//! };
//! use carbon_scheduler::infra::host::TimerHost;
//! use carbon_scheduler::infra::oracle::HttpOracle;
//! use carbon_scheduler::core::Coordinates;
//! use chrono::Duration;
//!
//! let engine = DecisionEngine::new(
//!     WorkloadProfile {
//!         expected_duration: Duration::hours(1),
//!         patience: Duration::hours(4),
//!         locations: vec![Coordinates::new(48.8566, 2.3522)],
//!         signal: Default::default(),
//!     },
//!     DeadlineCalculator::ceil_to_hour(),
//!     ContinuationId::new("nightly-report"),
//!     HttpOracle::new("https://optimizer.example/v1/schedule"),
//!     TimerHost::current(),
//! );
//!
//! match engine.run().await? {
//!     Outcome::ProceedNow => { /* start the work right away */ }
//!     Outcome::SuspendUntil { resume_at, .. } => {
//!         // the host wakes the continuation at or after `resume_at`
//!     }
//! }
//! ```
//!
//! For complete examples, see:
//! - `tests/decision_engine_test.rs` - Full integration tests
//! - `README.md` - Comprehensive documentation

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core decision abstractions: deadlines, oracle and host contracts, engine.
pub mod core;
/// Configuration models for the scheduling surface.
pub mod config;
/// Builders to construct a decision engine from configuration.
pub mod builders;
/// Infrastructure adapters for oracle and suspension-host backends.
pub mod infra;
/// Shared utilities.
pub mod util;

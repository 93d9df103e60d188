//! Configuration models for the scheduling surface.

pub mod workload;

pub use workload::{DeadlineRoundingConfig, SchedulerConfig};

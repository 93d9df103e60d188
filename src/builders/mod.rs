//! Builders to construct a decision engine from configuration.

pub mod engine_builder;

pub use engine_builder::build_engine;

//! Oracle contract and response data model.
//!
//! The optimization oracle is an external collaborator: given a duration, a
//! deadline, a cost signal, and candidate locations, it recommends the best
//! start time and location. This module defines only the interface boundary;
//! backends live under `infra::oracle`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::OracleError;

/// A candidate geographic context the oracle may choose among.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
}

impl Coordinates {
    /// Create a coordinate pair.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether latitude and longitude fall within their valid ranges.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// The cost criterion the oracle minimizes when ranking start times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OptimizationSignal {
    /// Consumption-based carbon intensity following electricity flows
    /// between zones.
    #[default]
    FlowTracedCarbonIntensity,
    /// Production-based carbon intensity of the local grid.
    CarbonIntensity,
}

/// Cost-metric diagnostics for three reference points of the decision.
///
/// Observability only; never feeds the decision logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationOutput {
    /// Metric value if the work started immediately.
    pub metric_value_immediate_execution: f64,
    /// Metric value at the recommended start.
    pub metric_value_optimal_execution: f64,
    /// Metric value at the latest-safe (start window) execution.
    pub metric_value_start_window_execution: f64,
    /// Unit of the metric values, e.g. `gCO2eq/kWh`.
    pub metric_unit: String,
    /// The signal the values were computed for.
    pub optimization_metric: OptimizationSignal,
    /// Grid zone the metric was computed for.
    pub zone_key: String,
}

/// The oracle's recommendation, owned by the caller after return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizerResponse {
    /// Recommended execution-start instant. By oracle contract this does not
    /// exceed the deadline; the engine does not re-validate it.
    pub optimal_start_time: DateTime<Utc>,
    /// The chosen location from the candidate set.
    pub optimal_location: Coordinates,
    /// Cost-metric diagnostics.
    pub optimization_output: OptimizationOutput,
}

/// Abstraction over the external optimization oracle.
///
/// Implementations must resolve a single `schedule` call per decision;
/// caching, retries, and transport concerns belong to the backend, not the
/// engine.
#[async_trait]
pub trait Oracle: Send + Sync {
    /// Recommend the best start time and location for work of
    /// `duration_hours` that must begin no later than `deadline`.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError`] on transport or validation failure; the engine
    /// propagates it without retry.
    async fn schedule(
        &self,
        duration_hours: i64,
        deadline: DateTime<Utc>,
        signal: OptimizationSignal,
        locations: &[Coordinates],
    ) -> Result<OptimizerResponse, OracleError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_validity() {
        assert!(Coordinates::new(48.8566, 2.3522).is_valid());
        assert!(Coordinates::new(-90.0, 180.0).is_valid());
        assert!(!Coordinates::new(90.5, 0.0).is_valid());
        assert!(!Coordinates::new(0.0, -180.1).is_valid());
    }

    #[test]
    fn signal_default_is_flow_traced() {
        assert_eq!(
            OptimizationSignal::default(),
            OptimizationSignal::FlowTracedCarbonIntensity
        );
    }

    #[test]
    fn signal_wire_format() {
        let json = serde_json::to_string(&OptimizationSignal::FlowTracedCarbonIntensity).unwrap();
        assert_eq!(json, "\"FLOW_TRACED_CARBON_INTENSITY\"");
    }
}

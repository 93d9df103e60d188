//! In-memory scripted oracle for development/testing.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use crate::core::{
    Coordinates, OptimizationSignal, OptimizerResponse, Oracle, OracleError,
};

/// One recorded `schedule` invocation, inputs captured verbatim.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    /// Duration passed to the oracle, in whole hours.
    pub duration_hours: i64,
    /// Deadline passed to the oracle.
    pub deadline: DateTime<Utc>,
    /// Signal passed to the oracle.
    pub signal: OptimizationSignal,
    /// Locations passed to the oracle, in order.
    pub locations: Vec<Coordinates>,
}

/// Oracle that replays a scripted response (or error) and records every call.
///
/// The substitution point for tests and local development: assert on the
/// recorded inputs to verify what the engine actually asked for.
pub struct StaticOracle {
    script: Result<OptimizerResponse, OracleError>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StaticOracle {
    /// Oracle that answers every call with `response`.
    #[must_use]
    pub fn responding(response: OptimizerResponse) -> Self {
        Self {
            script: Ok(response),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Oracle that fails every call with a transport error.
    #[must_use]
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            script: Err(OracleError::Transport(reason.into())),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of all recorded calls, in invocation order.
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    /// Number of `schedule` invocations so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl Oracle for StaticOracle {
    async fn schedule(
        &self,
        duration_hours: i64,
        deadline: DateTime<Utc>,
        signal: OptimizationSignal,
        locations: &[Coordinates],
    ) -> Result<OptimizerResponse, OracleError> {
        self.calls.lock().push(RecordedCall {
            duration_hours,
            deadline,
            signal,
            locations: locations.to_vec(),
        });
        self.script.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::OptimizationOutput;
    use chrono::TimeZone;

    fn response() -> OptimizerResponse {
        OptimizerResponse {
            optimal_start_time: Utc.with_ymd_and_hms(2024, 1, 1, 14, 0, 0).unwrap(),
            optimal_location: Coordinates::new(48.8566, 2.3522),
            optimization_output: OptimizationOutput {
                metric_value_immediate_execution: 100.0,
                metric_value_optimal_execution: 80.0,
                metric_value_start_window_execution: 90.0,
                metric_unit: "gCO2eq/kWh".into(),
                optimization_metric: OptimizationSignal::FlowTracedCarbonIntensity,
                zone_key: "FR".into(),
            },
        }
    }

    #[tokio::test]
    async fn records_inputs_in_order() {
        let oracle = StaticOracle::responding(response());
        let deadline = Utc.with_ymd_and_hms(2024, 1, 1, 15, 0, 0).unwrap();
        let locations = [
            Coordinates::new(48.8566, 2.3522),
            Coordinates::new(52.52, 13.405),
        ];

        let out = oracle
            .schedule(1, deadline, OptimizationSignal::default(), &locations)
            .await
            .unwrap();
        assert_eq!(out, response());

        let calls = oracle.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].duration_hours, 1);
        assert_eq!(calls[0].deadline, deadline);
        assert_eq!(calls[0].locations, locations.to_vec());
    }

    #[tokio::test]
    async fn failing_oracle_returns_transport_error() {
        let oracle = StaticOracle::failing("connection reset");
        let deadline = Utc.with_ymd_and_hms(2024, 1, 1, 15, 0, 0).unwrap();
        let err = oracle
            .schedule(
                1,
                deadline,
                OptimizationSignal::default(),
                &[Coordinates::new(48.8566, 2.3522)],
            )
            .await
            .unwrap_err();
        assert_eq!(err, OracleError::Transport("connection reset".into()));
        assert_eq!(oracle.call_count(), 1);
    }
}

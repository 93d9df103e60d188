//! Workload scheduling configuration structures.

use serde::{Deserialize, Serialize};

use crate::core::{Coordinates, OptimizationSignal};

/// Deadline rounding selection.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineRoundingConfig {
    /// No rounding of the computed deadline.
    #[default]
    None,
    /// Round the deadline up to the next whole hour.
    CeilToHour,
}

/// Scheduling configuration for one deferrable workload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Maximum tolerated delay before the work must begin, in seconds.
    pub patience_secs: u64,
    /// Expected runtime of the work once started, in seconds.
    pub expected_duration_secs: u64,
    /// Candidate locations the oracle may choose among, in order.
    pub locations: Vec<Coordinates>,
    /// Cost criterion the oracle minimizes.
    #[serde(default)]
    pub signal: OptimizationSignal,
    /// Deadline rounding policy.
    #[serde(default)]
    pub rounding: DeadlineRoundingConfig,
    /// Continuation the host invokes on resume.
    pub continuation: String,
}

impl SchedulerConfig {
    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns a human-readable message for the first violated constraint.
    pub fn validate(&self) -> Result<(), String> {
        if self.patience_secs == 0 {
            return Err("patience_secs must be greater than 0".into());
        }
        if self.expected_duration_secs == 0 {
            return Err("expected_duration_secs must be greater than 0".into());
        }
        if self.locations.is_empty() {
            return Err("at least one location must be defined".into());
        }
        for (i, location) in self.locations.iter().enumerate() {
            if !location.is_valid() {
                return Err(format!(
                    "location {i} out of range: ({}, {})",
                    location.latitude, location.longitude
                ));
            }
        }
        if self.continuation.is_empty() {
            return Err("continuation must not be empty".into());
        }
        Ok(())
    }

    /// Parse scheduler configuration from a JSON string and validate.
    ///
    /// # Errors
    ///
    /// Returns a message for parse failures or invalid values.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> SchedulerConfig {
        SchedulerConfig {
            patience_secs: 4 * 3600,
            expected_duration_secs: 3600,
            locations: vec![Coordinates::new(48.8566, 2.3522)],
            signal: OptimizationSignal::default(),
            rounding: DeadlineRoundingConfig::CeilToHour,
            continuation: "execute_complete".into(),
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn zero_patience_rejected() {
        let mut cfg = valid();
        cfg.patience_secs = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_duration_rejected() {
        let mut cfg = valid();
        cfg.expected_duration_secs = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn empty_locations_rejected() {
        let mut cfg = valid();
        cfg.locations.clear();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn out_of_range_location_rejected() {
        let mut cfg = valid();
        cfg.locations.push(Coordinates::new(91.0, 0.0));
        let err = cfg.validate().unwrap_err();
        assert!(err.contains("location 1 out of range"));
    }

    #[test]
    fn empty_continuation_rejected() {
        let mut cfg = valid();
        cfg.continuation.clear();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn from_json_applies_defaults() {
        let cfg = SchedulerConfig::from_json_str(
            r#"{
                "patience_secs": 14400,
                "expected_duration_secs": 3600,
                "locations": [{"latitude": 48.8566, "longitude": 2.3522}],
                "continuation": "execute_complete"
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.signal, OptimizationSignal::FlowTracedCarbonIntensity);
        assert!(matches!(cfg.rounding, DeadlineRoundingConfig::None));
    }

    #[test]
    fn from_json_rejects_invalid_values() {
        let err = SchedulerConfig::from_json_str(
            r#"{
                "patience_secs": 0,
                "expected_duration_secs": 3600,
                "locations": [{"latitude": 48.8566, "longitude": 2.3522}],
                "continuation": "execute_complete"
            }"#,
        )
        .unwrap_err();
        assert!(err.contains("patience_secs"));
    }
}

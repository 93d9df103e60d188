//! Build a decision engine from validated configuration.

use chrono::Duration;

use crate::config::{DeadlineRoundingConfig, SchedulerConfig};
use crate::core::{
    ContinuationId, DeadlineCalculator, DecisionEngine, RoundingPolicy, SchedulerError,
    WorkloadProfile,
};

/// Construct a [`DecisionEngine`] from configuration plus injected oracle and
/// suspension-host capabilities.
///
/// # Errors
///
/// Returns [`SchedulerError::InvalidConfig`] when the configuration fails
/// validation or a span does not fit a signed span type.
pub fn build_engine<O, H>(
    cfg: &SchedulerConfig,
    oracle: O,
    host: H,
) -> Result<DecisionEngine<O, H>, SchedulerError> {
    cfg.validate().map_err(SchedulerError::InvalidConfig)?;

    let profile = WorkloadProfile {
        expected_duration: span_secs(cfg.expected_duration_secs, "expected_duration_secs")?,
        patience: span_secs(cfg.patience_secs, "patience_secs")?,
        locations: cfg.locations.clone(),
        signal: cfg.signal,
    };

    let rounding = match cfg.rounding {
        DeadlineRoundingConfig::None => RoundingPolicy::None,
        DeadlineRoundingConfig::CeilToHour => RoundingPolicy::CeilToHour,
    };

    Ok(DecisionEngine::new(
        profile,
        DeadlineCalculator::new(rounding),
        ContinuationId::new(cfg.continuation.clone()),
        oracle,
        host,
    ))
}

fn span_secs(secs: u64, field: &str) -> Result<Duration, SchedulerError> {
    let secs = i64::try_from(secs)
        .map_err(|_| SchedulerError::InvalidConfig(format!("{field} too large")))?;
    Ok(Duration::seconds(secs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coordinates;
    use crate::infra::host::RecordingHost;
    use crate::infra::oracle::StaticOracle;

    fn config() -> SchedulerConfig {
        SchedulerConfig {
            patience_secs: 4 * 3600,
            expected_duration_secs: 3600,
            locations: vec![Coordinates::new(48.8566, 2.3522)],
            signal: Default::default(),
            rounding: DeadlineRoundingConfig::CeilToHour,
            continuation: "execute_complete".into(),
        }
    }

    #[test]
    fn builds_engine_from_valid_config() {
        let engine = build_engine(
            &config(),
            StaticOracle::failing("unused"),
            RecordingHost::new(),
        )
        .unwrap();
        assert_eq!(engine.continuation().as_str(), "execute_complete");
    }

    #[test]
    fn rejects_invalid_config() {
        let mut cfg = config();
        cfg.locations.clear();
        let result = build_engine(&cfg, StaticOracle::failing("unused"), RecordingHost::new());
        assert!(matches!(result, Err(SchedulerError::InvalidConfig(_))));
    }
}

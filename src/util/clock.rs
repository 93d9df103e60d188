//! Wall-clock helpers.

use chrono::{DateTime, Utc};

/// Current wall-clock instant in UTC.
///
/// Decision entry points take an explicit `now` so tests can pin the clock;
/// this is the production anchor used by [`crate::core::DecisionEngine::run`].
#[must_use]
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn now_is_after_2024() {
        let epoch_2024 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert!(now_utc() > epoch_2024);
    }
}

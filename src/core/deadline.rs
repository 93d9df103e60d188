//! Deadline calculation for scheduling decisions.
//!
//! The deadline is the latest instant at which execution may still begin. It
//! is derived from the caller's patience anchored at a reference time; any
//! rounding is opt-in and explicit, since silently moving the deadline changes
//! the safety margin the oracle is asked to respect.

use chrono::{DateTime, Duration, Utc};

/// How a computed deadline is rounded before being handed to the oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingPolicy {
    /// No rounding: `deadline = reference + allowance` exactly.
    #[default]
    None,
    /// Round up to the next whole hour. An instant already on an hour
    /// boundary is left unchanged.
    CeilToHour,
}

/// Computes the latest acceptable execution-start deadline.
///
/// Pure arithmetic over two valid inputs; there are no failure modes.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeadlineCalculator {
    rounding: RoundingPolicy,
}

impl DeadlineCalculator {
    /// Create a calculator with an explicit rounding policy.
    #[must_use]
    pub const fn new(rounding: RoundingPolicy) -> Self {
        Self { rounding }
    }

    /// Calculator that rounds deadlines up to the next whole hour, matching
    /// hourly-granular optimizer forecasts.
    #[must_use]
    pub const fn ceil_to_hour() -> Self {
        Self::new(RoundingPolicy::CeilToHour)
    }

    /// The rounding policy in effect.
    #[must_use]
    pub const fn rounding(&self) -> RoundingPolicy {
        self.rounding
    }

    /// Derive the deadline from a reference time and the allowed delay.
    ///
    /// Invariant: the result is never earlier than `reference` for a
    /// non-negative `allowance`, and is monotonically non-decreasing in
    /// `allowance` at a fixed reference.
    #[must_use]
    pub fn deadline(&self, reference: DateTime<Utc>, allowance: Duration) -> DateTime<Utc> {
        let deadline = reference + allowance;
        match self.rounding {
            RoundingPolicy::None => deadline,
            RoundingPolicy::CeilToHour => ceil_to_hour(deadline),
        }
    }
}

/// Round an instant up to the next whole hour; hour boundaries are fixpoints.
fn ceil_to_hour(t: DateTime<Utc>) -> DateTime<Utc> {
    let rem_secs = t.timestamp().rem_euclid(3600);
    let subsec_nanos = i64::from(t.timestamp_subsec_nanos());
    if rem_secs == 0 && subsec_nanos == 0 {
        return t;
    }
    t - Duration::nanoseconds(subsec_nanos) + Duration::seconds(3600 - rem_secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, h, m, s).unwrap()
    }

    #[test]
    fn no_rounding_is_plain_addition() {
        let calc = DeadlineCalculator::default();
        let deadline = calc.deadline(at(10, 30, 0), Duration::hours(4));
        assert_eq!(deadline, at(14, 30, 0));
    }

    #[test]
    fn ceil_rounds_up_to_next_hour() {
        // 10:45:30 + 4h = 14:45:30, rounded up to 15:00:00.
        let calc = DeadlineCalculator::ceil_to_hour();
        let deadline = calc.deadline(at(10, 45, 30), Duration::hours(4));
        assert_eq!(deadline, at(15, 0, 0));
    }

    #[test]
    fn ceil_leaves_hour_boundary_unchanged() {
        let calc = DeadlineCalculator::ceil_to_hour();
        let deadline = calc.deadline(at(10, 0, 0), Duration::hours(2));
        assert_eq!(deadline, at(12, 0, 0));
    }

    #[test]
    fn ceil_rounds_one_second_past_boundary() {
        let calc = DeadlineCalculator::ceil_to_hour();
        let deadline = calc.deadline(at(10, 0, 1), Duration::hours(2));
        assert_eq!(deadline, at(13, 0, 0));
    }

    #[test]
    fn deadline_never_precedes_reference() {
        let calc = DeadlineCalculator::ceil_to_hour();
        let reference = at(10, 45, 30);
        assert!(calc.deadline(reference, Duration::zero()) >= reference);
        assert!(calc.deadline(reference, Duration::minutes(1)) >= reference);
    }

    #[test]
    fn deadline_monotone_in_allowance() {
        for calc in [DeadlineCalculator::default(), DeadlineCalculator::ceil_to_hour()] {
            let reference = at(10, 45, 30);
            let mut previous = calc.deadline(reference, Duration::minutes(0));
            for mins in 1..=300 {
                let next = calc.deadline(reference, Duration::minutes(mins));
                assert!(next >= previous, "deadline regressed at {mins} minutes");
                previous = next;
            }
        }
    }
}

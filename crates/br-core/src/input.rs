//! Validated inputs for the estimator.
//!
//! The form that collects these values already restricts them to sensible
//! ranges, but the constructors here check them again so the estimator never
//! trusts its caller.

use std::fmt;

use chrono::{NaiveTime, Timelike};

use crate::error::EstimationError;

/// Number of seconds in a day.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Desired wake time as seconds since midnight, in `[0, 86400)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WakeTime(u32);

impl WakeTime {
    /// Creates a wake time from seconds since midnight.
    ///
    /// Fractional seconds are truncated.
    pub fn from_seconds(seconds: f64) -> Result<Self, EstimationError> {
        if !(0.0..f64::from(SECONDS_PER_DAY)).contains(&seconds) {
            return Err(EstimationError::invalid(
                "wake time",
                format!("expected seconds since midnight in [0, 86400), got {seconds}"),
            ));
        }
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "range checked above"
        )]
        let whole = seconds.trunc() as u32;
        Ok(Self(whole))
    }

    /// Creates a wake time from an hour and minute on a 24-hour clock.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, EstimationError> {
        if hour >= 24 || minute >= 60 {
            return Err(EstimationError::invalid(
                "wake time",
                format!("{hour:02}:{minute:02} is not a time of day"),
            ));
        }
        Ok(Self(hour * 3600 + minute * 60))
    }

    /// Seconds since midnight.
    pub const fn seconds(self) -> u32 {
        self.0
    }

    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::from_num_seconds_from_midnight_opt(self.0, 0).unwrap_or(NaiveTime::MIN)
    }
}

impl Default for WakeTime {
    fn default() -> Self {
        Self(8 * 3600)
    }
}

impl From<NaiveTime> for WakeTime {
    fn from(time: NaiveTime) -> Self {
        Self(time.num_seconds_from_midnight())
    }
}

impl fmt::Display for WakeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 3600, (self.0 % 3600) / 60)
    }
}

/// Desired amount of sleep in hours. Always finite and positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SleepAmount(f64);

impl SleepAmount {
    /// Lower bound offered by the form.
    pub const MIN_HOURS: f64 = 4.0;

    /// Upper bound offered by the form.
    pub const MAX_HOURS: f64 = 12.0;

    /// Stepper increment offered by the form.
    pub const STEP_HOURS: f64 = 0.25;

    /// Creates a sleep amount after validation.
    ///
    /// Any finite positive value is accepted; the form's `[4, 12]` range is
    /// not enforced here.
    pub fn new(hours: f64) -> Result<Self, EstimationError> {
        if !hours.is_finite() || hours <= 0.0 {
            return Err(EstimationError::invalid(
                "sleep amount",
                format!("expected a positive number of hours, got {hours}"),
            ));
        }
        Ok(Self(hours))
    }

    /// Snaps a value onto the form's domain: `[4, 12]` in quarter hours.
    ///
    /// NaN becomes the default.
    #[must_use]
    pub fn clamped(hours: f64) -> Self {
        if hours.is_nan() {
            return Self::default();
        }
        let snapped = (hours / Self::STEP_HOURS).round() * Self::STEP_HOURS;
        Self(snapped.clamp(Self::MIN_HOURS, Self::MAX_HOURS))
    }

    pub const fn hours(self) -> f64 {
        self.0
    }
}

impl Default for SleepAmount {
    fn default() -> Self {
        Self(8.0)
    }
}

impl fmt::Display for SleepAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} hours", self.0)
    }
}

/// Number of caffeinated drinks per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CoffeeCount(u64);

impl CoffeeCount {
    /// Lower bound offered by the form.
    pub const MIN_CUPS: u64 = 1;

    /// Upper bound offered by the form.
    pub const MAX_CUPS: u64 = 20;

    /// Creates a coffee count, rejecting negative values.
    ///
    /// Every non-negative `i64` is accepted.
    pub fn new(cups: i64) -> Result<Self, EstimationError> {
        u64::try_from(cups).map(Self).map_err(|_| {
            EstimationError::invalid(
                "coffee count",
                format!("expected a non-negative number of cups, got {cups}"),
            )
        })
    }

    /// Snaps a value onto the form's domain: `[1, 20]`.
    #[must_use]
    pub fn clamped(cups: i64) -> Self {
        let clamped = cups.clamp(1, 20);
        Self(u64::try_from(clamped).unwrap_or(Self::MIN_CUPS))
    }

    pub const fn cups(self) -> u64 {
        self.0
    }
}

impl Default for CoffeeCount {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for CoffeeCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 1 {
            write!(f, "1 cup")
        } else {
            write!(f, "{} cups", self.0)
        }
    }
}

/// The three values the form submits.
///
/// The default matches the form's initial state: wake at 08:00 after
/// 8 hours of sleep, with one cup of coffee a day.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BedtimeRequest {
    pub wake: WakeTime,
    pub sleep: SleepAmount,
    pub coffee: CoffeeCount,
}

impl BedtimeRequest {
    /// Validates raw values into a request.
    pub fn from_raw(
        wake_seconds: f64,
        desired_sleep_hours: f64,
        coffee_count: i64,
    ) -> Result<Self, EstimationError> {
        Ok(Self {
            wake: WakeTime::from_seconds(wake_seconds)?,
            sleep: SleepAmount::new(desired_sleep_hours)?,
            coffee: CoffeeCount::new(coffee_count)?,
        })
    }
}

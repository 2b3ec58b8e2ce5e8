//! Bedtime derivation: wake time minus predicted sleep.
//!
//! Works on seconds since midnight with an explicit day rollover instead of
//! subtracting from a full date, so a wake time just after midnight lands on
//! the previous evening rather than going out of range.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::error::EstimationError;
use crate::estimator::{BedtimeEstimator, PredictedSleep};
use crate::input::{BedtimeRequest, SECONDS_PER_DAY, WakeTime};
use crate::model::SleepModel;

/// Recommended time to fall asleep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bedtime {
    /// Time of day.
    pub time: NaiveTime,
    /// Calendar days before the wake day; 0 means the same day.
    pub days_before: u32,
}

impl Bedtime {
    /// Subtracts `predicted` from `wake`.
    pub fn from_wake(wake: WakeTime, predicted: &PredictedSleep) -> Self {
        let day = i64::from(SECONDS_PER_DAY);
        let offset = i64::from(wake.seconds()) - predicted.as_duration().num_seconds();

        let seconds_of_day = u32::try_from(offset.rem_euclid(day)).unwrap_or(0);
        let days_before = u32::try_from(-offset.div_euclid(day)).unwrap_or(u32::MAX);

        Self {
            time: NaiveTime::from_num_seconds_from_midnight_opt(seconds_of_day, 0)
                .unwrap_or(NaiveTime::MIN),
            days_before,
        }
    }

    /// Places the bedtime on the calendar, given the date of the wake time.
    ///
    /// Returns `None` if the result falls outside chrono's date range.
    pub fn on(&self, wake_date: NaiveDate) -> Option<NaiveDateTime> {
        wake_date
            .and_time(self.time)
            .checked_sub_signed(TimeDelta::days(i64::from(self.days_before)))
    }

    pub const fn is_previous_day(&self) -> bool {
        self.days_before > 0
    }

    /// Short 12-hour clock, e.g. `10:32 PM`.
    pub fn format_short(&self) -> String {
        self.time.format("%-I:%M %p").to_string()
    }
}

impl fmt::Display for Bedtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_short())
    }
}

/// Estimates sleep need for `request` and derives the bedtime from it.
pub fn calculate_bedtime<M: SleepModel>(
    estimator: &BedtimeEstimator<M>,
    request: &BedtimeRequest,
) -> Result<Bedtime, EstimationError> {
    let predicted = estimator.estimate_request(request)?;
    Ok(Bedtime::from_wake(request.wake, &predicted))
}

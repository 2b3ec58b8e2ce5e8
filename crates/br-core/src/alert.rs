//! What the front end shows after "Calculate Bedtime".
//!
//! Estimation failures end here: they are logged and replaced by a fixed
//! message, never passed on.

use std::fmt;

use serde::Serialize;

use crate::bedtime::{Bedtime, calculate_bedtime};
use crate::error::EstimationError;
use crate::estimator::BedtimeEstimator;
use crate::input::BedtimeRequest;
use crate::model::SleepModel;

pub const SUCCESS_TITLE: &str = "Your ideal bedtime is...";
pub const ERROR_TITLE: &str = "Error";
pub const ERROR_MESSAGE: &str = "There was a problem calculating bedtime...";

/// Whether an alert reports a bedtime or a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Bedtime,
    Error,
}

/// A one-shot message with a title and body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub title: String,
    pub message: String,
    #[serde(skip)]
    pub kind: AlertKind,
}

impl Alert {
    pub fn bedtime(bedtime: &Bedtime) -> Self {
        Self {
            title: SUCCESS_TITLE.to_string(),
            message: bedtime.format_short(),
            kind: AlertKind::Bedtime,
        }
    }

    pub fn error() -> Self {
        Self {
            title: ERROR_TITLE.to_string(),
            message: ERROR_MESSAGE.to_string(),
            kind: AlertKind::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == AlertKind::Error
    }
}

impl From<Result<Bedtime, EstimationError>> for Alert {
    fn from(result: Result<Bedtime, EstimationError>) -> Self {
        match result {
            Ok(bedtime) => Self::bedtime(&bedtime),
            Err(e) => {
                tracing::warn!(error = %e, "bedtime calculation failed");
                Self::error()
            }
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.title, self.message)
    }
}

/// Runs the full calculation and returns the alert to show.
pub fn recommend<M: SleepModel>(estimator: &BedtimeEstimator<M>, request: &BedtimeRequest) -> Alert {
    Alert::from(calculate_bedtime(estimator, request))
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    use crate::model::{Coefficients, LinearSleepModel};

    #[test]
    fn recommend_default_request() {
        let alert = recommend(&BedtimeEstimator::embedded(), &BedtimeRequest::default());
        assert!(!alert.is_error());
        assert_snapshot!(alert.to_string(), @r"
        Your ideal bedtime is...
        12:13 AM
        ");
    }

    #[test]
    fn recommend_reports_model_failure_as_message() {
        let estimator = BedtimeEstimator::new(LinearSleepModel::new(Coefficients {
            wake: f64::NAN,
            ..Coefficients::EMBEDDED
        }));
        let alert = recommend(&estimator, &BedtimeRequest::default());
        assert!(alert.is_error());
        assert_eq!(alert, Alert::error());
        assert_snapshot!(alert.to_string(), @r"
        Error
        There was a problem calculating bedtime...
        ");
    }

    #[test]
    fn invalid_input_becomes_error_alert() {
        let result = BedtimeRequest::from_raw(25_200.0, 8.0, -1)
            .and_then(|request| calculate_bedtime(&BedtimeEstimator::embedded(), &request));
        let alert = Alert::from(result);
        assert_eq!(alert.title, ERROR_TITLE);
        assert_eq!(alert.message, ERROR_MESSAGE);
    }

    #[test]
    fn alert_kind_does_not_depend_on_wording() {
        let alert = Alert {
            title: ERROR_TITLE.to_string(),
            message: "11:00 PM".to_string(),
            kind: AlertKind::Bedtime,
        };
        assert!(!alert.is_error());

        let alert = Alert {
            title: "Something went wrong".to_string(),
            ..Alert::error()
        };
        assert!(alert.is_error());
    }

    #[test]
    fn alert_serializes_title_and_message() {
        let json = serde_json::to_string(&Alert::error()).unwrap();
        assert_eq!(
            json,
            r#"{"title":"Error","message":"There was a problem calculating bedtime..."}"#
        );
    }
}

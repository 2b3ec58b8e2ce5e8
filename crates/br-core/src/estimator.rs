//! Bedtime estimator: validated inputs in, predicted sleep duration out.

use std::fmt;

use chrono::TimeDelta;

use crate::error::EstimationError;
use crate::input::BedtimeRequest;
use crate::model::{Features, LinearSleepModel, SleepModel};

/// Predicted amount of sleep actually needed.
///
/// Always finite, non-negative, and representable as a [`TimeDelta`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictedSleep {
    seconds: f64,
    duration: TimeDelta,
}

impl PredictedSleep {
    /// Wraps a raw model output, rejecting values that are not a usable duration.
    pub fn from_seconds(seconds: f64) -> Result<Self, EstimationError> {
        if !seconds.is_finite() {
            return Err(EstimationError::model(format!(
                "prediction is not finite: {seconds}"
            )));
        }
        if seconds < 0.0 {
            return Err(EstimationError::model(format!(
                "prediction is negative: {seconds} seconds"
            )));
        }

        #[expect(
            clippy::cast_possible_truncation,
            reason = "saturating cast; out-of-range values are rejected by try_seconds"
        )]
        let whole = seconds.round() as i64;
        let duration = TimeDelta::try_seconds(whole).ok_or_else(|| {
            EstimationError::model(format!("prediction is out of range: {seconds} seconds"))
        })?;

        Ok(Self { seconds, duration })
    }

    /// The raw prediction in seconds.
    pub const fn seconds(&self) -> f64 {
        self.seconds
    }

    pub fn hours(&self) -> f64 {
        self.seconds / 3600.0
    }

    /// The prediction rounded to whole seconds.
    pub const fn as_duration(&self) -> TimeDelta {
        self.duration
    }
}

impl fmt::Display for PredictedSleep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.duration.num_seconds();
        write!(f, "{}h {:02}m", total / 3600, (total % 3600) / 60)
    }
}

/// Maps (wake time, desired sleep, coffee count) to a [`PredictedSleep`].
///
/// Pure and deterministic for a fixed model; safe to share between threads.
#[derive(Debug, Clone)]
pub struct BedtimeEstimator<M = LinearSleepModel> {
    model: M,
}

impl BedtimeEstimator {
    /// An estimator over the compiled-in coefficient table.
    pub const fn embedded() -> Self {
        Self::new(LinearSleepModel::embedded())
    }
}

impl Default for BedtimeEstimator {
    fn default() -> Self {
        Self::embedded()
    }
}

impl<M: SleepModel> BedtimeEstimator<M> {
    pub const fn new(model: M) -> Self {
        Self { model }
    }

    pub const fn model(&self) -> &M {
        &self.model
    }

    /// Estimates from raw values.
    ///
    /// `wake_seconds` must be in `[0, 86400)`, `desired_sleep_hours` finite
    /// and positive, and `coffee_count` non-negative; anything else is
    /// [`EstimationError::InvalidInput`].
    pub fn estimate(
        &self,
        wake_seconds: f64,
        desired_sleep_hours: f64,
        coffee_count: i64,
    ) -> Result<PredictedSleep, EstimationError> {
        let request = BedtimeRequest::from_raw(wake_seconds, desired_sleep_hours, coffee_count)?;
        self.estimate_request(&request)
    }

    /// Estimates from an already validated request.
    pub fn estimate_request(
        &self,
        request: &BedtimeRequest,
    ) -> Result<PredictedSleep, EstimationError> {
        let features = Features::from(request);
        let seconds = self
            .model
            .predict_seconds(&features)
            .map_err(|e| EstimationError::model(e.to_string()))?;
        let predicted = PredictedSleep::from_seconds(seconds)?;

        tracing::debug!(
            wake = %request.wake,
            sleep_hours = request.sleep.hours(),
            coffee = request.coffee.cups(),
            predicted_seconds = predicted.seconds(),
            "estimated sleep need"
        );
        Ok(predicted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::{Coefficients, ModelError};

    const FOURTEEN_HOURS: f64 = 14.0 * 3600.0;

    /// A model whose inference backend always fails.
    #[derive(Debug)]
    struct BrokenModel;

    impl SleepModel for BrokenModel {
        fn predict_seconds(&self, _features: &Features) -> Result<f64, ModelError> {
            Err(ModelError::NonFinite { name: "intercept" })
        }
    }

    #[test]
    fn estimate_returns_finite_non_negative_duration() {
        let estimator = BedtimeEstimator::embedded();
        let predicted = estimator.estimate(25_200.0, 8.0, 2).unwrap();

        assert!(predicted.seconds().is_finite());
        assert!(predicted.seconds() >= 0.0);
        // -1200 + 420 * 2 + 0.015 * 25200 + 3540 * 8
        assert_eq!(predicted.as_duration(), TimeDelta::seconds(28_338));
    }

    #[test]
    fn estimate_is_deterministic() {
        let estimator = BedtimeEstimator::embedded();
        let first = estimator.estimate(27_000.0, 7.5, 3);
        let second = estimator.estimate(27_000.0, 7.5, 3);
        assert_eq!(first, second);
    }

    #[test]
    fn estimate_handles_day_boundaries() {
        let estimator = BedtimeEstimator::embedded();
        assert!(estimator.estimate(0.0, 8.0, 1).is_ok());
        assert!(estimator.estimate(86_399.0, 8.0, 1).is_ok());
    }

    #[test]
    fn more_coffee_stays_within_plausible_bounds() {
        let estimator = BedtimeEstimator::embedded();
        let mut previous = 0.0;
        for cups in 0..=20 {
            let seconds = estimator.estimate(25_200.0, 8.0, cups).unwrap().seconds();
            assert!(seconds >= previous, "prediction dropped at {cups} cups");
            assert!(
                (0.0..=FOURTEEN_HOURS).contains(&seconds),
                "{seconds} out of range"
            );
            previous = seconds;
        }
    }

    #[test]
    fn very_large_coffee_count_is_valid_input() {
        let estimator = BedtimeEstimator::embedded();
        let predicted = estimator.estimate(25_200.0, 8.0, 5_000_000_000).unwrap();
        // Dominated by 420 seconds per cup.
        assert!(predicted.seconds() > 2.0e12);
    }

    #[test]
    fn negative_coffee_is_invalid_input() {
        let estimator = BedtimeEstimator::embedded();
        let err = estimator.estimate(25_200.0, 8.0, -1).unwrap_err();
        assert!(matches!(
            err,
            EstimationError::InvalidInput {
                field: "coffee count",
                ..
            }
        ));
    }

    #[test]
    fn invalid_wake_and_sleep_are_rejected() {
        let estimator = BedtimeEstimator::embedded();
        assert!(matches!(
            estimator.estimate(86_400.0, 8.0, 1),
            Err(EstimationError::InvalidInput { .. })
        ));
        assert!(matches!(
            estimator.estimate(25_200.0, f64::NAN, 1),
            Err(EstimationError::InvalidInput { .. })
        ));
        assert!(matches!(
            estimator.estimate(25_200.0, 0.0, 1),
            Err(EstimationError::InvalidInput { .. })
        ));
    }

    #[test]
    fn negative_prediction_is_model_failure() {
        // -1200 + 0 + 0 + 3540 * 0.25 = -315
        let estimator = BedtimeEstimator::embedded();
        let err = estimator.estimate(0.0, 0.25, 0).unwrap_err();
        assert!(matches!(err, EstimationError::ModelFailure { .. }));
    }

    #[test]
    fn overflowing_prediction_is_model_failure() {
        let estimator = BedtimeEstimator::new(LinearSleepModel::new(Coefficients {
            estimated_sleep: f64::MAX,
            ..Coefficients::EMBEDDED
        }));
        let err = estimator.estimate(25_200.0, 12.0, 1).unwrap_err();
        assert!(matches!(err, EstimationError::ModelFailure { .. }));
    }

    #[test]
    fn malformed_coefficients_are_model_failure() {
        let estimator = BedtimeEstimator::new(LinearSleepModel::new(Coefficients {
            intercept: f64::INFINITY,
            ..Coefficients::EMBEDDED
        }));
        let err = estimator.estimate(25_200.0, 8.0, 1).unwrap_err();
        assert_eq!(
            err,
            EstimationError::ModelFailure {
                reason: "coefficient `intercept` is not finite".to_string()
            }
        );
    }

    #[test]
    fn backend_failure_is_model_failure() {
        let estimator = BedtimeEstimator::new(BrokenModel);
        let err = estimator.estimate(25_200.0, 8.0, 1).unwrap_err();
        assert!(matches!(err, EstimationError::ModelFailure { .. }));
    }

    #[test]
    fn predicted_sleep_rejects_unusable_values() {
        assert!(PredictedSleep::from_seconds(f64::NAN).is_err());
        assert!(PredictedSleep::from_seconds(-1.0).is_err());
        assert!(PredictedSleep::from_seconds(1e300).is_err());
        assert!(PredictedSleep::from_seconds(0.0).is_ok());
    }

    #[test]
    fn predicted_sleep_display() {
        let predicted = PredictedSleep::from_seconds(29_700.0).unwrap();
        assert_eq!(predicted.to_string(), "8h 15m");
        assert!((predicted.hours() - 8.25).abs() < f64::EPSILON);
    }

    #[test]
    fn estimator_is_shareable_across_threads() {
        let estimator = std::sync::Arc::new(BedtimeEstimator::embedded());
        let handles: Vec<_> = (0..4)
            .map(|cups| {
                let estimator = std::sync::Arc::clone(&estimator);
                std::thread::spawn(move || estimator.estimate(25_200.0, 8.0, cups))
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap().is_ok());
        }
    }
}

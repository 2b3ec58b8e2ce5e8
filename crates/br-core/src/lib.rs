//! Core logic for the bedtime calculator.
//!
//! This crate contains:
//! - Inputs: validated wake time, sleep amount and coffee count
//! - Model: the versioned linear coefficient table and its evaluation
//! - Estimation: predicted sleep need with structured failures
//! - Bedtime: wake time minus predicted sleep, across midnight
//! - Alert: the two messages a front end can show

pub mod alert;
mod bedtime;
mod error;
mod estimator;
pub mod input;
pub mod model;

pub use alert::{Alert, AlertKind, recommend};
pub use bedtime::{Bedtime, calculate_bedtime};
pub use error::EstimationError;
pub use estimator::{BedtimeEstimator, PredictedSleep};
pub use input::{BedtimeRequest, CoffeeCount, SleepAmount, WakeTime};
pub use model::{Coefficients, Features, LinearSleepModel, ModelError, SleepModel};

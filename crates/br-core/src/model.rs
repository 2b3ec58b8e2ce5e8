//! Sleep-need regression model.
//!
//! The model is linear over three features:
//!
//! ```text
//! actual_sleep_seconds = intercept
//!                      + coffee          * cups per day
//!                      + wake            * wake seconds since midnight
//!                      + estimated_sleep * desired sleep hours
//! ```
//!
//! Coefficients come from offline training and are shipped as a versioned
//! table. A copy is compiled in ([`Coefficients::EMBEDDED`]); an override can
//! be read from a JSON file at startup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::input::BedtimeRequest;

/// Coefficient table schema understood by this crate.
pub const SCHEMA_VERSION: u32 = 1;

/// Errors from loading or evaluating a model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The coefficient file could not be read.
    #[error("failed to read coefficients from {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The coefficient file is not valid JSON for a coefficient table.
    #[error("failed to parse coefficients")]
    Parse(#[from] serde_json::Error),

    /// The table was written for a different schema.
    #[error("unsupported coefficient schema version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    /// A coefficient is NaN or infinite.
    #[error("coefficient `{name}` is not finite")]
    NonFinite { name: &'static str },
}

/// Trained coefficients for [`LinearSleepModel`]. Predictions are in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    pub schema_version: u32,
    pub intercept: f64,
    /// Seconds per cup of coffee.
    pub coffee: f64,
    /// Seconds per second of wake time after midnight.
    pub wake: f64,
    /// Seconds per hour of desired sleep.
    pub estimated_sleep: f64,
}

impl Coefficients {
    /// The table compiled into the crate.
    pub const EMBEDDED: Self = Self {
        schema_version: SCHEMA_VERSION,
        intercept: -1200.0,
        coffee: 420.0,
        wake: 0.015,
        estimated_sleep: 3540.0,
    };

    /// Parses and validates a JSON coefficient table.
    pub fn from_json_str(json: &str) -> Result<Self, ModelError> {
        let coefficients: Self = serde_json::from_str(json)?;
        coefficients.validate()?;
        Ok(coefficients)
    }

    /// Reads and validates a JSON coefficient table from disk.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let json = std::fs::read_to_string(path).map_err(|source| ModelError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let coefficients = Self::from_json_str(&json)?;
        tracing::debug!(path = ?path, version = coefficients.schema_version, "loaded coefficients");
        Ok(coefficients)
    }

    /// Checks the schema version and that every coefficient is finite.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(ModelError::UnsupportedVersion {
                found: self.schema_version,
                expected: SCHEMA_VERSION,
            });
        }
        for (name, value) in self.terms() {
            if !value.is_finite() {
                return Err(ModelError::NonFinite { name });
            }
        }
        Ok(())
    }

    /// Named coefficients, in table order.
    pub const fn terms(&self) -> [(&'static str, f64); 4] {
        [
            ("intercept", self.intercept),
            ("coffee", self.coffee),
            ("wake", self.wake),
            ("estimated_sleep", self.estimated_sleep),
        ]
    }
}

impl Default for Coefficients {
    fn default() -> Self {
        Self::EMBEDDED
    }
}

/// Model inputs in the units the coefficients expect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Features {
    pub coffee: f64,
    pub wake_seconds: f64,
    pub estimated_sleep_hours: f64,
}

impl From<&BedtimeRequest> for Features {
    fn from(request: &BedtimeRequest) -> Self {
        #[expect(
            clippy::cast_precision_loss,
            reason = "counts above 2^53 cups only lose precision the model cannot use"
        )]
        let coffee = request.coffee.cups() as f64;
        Self {
            coffee,
            wake_seconds: f64::from(request.wake.seconds()),
            estimated_sleep_hours: request.sleep.hours(),
        }
    }
}

/// Predicts how many seconds of sleep are actually needed.
///
/// Implementations are read-only after construction and may be shared across
/// threads.
pub trait SleepModel: Send + Sync + std::fmt::Debug {
    /// Returns the raw prediction in seconds. The result is not checked for
    /// sign or finiteness; the estimator does that.
    fn predict_seconds(&self, features: &Features) -> Result<f64, ModelError>;
}

/// Dot product of [`Features`] with a [`Coefficients`] table.
#[derive(Debug, Clone, Default)]
pub struct LinearSleepModel {
    coefficients: Coefficients,
}

impl LinearSleepModel {
    pub const fn new(coefficients: Coefficients) -> Self {
        Self { coefficients }
    }

    /// A model over [`Coefficients::EMBEDDED`].
    pub const fn embedded() -> Self {
        Self::new(Coefficients::EMBEDDED)
    }

    pub const fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }
}

impl SleepModel for LinearSleepModel {
    fn predict_seconds(&self, features: &Features) -> Result<f64, ModelError> {
        let c = &self.coefficients;
        c.validate()?;

        let prediction = c.estimated_sleep.mul_add(
            features.estimated_sleep_hours,
            c.wake.mul_add(
                features.wake_seconds,
                c.coffee.mul_add(features.coffee, c.intercept),
            ),
        );
        Ok(prediction)
    }
}

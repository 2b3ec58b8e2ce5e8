//! Calculate command: the bedtime recommendation.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use br_core::{
    Alert, Bedtime, BedtimeEstimator, EstimationError, PredictedSleep, SleepModel, WakeTime,
};

use crate::Config;
use crate::cli::CalculateArgs;
use crate::commands::util::parse_wake_time;

/// JSON shape of a successful calculation.
#[derive(Debug, Serialize)]
pub struct BedtimeReport {
    pub wake: String,
    pub desired_sleep_hours: f64,
    pub coffee_count: i64,
    pub predicted_sleep_seconds: i64,
    pub bedtime: String,
    pub bedtime_display: String,
    pub previous_day: bool,
}

/// Runs the calculate command.
///
/// Estimation failures are shown as the error alert; only unusable
/// command-line text (an unparseable wake time) returns `Err`.
pub fn run<W: Write, M: SleepModel>(
    writer: &mut W,
    estimator: &BedtimeEstimator<M>,
    config: &Config,
    args: &CalculateArgs,
) -> Result<()> {
    let wake_text = args.wake.as_deref().unwrap_or(&config.default_wake);
    let wake = parse_wake_time(wake_text)?;
    let sleep_hours = args.sleep.unwrap_or(config.default_sleep_hours);
    let coffee = args.coffee.unwrap_or(config.default_coffee);

    tracing::debug!(%wake, sleep_hours, coffee, "calculating bedtime");

    let result = estimator
        .estimate(f64::from(wake.seconds()), sleep_hours, coffee)
        .map(|predicted| (Bedtime::from_wake(wake, &predicted), predicted));

    if args.json {
        write_json(writer, wake, sleep_hours, coffee, result)
    } else {
        let alert = Alert::from(result.map(|(bedtime, _)| bedtime));
        writeln!(writer, "{alert}")?;
        Ok(())
    }
}

fn write_json<W: Write>(
    writer: &mut W,
    wake: WakeTime,
    sleep_hours: f64,
    coffee: i64,
    result: Result<(Bedtime, PredictedSleep), EstimationError>,
) -> Result<()> {
    let json = match result {
        Ok((bedtime, predicted)) => serde_json::to_string_pretty(&BedtimeReport {
            wake: wake.to_string(),
            desired_sleep_hours: sleep_hours,
            coffee_count: coffee,
            predicted_sleep_seconds: predicted.as_duration().num_seconds(),
            bedtime: bedtime.time.format("%H:%M").to_string(),
            bedtime_display: bedtime.format_short(),
            previous_day: bedtime.is_previous_day(),
        })?,
        Err(e) => serde_json::to_string_pretty(&Alert::from(Err::<Bedtime, _>(e)))?,
    };
    writeln!(writer, "{json}")?;
    Ok(())
}

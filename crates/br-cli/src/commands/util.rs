//! Shared utilities for CLI commands.

use anyhow::Context;
use chrono::NaiveTime;

use br_core::WakeTime;

/// Accepted wake time formats, tried in order.
const WAKE_FORMATS: [&str; 3] = ["%H:%M", "%I:%M %p", "%I:%M%p"];

/// Parse a wake time as a 24-hour or 12-hour clock time.
///
/// Supports:
/// - 24-hour: "07:00", "7:00", "23:15"
/// - 12-hour: "7:00 AM", "11:15 pm", "7:00am"
pub fn parse_wake_time(s: &str) -> anyhow::Result<WakeTime> {
    let trimmed = s.trim();
    let time = WAKE_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
        .with_context(|| {
            format!("Invalid wake time: {s}. Use HH:MM (e.g., 07:00) or H:MM AM/PM (e.g., 7:00 AM)")
        })?;
    Ok(WakeTime::from(time))
}

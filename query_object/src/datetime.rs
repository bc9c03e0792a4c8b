//! Datetime normalization
//!
//! Date-valued operands are sent to the remote service as UTC literals in the
//! form `YYYY-MM-DD hh:mm:ss`.

use chrono::{DateTime, TimeZone, Utc};
use config::HourClock;

const PATTERN_TWENTY_FOUR: &str = "%Y-%m-%d %H:%M:%S";
const PATTERN_TWELVE: &str = "%Y-%m-%d %I:%M:%S";

/// Convert any zoned datetime to UTC
pub fn to_utc<Tz: TimeZone>(value: &DateTime<Tz>) -> DateTime<Utc> {
    value.with_timezone(&Utc)
}

/// Render a UTC datetime as an encoded query literal
pub fn format_datetime(value: &DateTime<Utc>, hour_clock: HourClock) -> String {
    let pattern = match hour_clock {
        HourClock::TwentyFour => PATTERN_TWENTY_FOUR,
        HourClock::Twelve => PATTERN_TWELVE,
    };
    value.format(pattern).to_string()
}

//! Time handling for feed instants.
//!
//! The feed publishes POSIX seconds. Every instant is carried in the
//! network's home timezone so that calendar dates and clock strings come
//! out the way riders read them, including across DST changes.

use chrono::{DateTime, Duration, NaiveDate, TimeZone};
use chrono_tz::Tz;

/// A timezone-aware instant in the network's home timezone.
pub type NetworkTime = DateTime<Tz>;

/// The home timezone of the Long Island Rail Road.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::New_York;

/// Convert POSIX seconds from the feed into a [`NetworkTime`].
///
/// Returns `None` for values outside chrono's representable range.
///
/// # Examples
///
/// ```
/// use itinerary_server::domain::from_unix_seconds;
///
/// let t = from_unix_seconds(1_710_511_200, chrono_tz::America::New_York).unwrap();
/// assert_eq!(t.to_rfc3339(), "2024-03-15T10:00:00-04:00");
/// ```
pub fn from_unix_seconds(secs: i64, tz: Tz) -> Option<NetworkTime> {
    DateTime::from_timestamp(secs, 0).map(|utc| utc.with_timezone(&tz))
}

/// Local calendar date of an instant, in the instant's own timezone.
pub fn service_date(t: &NetworkTime) -> NaiveDate {
    t.date_naive()
}

/// Re-express any aware instant in the given home timezone.
pub fn in_timezone<Z: TimeZone>(t: &DateTime<Z>, tz: Tz) -> NetworkTime {
    t.with_timezone(&tz)
}

/// Format an instant as a 12-hour clock string, e.g. `"09:05 AM"`.
pub fn format_clock(t: &NetworkTime) -> String {
    t.format("%I:%M %p").to_string()
}

/// Format a duration as `H:MM:SS`.
///
/// Durations of a day or more get a `"N day, "` / `"N days, "` prefix and
/// the clock part wraps at 24 hours. Negative durations clamp to zero.
///
/// # Examples
///
/// ```
/// use chrono::Duration;
/// use itinerary_server::domain::format_duration;
///
/// assert_eq!(format_duration(Duration::minutes(50)), "0:50:00");
/// assert_eq!(format_duration(Duration::seconds(3725)), "1:02:05");
/// assert_eq!(format_duration(Duration::hours(25)), "1 day, 1:00:00");
/// ```
pub fn format_duration(d: Duration) -> String {
    let total = d.num_seconds().max(0);
    let days = total / 86_400;
    let rem = total % 86_400;
    let clock = format!("{}:{:02}:{:02}", rem / 3600, (rem % 3600) / 60, rem % 60);

    match days {
        0 => clock,
        1 => format!("1 day, {clock}"),
        n => format!("{n} days, {clock}"),
    }
}

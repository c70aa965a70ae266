//! UTC offsets for turning a booking draft's local date and time into
//! instants. The offset is looked up for the booked date, so daylight-saving
//! changes between today and the booking are honoured.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

#[cfg(any(test, feature = "hydrate"))]
use chrono::{Datelike, Timelike};
use chrono::{FixedOffset, NaiveDateTime, Offset, Utc};
use market::LocalOffset;

/// Convert a `Date.getTimezoneOffset()` value into an offset.
///
/// JavaScript reports minutes *behind* UTC (UTC+2 is `-120`). Values outside
/// the representable range fall back to UTC.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn offset_from_js_minutes(minutes: f64) -> FixedOffset {
    if !minutes.is_finite() {
        return Utc.fix();
    }
    let seconds = (minutes * 60.0).round();
    if seconds.abs() >= 86_400.0 {
        return Utc.fix();
    }
    FixedOffset::west_opt(seconds as i32).unwrap_or_else(|| Utc.fix())
}

/// The browser's time zone rules, asked about the booked wall-clock time
/// rather than the current moment. Off-browser everything is UTC.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserZone;

impl LocalOffset for BrowserZone {
    fn offset_at(&self, local: NaiveDateTime) -> Option<FixedOffset> {
        #[cfg(feature = "hydrate")]
        {
            let date = js_sys::Date::new_with_year_month_day_hr_min_sec(
                u32::try_from(local.year()).ok()?,
                i32::try_from(local.month0()).ok()?,
                i32::try_from(local.day()).ok()?,
                i32::try_from(local.hour()).ok()?,
                i32::try_from(local.minute()).ok()?,
                i32::try_from(local.second()).ok()?,
            );
            offset_if_exists(local, date.get_hours(), date.get_minutes(), date.get_timezone_offset())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = local;
            Some(Utc.fix())
        }
    }
}

/// `Date` moves a wall-clock time inside a spring-forward gap to a later
/// hour; a moved hour or minute means the requested time does not exist.
#[cfg(any(test, feature = "hydrate"))]
fn offset_if_exists(local: NaiveDateTime, hours: u32, minutes: u32, js_minutes: f64) -> Option<FixedOffset> {
    (local.hour() == hours && local.minute() == minutes).then(|| offset_from_js_minutes(js_minutes))
}

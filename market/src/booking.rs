//! Booking drafts and the reservation request derived from them.
//!
//! A draft holds the raw date, time, and duration text the user typed.
//! [`validate`] is the only validation point; it turns a draft into a
//! [`ValidDraft`], from which [`BookingRequest::from_valid`] derives the
//! `[start, end)` interval. The UTC offset comes from a [`LocalOffset`]
//! resolved at the booked wall-clock time, so a January booking made in July
//! gets January's offset.
//!
//! INVARIANTS
//! ==========
//! - A request is never built from an unvalidated draft.
//! - `end - start == duration` hours, so `end > start` for every valid draft.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeDelta};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

/// Why a draft cannot be submitted. `Display` is the user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Please choose a date.")]
    MissingDate,
    #[error("Please choose a start time.")]
    MissingTime,
    #[error("Date must look like YYYY-MM-DD.")]
    InvalidDate,
    #[error("Time must look like HH:MM.")]
    InvalidTime,
    #[error("Duration must be a whole number of hours.")]
    InvalidDuration,
    #[error("Duration must be at least 1 hour.")]
    NonPositiveDuration,
    #[error("That time is skipped by a clock change. Please pick another.")]
    SkippedTime,
}

/// Resolves the UTC offset in effect at a local wall-clock time.
///
/// `None` means the time does not exist locally (a spring-forward gap).
pub trait LocalOffset {
    fn offset_at(&self, local: NaiveDateTime) -> Option<FixedOffset>;
}

impl LocalOffset for FixedOffset {
    fn offset_at(&self, _local: NaiveDateTime) -> Option<FixedOffset> {
        Some(*self)
    }
}

impl<F> LocalOffset for F
where
    F: Fn(NaiveDateTime) -> Option<FixedOffset>,
{
    fn offset_at(&self, local: NaiveDateTime) -> Option<FixedOffset> {
        self(local)
    }
}

/// Editable booking form state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingDraft {
    /// Calendar date as entered (`YYYY-MM-DD`).
    pub date: String,
    /// Local clock time as entered (`HH:MM`).
    pub time: String,
    /// Duration in hours as entered.
    pub duration: String,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            date: String::new(),
            time: String::new(),
            duration: "1".to_owned(),
        }
    }
}

impl BookingDraft {
    pub fn set_date(&mut self, date: impl Into<String>) {
        self.date = date.into();
    }

    pub fn set_time(&mut self, time: impl Into<String>) {
        self.time = time.into();
    }

    pub fn set_duration(&mut self, duration: impl Into<String>) {
        self.duration = duration.into();
    }
}

/// A draft whose fields all parsed and satisfy the booking rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidDraft {
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Whole hours, at least 1.
    pub duration_hours: u32,
}

impl ValidDraft {
    /// Local wall-clock start.
    #[must_use]
    pub fn local_start(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// Concrete `(start, end)` instants, with the offset `zone` reports for
    /// the booked start.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::SkippedTime`] when the start does not exist in
    /// `zone` and [`DraftError::InvalidDuration`] when the end falls outside
    /// the representable date range.
    pub fn interval(
        &self,
        zone: &impl LocalOffset,
    ) -> Result<(DateTime<FixedOffset>, DateTime<FixedOffset>), DraftError> {
        let local = self.local_start();
        let offset = zone.offset_at(local).ok_or(DraftError::SkippedTime)?;
        let start = local
            .and_local_timezone(offset)
            .single()
            .ok_or(DraftError::InvalidTime)?;
        let end = start
            .checked_add_signed(TimeDelta::hours(i64::from(self.duration_hours)))
            .ok_or(DraftError::InvalidDuration)?;
        Ok((start, end))
    }
}

/// Validate a draft. Checks run in field order so the first problem the user
/// sees is the one nearest the top of the form.
///
/// # Errors
///
/// Returns the first [`DraftError`] found.
pub fn validate(draft: &BookingDraft) -> Result<ValidDraft, DraftError> {
    let date_raw = draft.date.trim();
    if date_raw.is_empty() {
        return Err(DraftError::MissingDate);
    }
    let time_raw = draft.time.trim();
    if time_raw.is_empty() {
        return Err(DraftError::MissingTime);
    }

    let date = NaiveDate::parse_from_str(date_raw, DATE_FORMAT).map_err(|_| DraftError::InvalidDate)?;
    let time = TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(time_raw, fmt).ok())
        .ok_or(DraftError::InvalidTime)?;
    let duration_hours = parse_duration(&draft.duration)?;

    Ok(ValidDraft { date, time, duration_hours })
}

fn parse_duration(raw: &str) -> Result<u32, DraftError> {
    let hours: i64 = raw.trim().parse().map_err(|_| DraftError::InvalidDuration)?;
    if hours < 1 {
        return Err(DraftError::NonPositiveDuration);
    }
    u32::try_from(hours).map_err(|_| DraftError::InvalidDuration)
}

/// Body of `POST /bookings`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub listing_id: String,
    #[serde(serialize_with = "serialize_rfc3339")]
    pub start_time: DateTime<FixedOffset>,
    #[serde(serialize_with = "serialize_rfc3339")]
    pub end_time: DateTime<FixedOffset>,
}

impl BookingRequest {
    /// Build a request for `listing_id` from a validated draft.
    ///
    /// # Errors
    ///
    /// Propagates [`ValidDraft::interval`] failures.
    pub fn from_valid(listing_id: &str, draft: &ValidDraft, zone: &impl LocalOffset) -> Result<Self, DraftError> {
        let (start_time, end_time) = draft.interval(zone)?;
        Ok(Self {
            listing_id: listing_id.to_owned(),
            start_time,
            end_time,
        })
    }

    /// Validate `draft` and build the request in one step.
    ///
    /// # Errors
    ///
    /// Returns the validation error; no request is produced for invalid input.
    pub fn prepare(listing_id: &str, draft: &BookingDraft, zone: &impl LocalOffset) -> Result<Self, DraftError> {
        let valid = validate(draft)?;
        Self::from_valid(listing_id, &valid, zone)
    }

    /// Booked length in whole hours.
    #[must_use]
    pub fn duration_hours(&self) -> i64 {
        (self.end_time - self.start_time).num_hours()
    }
}

fn serialize_rfc3339<S>(value: &DateTime<FixedOffset>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Secs, false))
}

/// Response of `POST /bookings`. The identifier is read; every other field
/// is carried through untouched so it can be shown or printed as sent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub body: Map<String, Value>,
}

impl BookingConfirmation {
    /// The booking's `status` field, when the service sent one.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.body.get("status").and_then(Value::as_str)
    }
}

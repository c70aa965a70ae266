use super::*;
use chrono::Datelike;

// =============================================================
// Helpers
// =============================================================

fn utc() -> FixedOffset {
    FixedOffset::east_opt(0).unwrap()
}

fn draft(date: &str, time: &str, duration: &str) -> BookingDraft {
    BookingDraft {
        date: date.to_owned(),
        time: time.to_owned(),
        duration: duration.to_owned(),
    }
}

// =============================================================
// Draft editing
// =============================================================

#[test]
fn default_draft_is_empty_with_one_hour() {
    let d = BookingDraft::default();
    assert!(d.date.is_empty());
    assert!(d.time.is_empty());
    assert_eq!(d.duration, "1");
}

#[test]
fn setters_do_not_validate() {
    let mut d = BookingDraft::default();
    d.set_date("not a date");
    d.set_time("25:99");
    d.set_duration("-3");
    assert_eq!(d, draft("not a date", "25:99", "-3"));
}

// =============================================================
// validate
// =============================================================

#[test]
fn validate_accepts_well_formed_draft() {
    let valid = validate(&draft("2024-06-01", "14:00", "2")).unwrap();
    assert_eq!(valid.date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    assert_eq!(valid.time, NaiveTime::from_hms_opt(14, 0, 0).unwrap());
    assert_eq!(valid.duration_hours, 2);
}

#[test]
fn validate_accepts_time_with_seconds_and_padding() {
    let valid = validate(&draft(" 2024-06-01 ", " 09:30:15 ", " 3 ")).unwrap();
    assert_eq!(valid.time, NaiveTime::from_hms_opt(9, 30, 15).unwrap());
    assert_eq!(valid.duration_hours, 3);
}

#[test]
fn validate_reports_missing_fields_in_form_order() {
    assert_eq!(validate(&draft("", "", "1")), Err(DraftError::MissingDate));
    assert_eq!(validate(&draft("  ", "10:00", "1")), Err(DraftError::MissingDate));
    assert_eq!(validate(&draft("2024-06-01", "", "1")), Err(DraftError::MissingTime));
}

#[test]
fn validate_rejects_malformed_date_and_time() {
    assert_eq!(validate(&draft("06/01/2024", "10:00", "1")), Err(DraftError::InvalidDate));
    assert_eq!(validate(&draft("2024-02-30", "10:00", "1")), Err(DraftError::InvalidDate));
    assert_eq!(validate(&draft("2024-06-01", "25:00", "1")), Err(DraftError::InvalidTime));
    assert_eq!(validate(&draft("2024-06-01", "2pm", "1")), Err(DraftError::InvalidTime));
}

#[test]
fn validate_rejects_zero_and_negative_duration() {
    assert_eq!(validate(&draft("2024-06-01", "10:00", "0")), Err(DraftError::NonPositiveDuration));
    assert_eq!(validate(&draft("2024-06-01", "10:00", "-2")), Err(DraftError::NonPositiveDuration));
}

#[test]
fn validate_rejects_non_numeric_duration() {
    assert_eq!(validate(&draft("2024-06-01", "10:00", "")), Err(DraftError::InvalidDuration));
    assert_eq!(validate(&draft("2024-06-01", "10:00", "1.5")), Err(DraftError::InvalidDuration));
    assert_eq!(validate(&draft("2024-06-01", "10:00", "two")), Err(DraftError::InvalidDuration));
    assert_eq!(
        validate(&draft("2024-06-01", "10:00", "99999999999")),
        Err(DraftError::InvalidDuration)
    );
}

#[test]
fn draft_error_messages_are_user_facing() {
    assert_eq!(DraftError::MissingDate.to_string(), "Please choose a date.");
    assert_eq!(DraftError::NonPositiveDuration.to_string(), "Duration must be at least 1 hour.");
}

// =============================================================
// Interval derivation
// =============================================================

#[test]
fn booking_for_two_hours_in_utc() {
    let request = BookingRequest::prepare("abc123", &draft("2024-06-01", "14:00", "2"), &utc()).unwrap();
    assert_eq!(request.listing_id, "abc123");
    assert_eq!(request.start_time.to_rfc3339(), "2024-06-01T14:00:00+00:00");
    assert_eq!(request.end_time.to_rfc3339(), "2024-06-01T16:00:00+00:00");
}

#[test]
fn interval_length_matches_duration_for_many_inputs() {
    for hours in 1..=48u32 {
        let valid = ValidDraft {
            date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            time: NaiveTime::from_hms_opt(23, 30, 0).unwrap(),
            duration_hours: hours,
        };
        let (start, end) = valid.interval(&utc()).unwrap();
        assert!(end > start);
        assert_eq!((end - start).num_hours(), i64::from(hours));
    }
}

#[test]
fn interval_crosses_midnight() {
    let request = BookingRequest::prepare("l", &draft("2024-06-01", "23:00", "3"), &utc()).unwrap();
    assert_eq!(request.end_time.to_rfc3339(), "2024-06-02T02:00:00+00:00");
    assert_eq!(request.duration_hours(), 3);
}

#[test]
fn interval_keeps_local_wall_clock_at_offset() {
    let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
    let request = BookingRequest::prepare("l", &draft("2024-06-01", "14:00", "1"), &plus_two).unwrap();
    assert_eq!(request.start_time.to_rfc3339(), "2024-06-01T14:00:00+02:00");
    assert_eq!(request.start_time.naive_utc().to_string(), "2024-06-01 12:00:00");
}

/// Central European rules in miniature: +02:00 from April through October,
/// +01:00 otherwise, with 02:00-03:00 on 2027-03-28 skipped.
fn central_europe(local: NaiveDateTime) -> Option<FixedOffset> {
    let gap_start = NaiveDate::from_ymd_opt(2027, 3, 28).unwrap().and_hms_opt(2, 0, 0).unwrap();
    if local >= gap_start && local < gap_start + TimeDelta::hours(1) {
        return None;
    }
    let hours = if (4..=10).contains(&local.month()) { 2 } else { 1 };
    FixedOffset::east_opt(hours * 3600)
}

#[test]
fn offset_follows_booked_date_not_today() {
    let winter = BookingRequest::prepare("abc123", &draft("2027-01-15", "14:00", "2"), &central_europe).unwrap();
    assert_eq!(winter.start_time.to_rfc3339(), "2027-01-15T14:00:00+01:00");
    assert_eq!(winter.end_time.to_rfc3339(), "2027-01-15T16:00:00+01:00");

    let summer = BookingRequest::prepare("abc123", &draft("2027-07-15", "14:00", "2"), &central_europe).unwrap();
    assert_eq!(summer.start_time.to_rfc3339(), "2027-07-15T14:00:00+02:00");
}

#[test]
fn skipped_local_time_is_rejected() {
    let err = BookingRequest::prepare("abc123", &draft("2027-03-28", "02:30", "1"), &central_europe).unwrap_err();
    assert_eq!(err, DraftError::SkippedTime);
}

#[test]
fn prepare_refuses_invalid_draft() {
    let err = BookingRequest::prepare("l", &draft("2024-06-01", "14:00", "0"), &utc()).unwrap_err();
    assert_eq!(err, DraftError::NonPositiveDuration);
}

// =============================================================
// Wire format
// =============================================================

#[test]
fn booking_request_serializes_camel_case_rfc3339() {
    let request = BookingRequest::prepare("abc123", &draft("2024-06-01", "14:00", "2"), &utc()).unwrap();
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "listingId": "abc123",
            "startTime": "2024-06-01T14:00:00+00:00",
            "endTime": "2024-06-01T16:00:00+00:00"
        })
    );
}

#[test]
fn confirmation_keeps_the_whole_body() {
    let json = r#"{"_id":"b-1","status":"pending","listingId":"abc123","price":80}"#;
    let confirmation: BookingConfirmation = serde_json::from_str(json).unwrap();
    assert_eq!(confirmation.id.as_deref(), Some("b-1"));
    assert_eq!(confirmation.status(), Some("pending"));
    assert_eq!(confirmation.body["price"], 80);

    let echoed = serde_json::to_value(&confirmation).unwrap();
    assert_eq!(echoed, serde_json::from_str::<serde_json::Value>(json).unwrap());
}

#[test]
fn confirmation_without_id_serializes_without_one() {
    let confirmation: BookingConfirmation = serde_json::from_str(r#"{"ok":true}"#).unwrap();
    assert_eq!(confirmation.id, None);
    assert_eq!(serde_json::to_value(&confirmation).unwrap(), serde_json::json!({"ok": true}));
}

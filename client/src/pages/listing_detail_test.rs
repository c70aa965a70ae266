use super::*;

#[test]
fn anonymous_visitors_are_sent_to_sign_in() {
    assert_eq!(book_now_action(false), BookNow::SignIn);
}

#[test]
fn signed_in_users_get_the_dialog() {
    assert_eq!(book_now_action(true), BookNow::OpenDialog);
}

#[test]
fn booking_failure_prefers_server_message() {
    let err = ApiError::Status {
        status: 409,
        message: "Slot already taken".to_owned(),
    };
    assert_eq!(booking_failure_message(&err), "Slot already taken");
}

#[test]
fn booking_failure_falls_back_to_generic_message() {
    let blank = ApiError::Status {
        status: 500,
        message: "  ".to_owned(),
    };
    assert_eq!(booking_failure_message(&blank), BOOKING_FAILED);
    assert_eq!(
        booking_failure_message(&ApiError::Transport("offline".to_owned())),
        "Failed to create booking. Please try again."
    );
}

#[test]
fn removed_listing_message_reaches_the_dialog() {
    let err = ApiError::from_write_status(404, r#"{"message":"Listing has been removed"}"#);
    assert_eq!(booking_failure_message(&err), "Listing has been removed");
}

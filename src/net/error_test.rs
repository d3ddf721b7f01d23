use super::*;

#[test]
fn server_message_reads_status_and_rejection() {
    let status = ApiError::Status { status: 400, message: Some("email taken".to_owned()) };
    assert_eq!(status.server_message(), Some("email taken"));
    assert_eq!(ApiError::Rejected("no tokens".to_owned()).server_message(), Some("no tokens"));
    assert_eq!(ApiError::Network("offline".to_owned()).server_message(), None);
}

#[test]
fn gateway_reported_errors_are_flagged() {
    assert!(ApiError::Unauthorized.is_reported());
    assert!(ApiError::Network("x".to_owned()).is_reported());
    assert!(!ApiError::Rejected("x".to_owned()).is_reported());
    assert!(!ApiError::Busy.is_reported());
}

#[test]
fn status_error_displays_code() {
    let err = ApiError::Status { status: 500, message: None };
    assert_eq!(err.to_string(), "request failed with status 500");
}

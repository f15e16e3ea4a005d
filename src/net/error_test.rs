use super::*;

#[test]
fn unique_violation_matches_postgres_code() {
    let err = ApiError::Http {
        status: 409,
        code: Some("23505".to_owned()),
        message: "duplicate key value violates unique constraint".to_owned(),
    };
    assert!(err.is_unique_violation());
}

#[test]
fn other_http_errors_are_not_unique_violations() {
    let err = ApiError::Http {
        status: 409,
        code: Some("23503".to_owned()),
        message: "foreign key violation".to_owned(),
    };
    assert!(!err.is_unique_violation());

    let err = ApiError::Http {
        status: 500,
        code: None,
        message: "internal error".to_owned(),
    };
    assert!(!err.is_unique_violation());
}

#[test]
fn network_errors_are_not_unique_violations() {
    assert!(!ApiError::Network("offline".to_owned()).is_unique_violation());
}

#[test]
fn display_uses_backend_message_for_http_errors() {
    let err = ApiError::Http {
        status: 400,
        code: None,
        message: "invalid login credentials".to_owned(),
    };
    assert_eq!(err.to_string(), "invalid login credentials");
}

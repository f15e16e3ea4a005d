use super::*;
use crate::net::types::AuthUser;

fn grant(expires_at: Option<i64>) -> TokenGrant {
    TokenGrant {
        access_token: "at".to_owned(),
        refresh_token: "rt".to_owned(),
        expires_in: 3600,
        expires_at,
        user: AuthUser {
            id: "u1".to_owned(),
            email: Some("a@b.com".to_owned()),
        },
    }
}

// ============================================================
// Expiry math
// ============================================================

#[test]
fn session_from_grant_prefers_absolute_expiry() {
    let session = session_from_grant(grant(Some(2_000_000)), 1_000_000);
    assert_eq!(session.expires_at, 2_000_000);
}

#[test]
fn session_from_grant_computes_expiry_from_lifetime() {
    let session = session_from_grant(grant(None), 1_000_000);
    assert_eq!(session.expires_at, 1_003_600);
}

#[test]
fn session_is_fresh_respects_refresh_margin() {
    let session = session_from_grant(grant(Some(1_000_000)), 0);
    // Plenty of time left.
    assert!(session_is_fresh(&session, 1_000_000 - REFRESH_MARGIN_SECS - 1));
    // Inside the margin: treat as stale even though not yet expired.
    assert!(!session_is_fresh(&session, 1_000_000 - REFRESH_MARGIN_SECS));
    // Fully expired.
    assert!(!session_is_fresh(&session, 1_000_001));
}

#[test]
fn refresh_delay_counts_down_to_the_margin() {
    assert_eq!(refresh_delay_secs(1_000_000, 1_000_000 - 3600), 3600 - u64::try_from(REFRESH_MARGIN_SECS).unwrap());
}

#[test]
fn refresh_delay_is_zero_for_stale_sessions() {
    assert_eq!(refresh_delay_secs(1_000_000, 1_000_000), 0);
    assert_eq!(refresh_delay_secs(1_000_000, 2_000_000), 0);
}

// ============================================================
// Response parsing
// ============================================================

#[test]
fn signup_with_grant_body_signs_in_immediately() {
    let body = serde_json::json!({
        "access_token": "at",
        "refresh_token": "rt",
        "expires_in": 3600,
        "user": { "id": "u1", "email": "a@b.com" }
    });
    match parse_signup_outcome(body, 100).unwrap() {
        SignUpOutcome::SignedIn(session) => {
            assert_eq!(session.expires_at, 3700);
            assert_eq!(session.user.id, "u1");
        }
        SignUpOutcome::ConfirmationRequired => panic!("expected immediate session"),
    }
}

#[test]
fn signup_with_bare_user_body_requires_confirmation() {
    let body = serde_json::json!({
        "id": "u1",
        "email": "a@b.com",
        "confirmation_sent_at": "2026-08-01T10:00:00Z"
    });
    assert_eq!(
        parse_signup_outcome(body, 100).unwrap(),
        SignUpOutcome::ConfirmationRequired
    );
}

#[test]
fn auth_error_prefers_error_description() {
    let err = auth_error(400, r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#);
    assert_eq!(
        err,
        ApiError::Http {
            status: 400,
            code: None,
            message: "Invalid login credentials".to_owned()
        }
    );
}

#[test]
fn auth_error_falls_back_to_msg_field() {
    let err = auth_error(400, r#"{"code":400,"error_code":"invalid_credentials","msg":"Invalid login credentials"}"#);
    match err {
        ApiError::Http { message, .. } => assert_eq!(message, "Invalid login credentials"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn auth_error_formats_status_when_body_is_opaque() {
    let err = auth_error(502, "<html>bad gateway</html>");
    match err {
        ApiError::Http { message, .. } => assert_eq!(message, "authentication failed: 502"),
        other => panic!("unexpected error: {other:?}"),
    }
}

use super::*;
use crate::net::types::AuthUser;

fn session(email: &str, refresh_token: &str) -> Session {
    Session {
        access_token: "at".to_owned(),
        refresh_token: refresh_token.to_owned(),
        expires_at: 2_000_000_000,
        user: AuthUser {
            id: "u1".to_owned(),
            email: Some(email.to_owned()),
        },
    }
}

#[test]
fn initial_state_is_loading_with_no_session() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(state.session.is_none());
}

#[test]
fn every_event_resolves_the_loading_flag() {
    let events = [
        SessionEvent::Restored(session("a@b.com", "r1")),
        SessionEvent::RestoreFailed,
        SessionEvent::SignedIn(session("a@b.com", "r1")),
        SessionEvent::SignedOut,
        SessionEvent::Refreshed(session("a@b.com", "r2")),
        SessionEvent::Expired,
    ];
    for event in events {
        let mut state = SessionState::default();
        apply_session_event(&mut state, event);
        assert!(!state.loading);
    }
}

#[test]
fn sign_in_exposes_the_signed_in_identity() {
    let mut state = SessionState::default();
    apply_session_event(&mut state, SessionEvent::SignedIn(session("a@b.com", "r1")));
    let email = state.session.and_then(|s| s.user.email);
    assert_eq!(email.as_deref(), Some("a@b.com"));
}

#[test]
fn restore_failure_lands_signed_out() {
    let mut state = SessionState::default();
    apply_session_event(&mut state, SessionEvent::RestoreFailed);
    assert!(!state.loading);
    assert!(state.session.is_none());
}

#[test]
fn sign_out_clears_an_active_session() {
    let mut state = SessionState::default();
    apply_session_event(&mut state, SessionEvent::SignedIn(session("a@b.com", "r1")));
    apply_session_event(&mut state, SessionEvent::SignedOut);
    assert!(state.session.is_none());
}

#[test]
fn expiry_clears_an_active_session() {
    let mut state = SessionState::default();
    apply_session_event(&mut state, SessionEvent::Restored(session("a@b.com", "r1")));
    apply_session_event(&mut state, SessionEvent::Expired);
    assert!(state.session.is_none());
}

#[test]
fn refresh_replaces_the_grant_in_place() {
    let mut state = SessionState::default();
    apply_session_event(&mut state, SessionEvent::SignedIn(session("a@b.com", "r1")));
    apply_session_event(&mut state, SessionEvent::Refreshed(session("a@b.com", "r2")));
    let token = state.session.map(|s| s.refresh_token);
    assert_eq!(token.as_deref(), Some("r2"));
}

#[test]
fn latest_event_wins_across_overlapping_sign_ins() {
    // Two submissions racing: whichever completes last defines the state.
    let mut state = SessionState::default();
    apply_session_event(&mut state, SessionEvent::SignedIn(session("first@b.com", "r1")));
    apply_session_event(&mut state, SessionEvent::SignedIn(session("second@b.com", "r2")));
    let email = state.session.and_then(|s| s.user.email);
    assert_eq!(email.as_deref(), Some("second@b.com"));
}

#[test]
fn session_is_present_iff_last_event_granted_one() {
    let mut state = SessionState::default();

    apply_session_event(&mut state, SessionEvent::RestoreFailed);
    assert!(state.session.is_none());

    apply_session_event(&mut state, SessionEvent::SignedIn(session("a@b.com", "r1")));
    assert!(state.session.is_some());

    apply_session_event(&mut state, SessionEvent::Expired);
    assert!(state.session.is_none());

    apply_session_event(&mut state, SessionEvent::Restored(session("a@b.com", "r3")));
    assert!(state.session.is_some());
}

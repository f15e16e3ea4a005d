//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single source of truth for "who is signed in right now". Route guards
//! and user-aware components read it through context; mutations flow
//! through [`apply_session_event`] so every path that changes the session
//! also resolves the loading flag. The signal graph is the subscription
//! mechanism: any store change re-renders dependents.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::auth::{self, SignUpOutcome};
use crate::net::types::Session;
use crate::util::guard::{SessionPhase, session_phase};

/// Authentication state: the current session plus the initial-check flag.
///
/// `loading` starts true and flips to false exactly once, when the first
/// session event lands. No routing decision is made while it is true.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { session: None, loading: true }
    }
}

/// Everything that can change the session. Applying any event resolves the
/// loading flag; the latest event always wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// A persisted session was restored at startup.
    Restored(Session),
    /// Startup found no usable session, or restoring one failed. Failure is
    /// treated exactly like "signed out" so the public views stay reachable.
    RestoreFailed,
    /// The user signed in interactively.
    SignedIn(Session),
    /// The user signed out, or local state was cleared after a failed
    /// revocation call.
    SignedOut,
    /// The background task obtained a fresh grant.
    Refreshed(Session),
    /// The background task could not refresh; the session is gone.
    Expired,
}

/// Reducer for [`SessionState`]. Total over all events; applying one never
/// leaves the state inconsistent, so overlapping completions are safe.
pub fn apply_session_event(state: &mut SessionState, event: SessionEvent) {
    match event {
        SessionEvent::Restored(session)
        | SessionEvent::SignedIn(session)
        | SessionEvent::Refreshed(session) => state.session = Some(session),
        SessionEvent::RestoreFailed | SessionEvent::SignedOut | SessionEvent::Expired => {
            state.session = None;
        }
    }
    state.loading = false;
}

/// Owned session store provided via context at the application root.
///
/// Copy-able handle over one reactive signal; cloning the handle never
/// forks the state.
#[derive(Clone, Copy)]
pub struct SessionStore(RwSignal<SessionState>);

impl SessionStore {
    pub fn new() -> Self {
        Self(RwSignal::new(SessionState::default()))
    }

    /// Reactive read of the full state.
    pub fn get(self) -> SessionState {
        self.0.get()
    }

    /// Reactive read of the derived guard phase.
    pub fn phase(self) -> SessionPhase {
        self.0.with(session_phase)
    }

    /// Reactive read of the signed-in email, if any.
    pub fn user_email(self) -> Option<String> {
        self.0
            .with(|state| state.session.as_ref().and_then(|s| s.user.email.clone()))
    }

    /// Untracked read of the current session, for event handlers that need
    /// the access token or user id at action time.
    pub fn current_session(self) -> Option<Session> {
        self.0.with_untracked(|state| state.session.clone())
    }

    /// Apply one event through the reducer.
    pub fn apply(self, event: SessionEvent) {
        self.0.update(|state| apply_session_event(state, event));
    }

    /// Resolve the initial session: restore a persisted grant, refreshing a
    /// stale one through the provider first. Any failure lands as
    /// [`SessionEvent::RestoreFailed`] and the app proceeds signed out.
    /// Runs once at mount.
    pub async fn initialize(self) {
        let Some(session) = auth::load_persisted_session() else {
            self.apply(SessionEvent::RestoreFailed);
            return;
        };
        if auth::session_is_fresh(&session, auth::current_unix_secs()) {
            self.apply(SessionEvent::Restored(session.clone()));
            self.schedule_refresh(session);
            return;
        }
        match auth::refresh_session(&session.refresh_token).await {
            Ok(refreshed) => {
                auth::persist_session(&refreshed);
                self.apply(SessionEvent::Restored(refreshed.clone()));
                self.schedule_refresh(refreshed);
            }
            Err(err) => {
                log::warn!("session restore failed, continuing signed out: {err}");
                auth::clear_persisted_session();
                self.apply(SessionEvent::RestoreFailed);
            }
        }
    }

    /// Sign in with email + password. On success the session is persisted
    /// and applied; on failure the provider's message is returned for the
    /// form to display. No retry, no dedup: the form disables its submit
    /// while a call is in flight.
    ///
    /// # Errors
    ///
    /// Returns the user-presentable rejection message.
    pub async fn sign_in(self, email: &str, password: &str) -> Result<(), String> {
        match auth::sign_in_with_password(email, password).await {
            Ok(session) => {
                auth::persist_session(&session);
                self.apply(SessionEvent::SignedIn(session.clone()));
                self.schedule_refresh(session);
                Ok(())
            }
            Err(err) => Err(err.to_string()),
        }
    }

    /// Register a new account. Auto-confirming projects yield an immediate
    /// session, which is applied like a sign-in; otherwise the caller shows
    /// a "check your email" notice.
    ///
    /// # Errors
    ///
    /// Returns the user-presentable rejection message.
    pub async fn sign_up(self, email: &str, password: &str) -> Result<SignUpOutcome, String> {
        match auth::sign_up(email, password).await {
            Ok(SignUpOutcome::SignedIn(session)) => {
                auth::persist_session(&session);
                self.apply(SessionEvent::SignedIn(session.clone()));
                self.schedule_refresh(session.clone());
                Ok(SignUpOutcome::SignedIn(session))
            }
            Ok(SignUpOutcome::ConfirmationRequired) => Ok(SignUpOutcome::ConfirmationRequired),
            Err(err) => Err(err.to_string()),
        }
    }

    /// Sign out. The revocation call is best-effort: its failure is logged
    /// and ignored, and local state is cleared unconditionally so the UI
    /// can never stay stuck looking signed in.
    pub async fn sign_out(self) {
        if let Some(session) = self.current_session() {
            if let Err(err) = auth::sign_out(&session.access_token).await {
                log::warn!("sign-out request failed, clearing local session anyway: {err}");
            }
        }
        auth::clear_persisted_session();
        self.apply(SessionEvent::SignedOut);
    }

    /// Keep `session`'s grant chain alive: sleep until just before expiry,
    /// refresh, repeat. A loop aborts silently once its grant is no longer
    /// the current one, so the latest sign-in owns the only live loop.
    #[cfg(feature = "csr")]
    fn schedule_refresh(self, session: Session) {
        leptos::task::spawn_local(async move {
            let mut session = session;
            loop {
                let delay = auth::refresh_delay_secs(session.expires_at, auth::current_unix_secs());
                gloo_timers::future::sleep(std::time::Duration::from_secs(delay)).await;

                let still_current = self.0.with_untracked(|state| {
                    state
                        .session
                        .as_ref()
                        .is_some_and(|current| current.refresh_token == session.refresh_token)
                });
                if !still_current {
                    return;
                }

                match auth::refresh_session(&session.refresh_token).await {
                    Ok(refreshed) => {
                        auth::persist_session(&refreshed);
                        self.apply(SessionEvent::Refreshed(refreshed.clone()));
                        session = refreshed;
                    }
                    Err(err) => {
                        log::warn!("session refresh failed, signing out: {err}");
                        auth::clear_persisted_session();
                        self.apply(SessionEvent::Expired);
                        return;
                    }
                }
            }
        });
    }

    #[cfg(not(feature = "csr"))]
    fn schedule_refresh(self, session: Session) {
        let _ = session;
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

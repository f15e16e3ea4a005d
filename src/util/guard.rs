//! Route-guard decision logic.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed page is wrapped by a guard component; those components map
//! the decisions computed here onto views and redirects. Keeping the
//! decisions pure keeps the loading/authenticated/unauthenticated behavior
//! testable without a browser.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::SessionState;

/// Route users land on when a protected page rejects them.
pub const SIGN_IN_ROUTE: &str = "/auth";

/// Route signed-in users land on when visiting a public-only page.
pub const HOME_ROUTE: &str = "/dashboard";

/// Where the session check currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Initial session restore has not resolved yet.
    Loading,
    Authenticated,
    Unauthenticated,
}

/// What a guard should do with its wrapped page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session check pending: show a neutral spinner, never a redirect.
    Wait,
    /// Render the wrapped page.
    Render,
    /// Navigate to `to`, replacing the current history entry so Back does
    /// not bounce through the guarded URL.
    Redirect { to: &'static str },
}

/// Derive the phase from session state. Derived on every read; there is no
/// separate state machine to drift out of sync.
pub fn session_phase(state: &SessionState) -> SessionPhase {
    if state.loading {
        SessionPhase::Loading
    } else if state.session.is_some() {
        SessionPhase::Authenticated
    } else {
        SessionPhase::Unauthenticated
    }
}

/// Decision for pages that require a signed-in user.
pub fn protected_decision(phase: SessionPhase) -> RouteDecision {
    match phase {
        SessionPhase::Loading => RouteDecision::Wait,
        SessionPhase::Authenticated => RouteDecision::Render,
        SessionPhase::Unauthenticated => RouteDecision::Redirect { to: SIGN_IN_ROUTE },
    }
}

/// Decision for pages only meaningful to signed-out visitors, like the
/// sign-in screen itself.
pub fn public_only_decision(phase: SessionPhase) -> RouteDecision {
    match phase {
        SessionPhase::Loading => RouteDecision::Wait,
        SessionPhase::Authenticated => RouteDecision::Redirect { to: HOME_ROUTE },
        SessionPhase::Unauthenticated => RouteDecision::Render,
    }
}

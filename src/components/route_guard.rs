//! Session-aware route wrappers.
//!
//! DESIGN
//! ======
//! Guarding is split in two: [`crate::util::guard`] decides what a route
//! should do for a given session phase, and these components execute that
//! decision. Redirects run in an effect so navigation never fires during
//! render, and they replace the history entry to keep Back usable.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::spinner::Spinner;
use crate::state::session::SessionStore;
use crate::util::guard::{RouteDecision, SessionPhase, protected_decision, public_only_decision};

/// Renders its children only for signed-in users. While the initial session
/// check runs it shows a spinner; once the phase settles signed-out it
/// replace-redirects to the sign-in page.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    guarded(children, protected_decision)
}

/// Inverse guard for the sign-in page: signed-in users are replace-redirected
/// to the dashboard instead of seeing the form again.
#[component]
pub fn PublicOnlyRoute(children: ChildrenFn) -> impl IntoView {
    guarded(children, public_only_decision)
}

fn guarded(children: ChildrenFn, decide: fn(SessionPhase) -> RouteDecision) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    Effect::new(move || {
        if let RouteDecision::Redirect { to } = decide(store.phase()) {
            navigate(to, NavigateOptions { replace: true, ..Default::default() });
        }
    });

    view! {
        {move || match decide(store.phase()) {
            RouteDecision::Wait => view! { <Spinner/> }.into_any(),
            RouteDecision::Render => children().into_any(),
            // The effect above is navigating; render nothing meanwhile.
            RouteDecision::Redirect { .. } => ().into_any(),
        }}
    }
}

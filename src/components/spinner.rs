//! Centered loading indicator.

use leptos::prelude::*;

/// Full-height spinner shown while a page waits on the session check or a
/// data fetch.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner-wrap">
            <div class="spinner" role="status" aria-label="A carregar"></div>
        </div>
    }
}

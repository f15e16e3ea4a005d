//! Stub page for sections that are routed but not yet built out.

use leptos::prelude::*;

#[component]
pub fn PlaceholderPage(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="page">
            <h1>{title}</h1>
            <p class="page__subtitle">{description}</p>
        </div>
    }
}

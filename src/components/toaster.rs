//! Toast stack rendered at the application root.

use leptos::prelude::*;
use uuid::Uuid;

use crate::state::toasts::{ToastVariant, ToastsState};

/// How long a toast stays visible before dismissing itself.
pub const TOAST_DURATION_SECS: u64 = 5;

/// Queue a success toast.
pub fn toast_success(toasts: RwSignal<ToastsState>, title: &str, message: &str) {
    show_toast(toasts, title, message, ToastVariant::Success);
}

/// Queue a destructive (error) toast.
pub fn toast_error(toasts: RwSignal<ToastsState>, title: &str, message: &str) {
    show_toast(toasts, title, message, ToastVariant::Destructive);
}

fn show_toast(toasts: RwSignal<ToastsState>, title: &str, message: &str, variant: ToastVariant) {
    let mut id = Uuid::nil();
    toasts.update(|state| id = state.push(title, message, variant));
    schedule_dismiss(toasts, id);
}

#[cfg(feature = "csr")]
fn schedule_dismiss(toasts: RwSignal<ToastsState>, id: Uuid) {
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_secs(TOAST_DURATION_SECS)).await;
        toasts.update(|state| state.dismiss(id));
    });
}

#[cfg(not(feature = "csr"))]
fn schedule_dismiss(toasts: RwSignal<ToastsState>, id: Uuid) {
    let _ = (toasts, id);
}

/// Renders the toast queue. Mounted once, above the router.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastsState>>();

    view! {
        <div class="toaster">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let class = match toast.variant {
                            ToastVariant::Success => "toast",
                            ToastVariant::Destructive => "toast toast--destructive",
                        };
                        let id = toast.id;
                        view! {
                            <div class=class>
                                <div class="toast__body">
                                    <p class="toast__title">{toast.title}</p>
                                    <p class="toast__message">{toast.message}</p>
                                </div>
                                <button
                                    class="toast__close"
                                    aria-label="Fechar"
                                    on:click=move |_| toasts.update(|state| state.dismiss(id))
                                >
                                    "\u{00d7}"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

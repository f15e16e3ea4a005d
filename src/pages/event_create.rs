//! Event creation form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toaster::{toast_error, toast_success};
use crate::net::rest;
use crate::pages::event_form::{EventFormFields, EventFormState, build_event_insert, validate_event_draft};
use crate::state::session::SessionStore;
use crate::state::toasts::ToastsState;
use crate::util::clock;

#[component]
pub fn CreateEventPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let toasts = expect_context::<RwSignal<ToastsState>>();
    let navigate = use_navigate();

    let state = EventFormState::new();
    let form_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let draft = state.draft();
        if let Err(message) = validate_event_draft(&draft, true, &clock::today_iso_date()) {
            form_error.set(message.to_owned());
            return;
        }
        form_error.set(String::new());
        busy.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let Some(session) = store.current_session() else {
                busy.set(false);
                return;
            };
            let insert = build_event_insert(&draft, &session.user.id);
            match rest::insert_event(&session.access_token, &insert).await {
                Ok(()) => {
                    toast_success(toasts, "Sucesso", "Evento criado com sucesso!");
                    navigate("/events", NavigateOptions::default());
                }
                Err(err) => {
                    log::error!("failed to create event: {err}");
                    toast_error(
                        toasts,
                        "Erro",
                        "Não foi possível criar o evento. Tente novamente.",
                    );
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="page page--narrow">
            <a class="btn btn--ghost" href="/events">
                "\u{2190} Voltar para Eventos"
            </a>
            <div class="page__header">
                <div>
                    <h1>"Criar Novo Evento"</h1>
                    <p class="page__subtitle">"Preencha os detalhes do seu evento"</p>
                </div>
            </div>
            <div class="card">
                <h2>"Informações do Evento"</h2>
                <form class="form" on:submit=on_submit>
                    <EventFormFields state=state show_status=false show_application_details=true/>
                    <Show when=move || !form_error.get().is_empty()>
                        <p class="form__error">{move || form_error.get()}</p>
                    </Show>
                    <div class="form__actions">
                        <a class="btn" href="/events">
                            "Cancelar"
                        </a>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Criando..." } else { "Criar Evento" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

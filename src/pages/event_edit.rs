//! Event edit form.
//!
//! The row is fetched with an ownership filter, so editing someone else's
//! event (or a missing id) looks the same as not found and bounces back to
//! the listing.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::spinner::Spinner;
use crate::components::toaster::{toast_error, toast_success};
use crate::net::rest;
use crate::pages::event_form::{EventFormFields, EventFormState, build_event_update, validate_event_draft};
use crate::state::session::SessionStore;
use crate::state::toasts::ToastsState;
use crate::util::clock;

#[component]
pub fn EditEventPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let toasts = expect_context::<RwSignal<ToastsState>>();
    let navigate = use_navigate();
    let params = use_params_map();

    let state = EventFormState::new();
    let form_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let loaded = RwSignal::new(false);

    let event_fetch = LocalResource::new(move || {
        let id = params.with(|map| map.get("id").unwrap_or_default());
        async move {
            let Some(session) = store.current_session() else {
                return Err(());
            };
            rest::fetch_owned_event(&session.access_token, &id, &session.user.id)
                .await
                .map_err(|err| log::error!("failed to load event {id}: {err}"))
        }
    });

    // Prefill once the fetch lands; missing rows and fetch errors both leave
    // the page with a toast explaining which it was.
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            if loaded.get() {
                return;
            }
            match event_fetch.get() {
                Some(Ok(Some(event))) => {
                    state.load(&event);
                    loaded.set(true);
                }
                Some(Ok(None)) => {
                    toast_error(
                        toasts,
                        "Erro",
                        "Evento não encontrado ou você não tem permissão para editá-lo.",
                    );
                    navigate("/events", NavigateOptions::default());
                }
                Some(Err(())) => {
                    toast_error(toasts, "Erro", "Não foi possível carregar o evento.");
                    navigate("/events", NavigateOptions::default());
                }
                None => {}
            }
        });
    }

    let submit = {
        let navigate = navigate.clone();
        Callback::new(move |()| {
            if busy.get_untracked() {
                return;
            }
            let draft = state.draft();
            if let Err(message) = validate_event_draft(&draft, false, &clock::today_iso_date()) {
                form_error.set(message.to_owned());
                return;
            }
            form_error.set(String::new());
            busy.set(true);

            let id = params.with_untracked(|map| map.get("id").unwrap_or_default());
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let Some(session) = store.current_session() else {
                    busy.set(false);
                    return;
                };
                let update = build_event_update(&draft, clock::now_iso_timestamp());
                match rest::update_event(&session.access_token, &id, &session.user.id, &update)
                    .await
                {
                    Ok(()) => {
                        toast_success(toasts, "Sucesso", "Evento atualizado com sucesso!");
                        navigate("/events", NavigateOptions::default());
                    }
                    Err(err) => {
                        log::error!("failed to update event {id}: {err}");
                        toast_error(
                            toasts,
                            "Erro",
                            "Não foi possível atualizar o evento. Tente novamente.",
                        );
                    }
                }
                busy.set(false);
            });
        })
    };

    view! {
        <div class="page page--narrow">
            <a class="btn btn--ghost" href="/events">
                "\u{2190} Voltar para Eventos"
            </a>
            <div class="page__header">
                <div>
                    <h1>"Editar Evento"</h1>
                    <p class="page__subtitle">"Atualize os detalhes do seu evento"</p>
                </div>
            </div>
            <Show when=move || loaded.get() fallback=move || view! { <Spinner/> }>
                <div class="card">
                    <h2>"Informações do Evento"</h2>
                    <form
                        class="form"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            submit.run(());
                        }
                    >
                        <EventFormFields
                            state=state
                            show_status=true
                            show_application_details=false
                        />
                        <Show when=move || !form_error.get().is_empty()>
                            <p class="form__error">{move || form_error.get()}</p>
                        </Show>
                        <div class="form__actions">
                            <a class="btn" href="/events">
                                "Cancelar"
                            </a>
                            <button
                                class="btn btn--primary"
                                type="submit"
                                disabled=move || busy.get()
                            >
                                {move || if busy.get() { "Atualizando..." } else { "Atualizar Evento" }}
                            </button>
                        </div>
                    </form>
                </div>
            </Show>
        </div>
    }
}

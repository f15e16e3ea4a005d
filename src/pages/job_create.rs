//! Job creation form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toaster::{toast_error, toast_success};
use crate::net::rest;
use crate::pages::job_form::{JobFormFields, JobFormState, build_job_insert, validate_job_draft};
use crate::state::session::SessionStore;
use crate::state::toasts::ToastsState;

#[component]
pub fn CreateJobPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let toasts = expect_context::<RwSignal<ToastsState>>();
    let navigate = use_navigate();

    let state = JobFormState::new();
    let form_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let draft = state.draft();
        if let Err(message) = validate_job_draft(&draft) {
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
            let insert = build_job_insert(&draft, &session.user.id);
            match rest::insert_job(&session.access_token, &insert).await {
                Ok(()) => {
                    toast_success(toasts, "Sucesso", "Vaga criada com sucesso");
                    navigate("/jobs", NavigateOptions::default());
                }
                Err(err) => {
                    log::error!("failed to create job: {err}");
                    toast_error(toasts, "Erro", "Não foi possível criar a vaga");
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="page">
            <a class="btn btn--ghost" href="/jobs">
                "\u{2190} Voltar"
            </a>
            <div class="page__header">
                <div>
                    <h1>"Criar Nova Vaga"</h1>
                    <p class="page__subtitle">"Preencha as informações da vaga"</p>
                </div>
            </div>
            <form class="form form--columns" on:submit=on_submit>
                <JobFormFields state=state/>
                <Show when=move || !form_error.get().is_empty()>
                    <p class="form__error">{move || form_error.get()}</p>
                </Show>
                <div class="form__actions">
                    <a class="btn" href="/jobs">
                        "Cancelar"
                    </a>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Criando..." } else { "Criar Vaga" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

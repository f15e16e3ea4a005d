//! Job edit form.
//!
//! Jobs are listed publicly, so the row fetch is unfiltered and ownership
//! is checked on the loaded row before the form shows.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::spinner::Spinner;
use crate::components::toaster::{toast_error, toast_success};
use crate::net::rest;
use crate::pages::job_form::{JobFormFields, JobFormState, build_job_update, validate_job_draft};
use crate::state::session::SessionStore;
use crate::state::toasts::ToastsState;

#[component]
pub fn EditJobPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let toasts = expect_context::<RwSignal<ToastsState>>();
    let navigate = use_navigate();
    let params = use_params_map();

    let state = JobFormState::new();
    let form_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let loaded = RwSignal::new(false);

    let job_fetch = LocalResource::new(move || {
        let id = params.with(|map| map.get("id").unwrap_or_default());
        async move {
            let Some(session) = store.current_session() else {
                return Err(());
            };
            rest::fetch_job(&session.access_token, &id)
                .await
                .map_err(|err| log::error!("failed to load job {id}: {err}"))
        }
    });

    {
        let navigate = navigate.clone();
        Effect::new(move || {
            if loaded.get() {
                return;
            }
            match job_fetch.get() {
                Some(Ok(Some(job))) => {
                    let is_owner = store
                        .current_session()
                        .is_some_and(|session| session.user.id == job.user_id);
                    if is_owner {
                        state.load(&job);
                        loaded.set(true);
                    } else {
                        toast_error(
                            toasts,
                            "Erro",
                            "Você não tem permissão para editar esta vaga",
                        );
                        navigate("/jobs", NavigateOptions::default());
                    }
                }
                Some(Ok(None)) | Some(Err(())) => {
                    toast_error(toasts, "Erro", "Não foi possível carregar a vaga");
                    navigate("/jobs", NavigateOptions::default());
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
            if let Err(message) = validate_job_draft(&draft) {
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
                let update = build_job_update(&draft);
                match rest::update_job(&session.access_token, &id, &update).await {
                    Ok(()) => {
                        toast_success(toasts, "Sucesso", "Vaga atualizada com sucesso");
                        navigate("/jobs", NavigateOptions::default());
                    }
                    Err(err) => {
                        log::error!("failed to update job {id}: {err}");
                        toast_error(toasts, "Erro", "Não foi possível atualizar a vaga");
                    }
                }
                busy.set(false);
            });
        })
    };

    view! {
        <div class="page">
            <a class="btn btn--ghost" href="/jobs">
                "\u{2190} Voltar"
            </a>
            <div class="page__header">
                <div>
                    <h1>"Editar Vaga"</h1>
                    <p class="page__subtitle">"Atualize as informações da vaga"</p>
                </div>
            </div>
            <Show when=move || loaded.get() fallback=move || view! { <Spinner/> }>
                <form
                    class="form form--columns"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <JobFormFields state=state/>
                    <Show when=move || !form_error.get().is_empty()>
                        <p class="form__error">{move || form_error.get()}</p>
                    </Show>
                    <div class="form__actions">
                        <a class="btn" href="/jobs">
                            "Cancelar"
                        </a>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Atualizando..." } else { "Atualizar Vaga" }}
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}

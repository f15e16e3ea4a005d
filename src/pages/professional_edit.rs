//! Professional profile edit form.
//!
//! The row is fetched with an ownership filter, so editing someone else's
//! profile (or a missing id) looks the same as not found.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::spinner::Spinner;
use crate::components::toaster::{toast_error, toast_success};
use crate::net::rest;
use crate::pages::professional_form::{
    ProfessionalFormFields, ProfessionalFormState, build_professional_update,
    validate_professional_draft,
};
use crate::state::session::SessionStore;
use crate::state::toasts::ToastsState;
use crate::util::clock;

#[component]
pub fn EditProfessionalPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let toasts = expect_context::<RwSignal<ToastsState>>();
    let navigate = use_navigate();
    let params = use_params_map();

    let state = ProfessionalFormState::new();
    let form_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let loaded = RwSignal::new(false);

    let professional_fetch = LocalResource::new(move || {
        let id = params.with(|map| map.get("id").unwrap_or_default());
        async move {
            let Some(session) = store.current_session() else {
                return Err(());
            };
            rest::fetch_owned_professional(&session.access_token, &id, &session.user.id)
                .await
                .map_err(|err| log::error!("failed to load professional {id}: {err}"))
        }
    });

    {
        let navigate = navigate.clone();
        Effect::new(move || {
            if loaded.get() {
                return;
            }
            match professional_fetch.get() {
                Some(Ok(Some(professional))) => {
                    state.load(&professional);
                    loaded.set(true);
                }
                Some(Ok(None)) => {
                    toast_error(
                        toasts,
                        "Erro",
                        "Profissional não encontrado ou você não tem permissão para editá-lo.",
                    );
                    navigate("/professionals", NavigateOptions::default());
                }
                Some(Err(())) => {
                    toast_error(toasts, "Erro", "Não foi possível carregar o profissional.");
                    navigate("/professionals", NavigateOptions::default());
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
            if let Err(message) = validate_professional_draft(&draft) {
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
                let update = build_professional_update(&draft, clock::now_iso_timestamp());
                match rest::update_professional(
                    &session.access_token,
                    &id,
                    &session.user.id,
                    &update,
                )
                .await
                {
                    Ok(()) => {
                        toast_success(toasts, "Sucesso", "Profissional atualizado com sucesso!");
                        navigate("/professionals", NavigateOptions::default());
                    }
                    Err(err) => {
                        log::error!("failed to update professional {id}: {err}");
                        toast_error(
                            toasts,
                            "Erro",
                            "Falha ao atualizar profissional. Tente novamente.",
                        );
                    }
                }
                busy.set(false);
            });
        })
    };

    view! {
        <div class="page">
            <a class="btn btn--ghost" href="/professionals">
                "\u{2190} Voltar"
            </a>
            <div class="page__header">
                <div>
                    <h1>"Editar Profissional"</h1>
                    <p class="page__subtitle">
                        "Atualize as informações do seu perfil profissional"
                    </p>
                </div>
            </div>
            <Show when=move || loaded.get() fallback=move || view! { <Spinner/> }>
                <form
                    class="form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <ProfessionalFormFields state=state/>
                    <Show when=move || !form_error.get().is_empty()>
                        <p class="form__error">{move || form_error.get()}</p>
                    </Show>
                    <div class="form__actions">
                        <a class="btn" href="/professionals">
                            "Cancelar"
                        </a>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || {
                                if busy.get() { "Atualizando..." } else { "Atualizar Profissional" }
                            }}
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}

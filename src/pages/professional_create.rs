//! Professional profile creation form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toaster::{toast_error, toast_success};
use crate::net::rest;
use crate::pages::professional_form::{
    ProfessionalFormFields, ProfessionalFormState, build_professional_insert,
    validate_professional_draft,
};
use crate::state::session::SessionStore;
use crate::state::toasts::ToastsState;

#[component]
pub fn CreateProfessionalPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let toasts = expect_context::<RwSignal<ToastsState>>();
    let navigate = use_navigate();

    let state = ProfessionalFormState::new();
    let form_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
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

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let Some(session) = store.current_session() else {
                busy.set(false);
                return;
            };
            let insert = build_professional_insert(&draft, &session.user.id);
            match rest::insert_professional(&session.access_token, &insert).await {
                Ok(()) => {
                    toast_success(toasts, "Sucesso", "Profissional cadastrado com sucesso!");
                    navigate("/professionals", NavigateOptions::default());
                }
                Err(err) => {
                    log::error!("failed to create professional: {err}");
                    toast_error(
                        toasts,
                        "Erro",
                        "Falha ao cadastrar profissional. Tente novamente.",
                    );
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="page">
            <a class="btn btn--ghost" href="/professionals">
                "\u{2190} Voltar"
            </a>
            <div class="page__header">
                <div>
                    <h1>"Cadastrar Profissional"</h1>
                    <p class="page__subtitle">
                        "Preencha as informações para criar seu perfil profissional"
                    </p>
                </div>
            </div>
            <form class="form" on:submit=on_submit>
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
                            if busy.get() { "Cadastrando..." } else { "Cadastrar Profissional" }
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}

//! Account profile page.
//!
//! One row per auth user, created on first save. The avatar file is staged
//! in the file input and only uploaded when the profile is saved; the row
//! stores the resulting public URL.

use leptos::html;
use leptos::prelude::*;

use crate::components::form::TextField;
use crate::components::spinner::Spinner;
use crate::components::toaster::{toast_error, toast_success};
use crate::net::rest;
#[cfg(feature = "csr")]
use crate::net::storage;
use crate::net::types::{ProfileUpsert, Session};
use crate::state::session::SessionStore;
use crate::state::toasts::ToastsState;
use crate::util::format;
use crate::util::validate;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let toasts = expect_context::<RwSignal<ToastsState>>();

    let full_name = RwSignal::new(String::new());
    let stored_avatar = RwSignal::new(None::<String>);
    let has_profile = RwSignal::new(false);
    // Object URL of the staged file, empty when nothing is staged.
    let preview = RwSignal::new(String::new());
    let loaded = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let uploading = RwSignal::new(false);
    let avatar_input: NodeRef<html::Input> = NodeRef::new();

    let profile_fetch = LocalResource::new(move || async move {
        let Some(session) = store.current_session() else {
            return Err(());
        };
        rest::fetch_profile(&session.access_token, &session.user.id)
            .await
            .map_err(|err| log::error!("failed to load profile: {err}"))
    });

    // Prefill once the fetch lands. A fetch error still shows the form so
    // the user can save a fresh profile.
    Effect::new(move || {
        if loaded.get() {
            return;
        }
        match profile_fetch.get() {
            Some(Ok(row)) => {
                if let Some(profile) = &row {
                    full_name.set(profile.full_name.clone().unwrap_or_default());
                    stored_avatar.set(profile.avatar_url.clone());
                }
                has_profile.set(row.is_some());
                loaded.set(true);
            }
            Some(Err(())) => {
                toast_error(toasts, "Erro", "Não foi possível carregar o perfil.");
                loaded.set(true);
            }
            None => {}
        }
    });

    let on_avatar_change = move |_| {
        #[cfg(feature = "csr")]
        {
            let Some(input) = avatar_input.get() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            if let Some(message) = validate::avatar_file_error(file.size(), &file.type_()) {
                toast_error(toasts, "Erro", message);
                input.set_value("");
                preview.set(String::new());
                return;
            }
            if let Ok(url) = web_sys::Url::create_object_url_with_blob(&file) {
                preview.set(url);
            }
        }
    };

    let save = move |_| {
        if saving.get_untracked() || uploading.get_untracked() {
            return;
        }
        saving.set(true);
        leptos::task::spawn_local(async move {
            let Some(session) = store.current_session() else {
                saving.set(false);
                return;
            };
            let current = stored_avatar.get_untracked();
            let avatar_url =
                match staged_avatar_url(&session, current, avatar_input, uploading).await {
                    Ok(url) => url,
                    Err(()) => {
                        toast_error(toasts, "Erro", "Não foi possível fazer upload da imagem.");
                        saving.set(false);
                        return;
                    }
                };
            let payload = ProfileUpsert {
                user_id: session.user.id.clone(),
                full_name: validate::optional_text(&full_name.get_untracked()),
                avatar_url: avatar_url.clone(),
            };
            let result = if has_profile.get_untracked() {
                rest::update_profile(&session.access_token, &session.user.id, &payload).await
            } else {
                rest::insert_profile(&session.access_token, &payload).await
            };
            match result {
                Ok(()) => {
                    toast_success(toasts, "Sucesso", "Perfil atualizado com sucesso!");
                    has_profile.set(true);
                    stored_avatar.set(avatar_url);
                    clear_staged(avatar_input, preview);
                }
                Err(err) => {
                    log::error!("failed to save profile: {err}");
                    toast_error(toasts, "Erro", "Não foi possível salvar o perfil.");
                }
            }
            saving.set(false);
        });
    };

    view! {
        <div class="page page--narrow">
            <a class="btn btn--ghost" href="/">
                "\u{2190} Voltar"
            </a>
            <div class="page__header">
                <div>
                    <h1>"Meu Perfil"</h1>
                    <p class="page__subtitle">"Gerencie suas informações pessoais"</p>
                </div>
            </div>
            <Show when=move || loaded.get() fallback=move || view! { <Spinner/> }>
                <div class="card">
                    <h2>"Informações Pessoais"</h2>
                    <div class="profile-avatar">
                        {move || {
                            let staged = preview.get();
                            let src = if staged.is_empty() {
                                stored_avatar.get().unwrap_or_default()
                            } else {
                                staged
                            };
                            if src.is_empty() {
                                let name = full_name.get();
                                let monogram = if name.trim().is_empty() {
                                    "EU".to_owned()
                                } else {
                                    format::initials(&name)
                                };
                                view! {
                                    <div class="avatar avatar--large avatar--fallback">
                                        {monogram}
                                    </div>
                                }
                                    .into_any()
                            } else {
                                view! { <img class="avatar avatar--large" src=src alt="Avatar"/> }
                                    .into_any()
                            }
                        }}
                        <label class="profile-avatar__upload" title="Alterar foto">
                            "\u{1f4f7}"
                            <input
                                type="file"
                                accept="image/*"
                                node_ref=avatar_input
                                on:change=on_avatar_change
                            />
                        </label>
                        <Show when=move || uploading.get()>
                            <p class="profile-avatar__status">"Fazendo upload..."</p>
                        </Show>
                    </div>
                    <div class="form">
                        <label class="field">
                            "E-mail"
                            <input
                                type="email"
                                disabled=true
                                prop:value=move || {
                                    store
                                        .current_session()
                                        .and_then(|session| session.user.email)
                                        .unwrap_or_default()
                                }
                            />
                            <small>"O e-mail não pode ser alterado"</small>
                        </label>
                        <TextField
                            label="Nome Completo"
                            value=full_name
                            placeholder="Digite seu nome completo"
                        />
                        <button
                            class="btn btn--primary btn--block"
                            on:click=save
                            disabled=move || saving.get() || uploading.get()
                        >
                            {move || if saving.get() { "Salvando..." } else { "Salvar Perfil" }}
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// Upload the staged avatar, if any, and return the URL the profile row
/// should store. Without a staged file this is the current URL unchanged.
/// Replacing an avatar removes the previous object first.
async fn staged_avatar_url(
    session: &Session,
    current: Option<String>,
    input: NodeRef<html::Input>,
    uploading: RwSignal<bool>,
) -> Result<Option<String>, ()> {
    #[cfg(feature = "csr")]
    {
        let staged = input
            .get_untracked()
            .and_then(|element| element.files())
            .and_then(|files| files.get(0));
        let Some(file) = staged else {
            return Ok(current);
        };
        uploading.set(true);
        if let Some(path) = current.as_deref().and_then(storage::object_path_from_public_url) {
            storage::remove_avatar(&session.access_token, &path).await;
        }
        let object_path = storage::avatar_object_path(&session.user.id, &file.name());
        let uploaded = storage::upload_avatar(&session.access_token, &object_path, &file).await;
        uploading.set(false);
        match uploaded {
            Ok(url) => Ok(Some(url)),
            Err(err) => {
                log::error!("failed to upload avatar: {err}");
                Err(())
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, input, uploading);
        Ok(current)
    }
}

/// Drop the staged file and its preview after a successful save.
fn clear_staged(input: NodeRef<html::Input>, preview: RwSignal<String>) {
    preview.set(String::new());
    #[cfg(feature = "csr")]
    if let Some(element) = input.get_untracked() {
        element.set_value("");
    }
    #[cfg(not(feature = "csr"))]
    let _ = input;
}

//! Sign-in and registration page.

use leptos::prelude::*;

use crate::net::auth::SignUpOutcome;
use crate::state::session::SessionStore;

#[derive(Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    SignIn,
    SignUp,
}

/// Email + password form with a tab toggle between signing in and creating
/// an account. On success the session store flips to authenticated and the
/// public-only guard navigates away; this page never redirects itself.
#[component]
pub fn AuthPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();

    let mode = RwSignal::new(AuthMode::SignIn);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let select_mode = move |next: AuthMode| {
        mode.set(next);
        error.set(String::new());
        notice.set(String::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        error.set(String::new());
        notice.set(String::new());

        if email_value.is_empty() || password_value.is_empty() {
            error.set("Preencha email e palavra-passe.".to_owned());
            return;
        }
        if mode.get() == AuthMode::SignUp && password_value.chars().count() < 6 {
            error.set("A palavra-passe deve ter pelo menos 6 caracteres.".to_owned());
            return;
        }

        busy.set(true);
        leptos::task::spawn_local(async move {
            match mode.get_untracked() {
                AuthMode::SignIn => {
                    if let Err(message) = store.sign_in(&email_value, &password_value).await {
                        error.set(message);
                    }
                }
                AuthMode::SignUp => match store.sign_up(&email_value, &password_value).await {
                    Ok(SignUpOutcome::SignedIn(_)) => {}
                    Ok(SignUpOutcome::ConfirmationRequired) => {
                        notice.set("Verifique o seu email para confirmar a conta.".to_owned());
                    }
                    Err(message) => error.set(message),
                },
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"EventaJob"</h1>
                <div class="auth-tabs">
                    <button
                        class=move || {
                            if mode.get() == AuthMode::SignIn {
                                "auth-tab auth-tab--active"
                            } else {
                                "auth-tab"
                            }
                        }
                        on:click=move |_| select_mode(AuthMode::SignIn)
                    >
                        "Entrar"
                    </button>
                    <button
                        class=move || {
                            if mode.get() == AuthMode::SignUp {
                                "auth-tab auth-tab--active"
                            } else {
                                "auth-tab"
                            }
                        }
                        on:click=move |_| select_mode(AuthMode::SignUp)
                    >
                        "Criar Conta"
                    </button>
                </div>
                <form class="auth-form" on:submit=on_submit>
                    <label class="field">
                        "Email"
                        <input
                            type="email"
                            placeholder="voce@exemplo.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        "Palavra-passe"
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || match mode.get() {
                            AuthMode::SignIn => "Entrar",
                            AuthMode::SignUp => "Criar Conta",
                        }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || error.get()}</p>
                </Show>
                <Show when=move || !notice.get().is_empty()>
                    <p class="auth-message">{move || notice.get()}</p>
                </Show>
            </div>
        </div>
    }
}

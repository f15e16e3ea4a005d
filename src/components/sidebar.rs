//! Navigation sidebar for the signed-in area.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::session::SessionStore;

const NAV_ITEMS: [(&str, &str); 7] = [
    ("Dashboard", "/dashboard"),
    ("Eventos", "/events"),
    ("Profissionais", "/professionals"),
    ("Vagas", "/jobs"),
    ("Avaliações", "/reviews"),
    ("Notificações", "/notifications"),
    ("Configurações", "/settings"),
];

/// Sidebar with the main navigation links and the sign-out button. The link
/// matching the current path is highlighted.
#[component]
pub fn AppSidebar() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let pathname = use_location().pathname;

    let on_sign_out = move |_| {
        leptos::task::spawn_local(async move {
            store.sign_out().await;
        });
    };

    view! {
        <aside class="sidebar">
            <p class="sidebar__brand">"EventaJob"</p>
            <nav class="sidebar__nav">
                {NAV_ITEMS
                    .into_iter()
                    .map(|(label, route)| {
                        view! {
                            <a
                                class=move || {
                                    if pathname.get() == route {
                                        "sidebar__link sidebar__link--active"
                                    } else {
                                        "sidebar__link"
                                    }
                                }
                                href=route
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <button class="sidebar__signout" on:click=on_sign_out>
                "Sair"
            </button>
        </aside>
    }
}

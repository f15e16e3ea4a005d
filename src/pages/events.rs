//! Events listing: search, owner actions and professional applications.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::spinner::Spinner;
use crate::components::toaster::{toast_error, toast_success};
use crate::net::rest;
use crate::net::types::{Event, EventApplicationInsert, OwnProfessional};
use crate::state::session::SessionStore;
use crate::state::toasts::ToastsState;
use crate::util::filter::event_matches;
use crate::util::format;
use crate::util::validate::{optional_text, parse_money};

#[component]
pub fn EventsPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let toasts = expect_context::<RwSignal<ToastsState>>();

    let search = RwSignal::new(String::new());
    let apply_target = RwSignal::new(None::<Event>);
    let delete_target = RwSignal::new(None::<Event>);

    let events = LocalResource::new(move || async move {
        let Some(session) = store.current_session() else {
            return Vec::new();
        };
        match rest::list_events(&session.access_token).await {
            Ok(rows) => rows,
            Err(err) => {
                log::error!("failed to load events: {err}");
                toast_error(toasts, "Erro", "Não foi possível carregar os eventos.");
                Vec::new()
            }
        }
    });

    // Profiles the user can apply with. Loaded once; an empty list simply
    // hides the apply action on foreign events.
    let own_professionals = LocalResource::new(move || async move {
        let Some(session) = store.current_session() else {
            return Vec::new();
        };
        match rest::list_own_professionals(&session.access_token, &session.user.id).await {
            Ok(rows) => rows,
            Err(err) => {
                log::error!("failed to load own professionals: {err}");
                Vec::new()
            }
        }
    });

    let on_apply = Callback::new(move |event: Event| apply_target.set(Some(event)));
    let on_delete = Callback::new(move |event: Event| delete_target.set(Some(event)));

    let confirm_delete = Callback::new(move |()| {
        let Some(event) = delete_target.get_untracked() else {
            return;
        };
        delete_target.set(None);
        leptos::task::spawn_local(async move {
            let Some(session) = store.current_session() else {
                return;
            };
            match rest::delete_event(&session.access_token, &event.id).await {
                Ok(()) => {
                    toast_success(toasts, "Sucesso", "Evento deletado com sucesso.");
                    events.refetch();
                }
                Err(err) => {
                    log::error!("failed to delete event: {err}");
                    toast_error(toasts, "Erro", "Não foi possível deletar o evento.");
                }
            }
        });
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h1>"Meus Eventos"</h1>
                    <p class="page__subtitle">"Gerencie todos os seus eventos aqui"</p>
                </div>
                <a class="btn btn--primary" href="/events/create">
                    "+ Criar Evento"
                </a>
            </div>

            <input
                class="search-input"
                type="search"
                placeholder="Buscar eventos..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />

            <Suspense fallback=move || view! { <Spinner/> }>
                {move || {
                    events
                        .get()
                        .map(|list| {
                            let term = search.get();
                            let current_user = store.current_session().map(|s| s.user.id);
                            let has_profiles =
                                own_professionals.get().is_some_and(|p| !p.is_empty());
                            let visible: Vec<Event> = list
                                .iter()
                                .filter(|event| event_matches(event, &term))
                                .cloned()
                                .collect();
                            if visible.is_empty() {
                                let searching = !term.is_empty();
                                view! {
                                    <div class="card empty-state">
                                        <h3>
                                            {if searching {
                                                "Nenhum evento encontrado"
                                            } else {
                                                "Nenhum evento criado"
                                            }}
                                        </h3>
                                        <p>
                                            {if searching {
                                                "Tente buscar com outros termos."
                                            } else {
                                                "Comece criando seu primeiro evento."
                                            }}
                                        </p>
                                        <Show when=move || !searching>
                                            <a class="btn btn--primary" href="/events/create">
                                                "Criar Primeiro Evento"
                                            </a>
                                        </Show>
                                    </div>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="card-grid">
                                        {visible
                                            .into_iter()
                                            .map(|event| {
                                                let is_own = current_user.as_deref()
                                                    == Some(event.user_id.as_str());
                                                view! {
                                                    <EventCard
                                                        event=event
                                                        is_own=is_own
                                                        can_apply=!is_own && has_profiles
                                                        on_apply=on_apply
                                                        on_delete=on_delete
                                                    />
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            {move || {
                apply_target
                    .get()
                    .map(|event| {
                        let professionals = own_professionals.get().unwrap_or_default();
                        view! {
                            <ApplyDialog
                                event=event
                                professionals=professionals
                                on_close=Callback::new(move |()| apply_target.set(None))
                            />
                        }
                    })
            }}

            {move || {
                delete_target
                    .get()
                    .map(|event| {
                        view! {
                            <ConfirmDialog
                                title="Confirmar exclusão"
                                message=format!(
                                    "Tem certeza que deseja excluir o evento \"{}\"? Esta ação não pode ser desfeita.",
                                    event.title,
                                )
                                confirm_label="Excluir"
                                on_cancel=Callback::new(move |()| delete_target.set(None))
                                on_confirm=confirm_delete
                            />
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn EventCard(
    event: Event,
    is_own: bool,
    can_apply: bool,
    on_apply: Callback<Event>,
    on_delete: Callback<Event>,
) -> impl IntoView {
    let status = event.status.clone().unwrap_or_else(|| "active".to_owned());
    let apply_event = event.clone();
    let delete_event = event.clone();
    let edit_href = format!("/events/edit/{}", event.id);

    view! {
        <div class="card event-card">
            <div class="event-card__top">
                <span class=format!("badge {}", format::event_status_class(&status))>
                    {format::event_status_label(&status).to_owned()}
                </span>
                {is_own
                    .then(|| {
                        view! {
                            <div class="event-card__actions">
                                <a class="btn btn--ghost" href=edit_href>
                                    "Editar"
                                </a>
                                <button
                                    class="btn btn--ghost btn--danger"
                                    on:click=move |_| on_delete.run(delete_event.clone())
                                >
                                    "Excluir"
                                </button>
                            </div>
                        }
                    })}
            </div>
            <h3>{event.title}</h3>
            <p class="event-card__meta">{format::date_pt(&event.date)}</p>
            <p class="event-card__meta">{event.start_time} " - " {event.end_time}</p>
            <p class="event-card__meta">{event.location}</p>
            {event
                .max_participants
                .map(|max| {
                    let current = event.current_participants.unwrap_or(0);
                    view! {
                        <p class="event-card__meta">{current} " / " {max} " participantes"</p>
                    }
                })}
            {event
                .price
                .filter(|price| *price > 0.0)
                .map(|price| {
                    view! { <p class="event-card__price">{format::money_eur(price)}</p> }
                })}
            {event.description.map(|text| view! { <p class="event-card__description">{text}</p> })}
            {event
                .category
                .map(|category| view! { <span class="badge badge--neutral">{category}</span> })}
            {can_apply
                .then(|| {
                    view! {
                        <button
                            class="btn btn--primary event-card__apply"
                            on:click=move |_| on_apply.run(apply_event.clone())
                        >
                            "Candidatar-se"
                        </button>
                    }
                })}
            {is_own
                .then(|| {
                    let phone = event.contact_phone.clone();
                    let email_addr = event.contact_email.clone();
                    (phone.is_some() || email_addr.is_some())
                        .then(|| {
                            view! {
                                <div class="event-card__contact">
                                    <p>"Informações de Contato:"</p>
                                    {phone
                                        .map(|value| {
                                            view! {
                                                <a class="btn" href=format!("tel:{value}")>
                                                    "Telefone"
                                                </a>
                                            }
                                        })}
                                    {email_addr
                                        .map(|value| {
                                            view! {
                                                <a class="btn" href=format!("mailto:{value}")>
                                                    "Email"
                                                </a>
                                            }
                                        })}
                                </div>
                            }
                        })
                })}
        </div>
    }
}

/// Application dialog: pick one of the user's professional profiles and
/// submit. Closes as soon as the request is dispatched; the outcome arrives
/// as a toast.
#[component]
fn ApplyDialog(
    event: Event,
    professionals: Vec<OwnProfessional>,
    on_close: Callback<()>,
) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let toasts = expect_context::<RwSignal<ToastsState>>();

    let selected = RwSignal::new(String::new());
    let application_type = RwSignal::new("phone".to_owned());
    let message = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());

    let event_id = event.id.clone();
    let subtitle = format!("Envie sua candidatura para \"{}\"", event.title);

    let on_submit = move |_| {
        let professional_id = selected.get();
        if professional_id.is_empty() {
            return;
        }
        let Some(session) = store.current_session() else {
            return;
        };
        let application = EventApplicationInsert {
            event_id: event_id.clone(),
            professional_id,
            applicant_id: session.user.id.clone(),
            application_type: application_type.get(),
            contact_preference: None,
            message: optional_text(&message.get()),
            price_proposal: parse_money(&price.get()),
        };
        leptos::task::spawn_local(async move {
            match rest::insert_event_application(&session.access_token, &application).await {
                Ok(()) => toast_success(toasts, "Sucesso", "Candidatura enviada com sucesso!"),
                Err(err) if err.is_unique_violation() => {
                    toast_error(
                        toasts,
                        "Erro",
                        "Você já se candidatou a este evento com este profissional.",
                    );
                }
                Err(err) => {
                    log::error!("failed to submit application: {err}");
                    toast_error(toasts, "Erro", "Não foi possível enviar a candidatura.");
                }
            }
        });
        on_close.run(());
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Candidatar-se ao Evento"</h2>
                <p class="dialog__message">{subtitle}</p>
                <label class="field">
                    "Selecionar Profissional:"
                    <select
                        prop:value=move || selected.get()
                        on:change=move |ev| selected.set(event_target_value(&ev))
                    >
                        <option value="">"Escolha um perfil profissional"</option>
                        {professionals
                            .into_iter()
                            .map(|profile| {
                                let label = format!(
                                    "{} - {}",
                                    profile.name,
                                    format::professional_category_label(&profile.category),
                                );
                                view! { <option value=profile.id>{label}</option> }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="field">
                    "Tipo de Candidatura:"
                    <select
                        prop:value=move || application_type.get()
                        on:change=move |ev| application_type.set(event_target_value(&ev))
                    >
                        <option value="phone">"Telefone"</option>
                        <option value="chat">"Chat/WhatsApp"</option>
                        <option value="email">"Email"</option>
                    </select>
                </label>
                <label class="field">
                    "Mensagem (opcional):"
                    <textarea
                        rows="3"
                        placeholder="Descreva sua experiência e por que é ideal para este evento..."
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="field">
                    "Proposta de Preço (\u{20ac}) (opcional):"
                    <input
                        type="number"
                        min="0"
                        step="0.01"
                        placeholder="Ex: 500.00"
                        prop:value=move || price.get()
                        on:input=move |ev| price.set(event_target_value(&ev))
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancelar"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || selected.get().is_empty()
                        on:click=on_submit
                    >
                        "Enviar Candidatura"
                    </button>
                </div>
            </div>
        </div>
    }
}

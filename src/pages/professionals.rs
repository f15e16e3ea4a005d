//! Professionals listing: search, category and weekday filters, owner
//! actions and contact links.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::spinner::Spinner;
use crate::components::toaster::{toast_error, toast_success};
use crate::net::rest;
use crate::net::types::Professional;
use crate::state::session::SessionStore;
use crate::state::toasts::ToastsState;
use crate::util::filter::{FILTER_ALL, professional_matches};
use crate::util::format;

#[component]
pub fn ProfessionalsPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let toasts = expect_context::<RwSignal<ToastsState>>();

    let search = RwSignal::new(String::new());
    let category_filter = RwSignal::new(FILTER_ALL.to_owned());
    let weekday_filter = RwSignal::new(FILTER_ALL.to_owned());
    let delete_target = RwSignal::new(None::<Professional>);

    let professionals = LocalResource::new(move || async move {
        let Some(session) = store.current_session() else {
            return Vec::new();
        };
        match rest::list_active_professionals(&session.access_token).await {
            Ok(rows) => rows,
            Err(err) => {
                log::error!("failed to load professionals: {err}");
                toast_error(toasts, "Erro", "Falha ao carregar profissionais");
                Vec::new()
            }
        }
    });

    let on_delete = Callback::new(move |professional: Professional| {
        delete_target.set(Some(professional));
    });

    let confirm_delete = Callback::new(move |()| {
        let Some(professional) = delete_target.get_untracked() else {
            return;
        };
        delete_target.set(None);
        leptos::task::spawn_local(async move {
            let Some(session) = store.current_session() else {
                return;
            };
            match rest::delete_professional(&session.access_token, &professional.id).await {
                Ok(()) => {
                    toast_success(toasts, "Sucesso", "Profissional removido com sucesso");
                    professionals.refetch();
                }
                Err(err) => {
                    log::error!("failed to delete professional: {err}");
                    toast_error(toasts, "Erro", "Falha ao remover profissional");
                }
            }
        });
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h1>"Profissionais"</h1>
                    <p class="page__subtitle">
                        "Encontre os melhores prestadores de serviços para seus eventos"
                    </p>
                </div>
                <a class="btn btn--primary" href="/professionals/create">
                    "+ Cadastrar Profissional"
                </a>
            </div>

            <div class="filter-row">
                <input
                    class="search-input"
                    type="search"
                    placeholder="Buscar por nome, localização ou especialidade..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select
                    prop:value=move || category_filter.get()
                    on:change=move |ev| category_filter.set(event_target_value(&ev))
                >
                    <option value=FILTER_ALL>"Todas as categorias"</option>
                    {format::PROFESSIONAL_CATEGORIES
                        .into_iter()
                        .map(|slug| {
                            view! {
                                <option value=slug>
                                    {format::professional_category_label(slug).to_owned()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
                <select
                    prop:value=move || weekday_filter.get()
                    on:change=move |ev| weekday_filter.set(event_target_value(&ev))
                >
                    <option value=FILTER_ALL>"Qualquer dia"</option>
                    {format::WEEKDAYS
                        .into_iter()
                        .map(|slug| {
                            view! {
                                <option value=slug>{format::weekday_label(slug).to_owned()}</option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </div>

            <Suspense fallback=move || view! { <Spinner/> }>
                {move || {
                    professionals
                        .get()
                        .map(|list| {
                            let term = search.get();
                            let category = category_filter.get();
                            let weekday = weekday_filter.get();
                            let current_user = store.current_session().map(|s| s.user.id);
                            let visible: Vec<Professional> = list
                                .iter()
                                .filter(|professional| {
                                    professional_matches(professional, &term, &category, &weekday)
                                })
                                .cloned()
                                .collect();
                            if visible.is_empty() {
                                view! {
                                    <div class="card empty-state">
                                        <h3>"Nenhum profissional encontrado"</h3>
                                        <p>
                                            "Tente ajustar os filtros ou cadastre um novo profissional"
                                        </p>
                                    </div>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="card-grid">
                                        {visible
                                            .into_iter()
                                            .map(|professional| {
                                                let is_own = current_user.as_deref()
                                                    == Some(professional.user_id.as_str());
                                                view! {
                                                    <ProfessionalCard
                                                        professional=professional
                                                        is_own=is_own
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
                delete_target
                    .get()
                    .map(|_| {
                        view! {
                            <ConfirmDialog
                                title="Confirmar exclusão"
                                message="Tem certeza que deseja remover este profissional? Esta ação não pode ser desfeita."
                                    .to_owned()
                                confirm_label="Remover"
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
fn ProfessionalCard(
    professional: Professional,
    is_own: bool,
    on_delete: Callback<Professional>,
) -> impl IntoView {
    let delete_row = professional.clone();
    let edit_href = format!("/professionals/edit/{}", professional.id);
    let category = format::professional_category_label(&professional.category).to_owned();
    let avatar = professional
        .portfolio_images
        .as_ref()
        .and_then(|images| images.first().cloned());
    let monogram = format::initials(&professional.name);
    let is_verified = professional.is_verified.unwrap_or(false);
    let rating = professional.rating.unwrap_or(0.0);
    let review_count = professional.total_reviews.unwrap_or(0);
    let specialties = professional.specialties.clone().unwrap_or_default();
    let shown: Vec<String> = specialties.iter().take(3).cloned().collect();
    let overflow = specialties.len().saturating_sub(3);

    view! {
        <div class="card professional-card">
            <div class="professional-card__header">
                <div class="professional-card__identity">
                    {match avatar {
                        Some(src) => view! { <img class="avatar" src=src alt=""/> }.into_any(),
                        None => {
                            view! { <div class="avatar avatar--fallback">{monogram}</div> }
                                .into_any()
                        }
                    }}
                    <div>
                        <div class="professional-card__name">
                            <h3>{professional.name.clone()}</h3>
                            {is_verified
                                .then(|| {
                                    view! { <span class="badge badge--verified">"Verificado"</span> }
                                })}
                        </div>
                        <span class="badge badge--neutral">{category}</span>
                    </div>
                </div>
                {is_own
                    .then(|| {
                        view! {
                            <div class="professional-card__actions">
                                <a class="btn btn--ghost" href=edit_href>
                                    "Editar"
                                </a>
                                <button
                                    class="btn btn--ghost btn--danger"
                                    on:click=move |_| on_delete.run(delete_row.clone())
                                >
                                    "Remover"
                                </button>
                            </div>
                        }
                    })}
            </div>
            {(review_count > 0)
                .then(|| {
                    view! {
                        <div class="professional-card__rating">
                            <span class="stars">
                                {format::star_states(rating)
                                    .into_iter()
                                    .map(|filled| {
                                        let class = if filled {
                                            "star star--filled"
                                        } else {
                                            "star"
                                        };
                                        view! { <span class=class>"\u{2605}"</span> }
                                    })
                                    .collect::<Vec<_>>()}
                            </span>
                            <span class="professional-card__score">{format!("({rating:.1})")}</span>
                            <span class="professional-card__reviews">
                                {review_count} " avaliações"
                            </span>
                        </div>
                    }
                })}
            {professional
                .bio
                .clone()
                .map(|bio| view! { <p class="professional-card__bio">{bio}</p> })}
            {(!shown.is_empty())
                .then(|| {
                    view! {
                        <div class="professional-card__specialties">
                            {shown
                                .into_iter()
                                .map(|specialty| {
                                    view! { <span class="badge badge--soft">{specialty}</span> }
                                })
                                .collect::<Vec<_>>()}
                            {(overflow > 0)
                                .then(|| {
                                    view! {
                                        <span class="badge badge--soft">{format!("+{overflow}")}</span>
                                    }
                                })}
                        </div>
                    }
                })}
            <p class="professional-card__meta">{professional.location.clone()}</p>
            {professional
                .price_range
                .clone()
                .map(|range| view! { <p class="professional-card__price">{range}</p> })}
            <div class="professional-card__contact">
                {professional
                    .phone
                    .clone()
                    .map(|phone| {
                        view! {
                            <a class="btn btn--ghost" href=format!("tel:{phone}") title="Ligar">
                                "Telefone"
                            </a>
                        }
                    })}
                <a
                    class="btn btn--ghost"
                    href=format!("mailto:{}", professional.email)
                    title="Enviar email"
                >
                    "Email"
                </a>
                {professional
                    .instagram_url
                    .clone()
                    .map(|url| {
                        view! {
                            <a class="btn btn--ghost" href=url target="_blank" title="Instagram">
                                "Instagram"
                            </a>
                        }
                    })}
                {professional
                    .website_url
                    .clone()
                    .map(|url| {
                        view! {
                            <a class="btn btn--ghost" href=url target="_blank" title="Website">
                                "Website"
                            </a>
                        }
                    })}
            </div>
        </div>
    }
}

//! Signed-in home page with overview stats and showcases.
//!
//! The stat cards and showcase lists are demonstration data; the greeting is
//! the only part wired to the session.

use leptos::prelude::*;

use crate::state::session::SessionStore;
use crate::util::format;

const STAT_CARDS: [(&str, &str, &str); 4] = [
    ("Total de Eventos", "12", "+2 desde o mês passado"),
    ("Profissionais Ativos", "45", "+8 novos esta semana"),
    ("Trabalhos Concluídos", "38", "95% taxa de conclusão"),
    ("Avaliação Média", "4.8\u{2605}", "Excelente qualidade"),
];

const RECENT_EVENTS: [(&str, &str, &str, &str); 3] = [
    (
        "Casamento Silva & Costa",
        "2024-07-25",
        "Quinta do Lago, Lisboa",
        "Confirmado",
    ),
    (
        "Evento Corporativo Tech Summit",
        "2024-07-28",
        "Centro de Congressos, Porto",
        "Pendente",
    ),
    (
        "Festa de Aniversário Premium",
        "2024-08-02",
        "Hotel Pestana, Funchal",
        "Em Andamento",
    ),
];

const TOP_PROFESSIONALS: [(&str, &str, &str, &str); 3] = [
    ("Ana Santos", "Garçonete", "4.9", "45 trabalhos"),
    ("Carlos Mendes", "Barman", "4.8", "38 trabalhos"),
    ("Mariana Costa", "Chef", "4.9", "52 trabalhos"),
];

fn showcase_status_class(status: &str) -> &'static str {
    match status {
        "Confirmado" => "badge--active",
        "Pendente" => "badge--pending",
        "Em Andamento" => "badge--progress",
        _ => "badge--neutral",
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();

    let greeting = move || {
        store
            .user_email()
            .map(|email| format::greeting_name(&email).to_owned())
            .unwrap_or_default()
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h1>"Dashboard"</h1>
                    <p class="page__subtitle">"Bem-vindo de volta, " {greeting} "!"</p>
                </div>
                <div class="page__actions">
                    <a class="btn" href="/notifications">
                        "Notificações"
                    </a>
                    <a class="btn btn--primary" href="/events/create">
                        "+ Novo Evento"
                    </a>
                </div>
            </div>

            <div class="stat-grid">
                {STAT_CARDS
                    .into_iter()
                    .map(|(title, value, hint)| {
                        view! {
                            <div class="card stat-card">
                                <p class="stat-card__title">{title}</p>
                                <p class="stat-card__value">{value}</p>
                                <p class="stat-card__hint">{hint}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="dashboard-columns">
                <div class="card">
                    <div class="card__header">
                        <h2>"Eventos Recentes"</h2>
                        <a class="btn btn--ghost" href="/events">
                            "Ver Todos"
                        </a>
                    </div>
                    {RECENT_EVENTS
                        .into_iter()
                        .map(|(title, date, location, status)| {
                            view! {
                                <div class="showcase-row">
                                    <div>
                                        <h4>{title}</h4>
                                        <p class="showcase-row__meta">
                                            {format::date_pt(date)} " \u{00b7} " {location}
                                        </p>
                                    </div>
                                    <span class=format!("badge {}", showcase_status_class(status))>
                                        {status}
                                    </span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="card">
                    <div class="card__header">
                        <h2>"Top Profissionais"</h2>
                    </div>
                    {TOP_PROFESSIONALS
                        .into_iter()
                        .enumerate()
                        .map(|(index, (name, specialty, rating, jobs))| {
                            view! {
                                <div class="showcase-row">
                                    <div class="showcase-row__rank">
                                        <span>"#" {index + 1}</span>
                                        <span class="avatar avatar--fallback">{format::initials(name)}</span>
                                    </div>
                                    <div class="showcase-row__body">
                                        <p>{name}</p>
                                        <p class="showcase-row__meta">{specialty}</p>
                                    </div>
                                    <div class="showcase-row__aside">
                                        <p>"\u{2605} " {rating}</p>
                                        <p class="showcase-row__meta">{jobs}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>

            <div class="card">
                <div class="card__header">
                    <h2>"Ações Rápidas"</h2>
                </div>
                <div class="quick-actions">
                    <a class="btn" href="/events/create">
                        "Criar Novo Evento"
                    </a>
                    <a class="btn" href="/professionals">
                        "Buscar Profissionais"
                    </a>
                    <a class="btn" href="/reports">
                        "Ver Relatórios"
                    </a>
                </div>
            </div>
        </div>
    }
}

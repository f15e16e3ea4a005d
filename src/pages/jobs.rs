//! Jobs listing: search, select filters and owner actions.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::spinner::Spinner;
use crate::components::toaster::{toast_error, toast_success};
use crate::net::rest;
use crate::net::types::Job;
use crate::pages::job_form::JOB_CATEGORIES;
use crate::state::session::SessionStore;
use crate::state::toasts::ToastsState;
use crate::util::filter::{FILTER_ALL, job_matches};
use crate::util::format;

#[component]
pub fn JobsPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let toasts = expect_context::<RwSignal<ToastsState>>();

    let search = RwSignal::new(String::new());
    let category_filter = RwSignal::new(FILTER_ALL.to_owned());
    let type_filter = RwSignal::new(FILTER_ALL.to_owned());
    let delete_target = RwSignal::new(None::<Job>);

    let jobs = LocalResource::new(move || async move {
        let Some(session) = store.current_session() else {
            return Vec::new();
        };
        match rest::list_active_jobs(&session.access_token).await {
            Ok(rows) => rows,
            Err(err) => {
                log::error!("failed to load jobs: {err}");
                toast_error(toasts, "Erro", "Não foi possível carregar as vagas");
                Vec::new()
            }
        }
    });

    let on_delete = Callback::new(move |job: Job| delete_target.set(Some(job)));

    let confirm_delete = Callback::new(move |()| {
        let Some(job) = delete_target.get_untracked() else {
            return;
        };
        delete_target.set(None);
        leptos::task::spawn_local(async move {
            let Some(session) = store.current_session() else {
                return;
            };
            match rest::delete_job(&session.access_token, &job.id).await {
                Ok(()) => {
                    toast_success(toasts, "Sucesso", "Vaga excluída com sucesso");
                    jobs.refetch();
                }
                Err(err) => {
                    log::error!("failed to delete job: {err}");
                    toast_error(toasts, "Erro", "Não foi possível excluir a vaga");
                }
            }
        });
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h1>"Vagas de Emprego"</h1>
                    <p class="page__subtitle">
                        "Encontre oportunidades profissionais no setor de eventos"
                    </p>
                </div>
                <a class="btn btn--primary" href="/jobs/create">
                    "+ Nova Vaga"
                </a>
            </div>

            <div class="card filter-card">
                <h2>"Filtros"</h2>
                <div class="filter-card__row">
                    <input
                        class="search-input"
                        type="search"
                        placeholder="Pesquisar vagas..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <select
                        prop:value=move || category_filter.get()
                        on:change=move |ev| category_filter.set(event_target_value(&ev))
                    >
                        <option value=FILTER_ALL>"Todas as categorias"</option>
                        {JOB_CATEGORIES
                            .into_iter()
                            .map(|category| view! { <option value=category>{category}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <select
                        prop:value=move || type_filter.get()
                        on:change=move |ev| type_filter.set(event_target_value(&ev))
                    >
                        <option value=FILTER_ALL>"Todos os tipos"</option>
                        <option value="temporary">"Temporário"</option>
                        <option value="permanent">"Permanente"</option>
                        <option value="contract">"Contrato"</option>
                    </select>
                    <button class="btn" on:click=move |_| jobs.refetch()>
                        "Atualizar"
                    </button>
                </div>
            </div>

            <Suspense fallback=move || view! { <Spinner/> }>
                {move || {
                    jobs.get()
                        .map(|list| {
                            let term = search.get();
                            let category = category_filter.get();
                            let employment = type_filter.get();
                            let current_user = store.current_session().map(|s| s.user.id);
                            let visible: Vec<Job> = list
                                .iter()
                                .filter(|job| job_matches(job, &term, &category, &employment))
                                .cloned()
                                .collect();
                            if visible.is_empty() {
                                view! {
                                    <div class="card empty-state">
                                        <h3>"Nenhuma vaga encontrada"</h3>
                                        <p>"Não há vagas que correspondam aos seus filtros atuais."</p>
                                        <a class="btn btn--primary" href="/jobs/create">
                                            "Criar Nova Vaga"
                                        </a>
                                    </div>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="card-list">
                                        {visible
                                            .into_iter()
                                            .map(|job| {
                                                let is_own = current_user.as_deref()
                                                    == Some(job.user_id.as_str());
                                                view! {
                                                    <JobCard job=job is_own=is_own on_delete=on_delete/>
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
                                message="Tem certeza que deseja excluir esta vaga?".to_owned()
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
fn JobCard(job: Job, is_own: bool, on_delete: Callback<Job>) -> impl IntoView {
    let delete_job = job.clone();
    let edit_href = format!("/jobs/edit/{}", job.id);
    let is_featured = job.is_featured.unwrap_or(false);
    let applicants = format!(
        "{}/{} candidatos",
        job.current_applicants.unwrap_or(0),
        // Stored rows use 0 for "no limit", so 0 and absent both show
        // as unlimited.
        job.max_applicants
            .filter(|max| *max != 0)
            .map_or_else(|| "\u{221e}".to_owned(), |max| max.to_string()),
    );

    view! {
        <div class="card job-card">
            <div class="job-card__top">
                <div class="job-card__heading">
                    <h3>{job.title}</h3>
                    <Show when=move || is_featured>
                        <span class="badge badge--featured">"Em Destaque"</span>
                    </Show>
                </div>
                {is_own
                    .then(|| {
                        view! {
                            <div class="job-card__actions">
                                <a class="btn btn--ghost" href=edit_href>
                                    "Editar"
                                </a>
                                <button
                                    class="btn btn--ghost btn--danger"
                                    on:click=move |_| on_delete.run(delete_job.clone())
                                >
                                    "Excluir"
                                </button>
                            </div>
                        }
                    })}
            </div>
            <div class="job-card__meta">
                <span>{job.location.clone()}</span>
                <span>{format::salary_label(job.salary_min, job.salary_max)}</span>
                <span>{format::employment_type_label(&job.employment_type).to_owned()}</span>
                <span>{applicants}</span>
                {job
                    .application_deadline
                    .as_deref()
                    .map(|deadline| view! { <span>"Até " {format::date_pt(deadline)}</span> })}
            </div>
            <div class="job-card__badges">
                <span class="badge badge--neutral">{job.category.clone()}</span>
                {job
                    .experience_level
                    .as_deref()
                    .map(|level| {
                        view! {
                            <span class="badge badge--neutral">
                                {format::experience_level_label(level).to_owned()}
                            </span>
                        }
                    })}
            </div>
            {job
                .description
                .clone()
                .map(|text| view! { <p class="job-card__description">{text}</p> })}
            <p class="job-card__footer">"Publicado em " {format::date_pt(&job.created_at)}</p>
        </div>
    }
}

//! Shared state, fields and payload building for the job form pages.

use leptos::prelude::*;

use crate::net::types::{Job, JobInsert, JobUpdate};
use crate::util::validate::{is_valid_email, lines_to_list, optional_text, parse_count, parse_money};

#[cfg(test)]
#[path = "job_form_test.rs"]
mod job_form_test;

pub(crate) const JOB_CATEGORIES: [&str; 9] = [
    "Garçons & Empregados",
    "Barmen & Bartenders",
    "Chefs & Cozinheiros",
    "Segurança",
    "Recepcionistas",
    "Técnicos Audio/Visual",
    "Serviços de Limpeza",
    "DJs & Animação",
    "Outros",
];

/// Snapshot of the form fields in input representation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct JobDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub employment_type: String,
    pub experience_level: String,
    pub salary_min: String,
    pub salary_max: String,
    pub requirements: String,
    pub benefits: String,
    pub start_date: String,
    pub end_date: String,
    pub application_deadline: String,
    pub max_applicants: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub is_featured: bool,
}

/// First validation failure, if any. Employment type and experience level
/// always hold one of the select options, so they are not checked here.
pub(crate) fn validate_job_draft(draft: &JobDraft) -> Result<(), &'static str> {
    if draft.title.trim().is_empty() {
        return Err("Título é obrigatório");
    }
    if draft.category.is_empty() {
        return Err("Categoria é obrigatória");
    }
    if draft.location.trim().is_empty() {
        return Err("Localização é obrigatória");
    }
    let email = draft.contact_email.trim();
    if !email.is_empty() && !is_valid_email(email) {
        return Err("Email inválido");
    }
    Ok(())
}

/// Map a validated draft to the insert payload. New jobs are listed
/// immediately, so they start `active`.
pub(crate) fn build_job_insert(draft: &JobDraft, user_id: &str) -> JobInsert {
    JobInsert {
        title: draft.title.trim().to_owned(),
        description: optional_text(&draft.description),
        category: draft.category.clone(),
        location: draft.location.trim().to_owned(),
        employment_type: draft.employment_type.clone(),
        experience_level: draft.experience_level.clone(),
        requirements: lines_to_list(&draft.requirements),
        benefits: lines_to_list(&draft.benefits),
        salary_min: parse_money(&draft.salary_min),
        salary_max: parse_money(&draft.salary_max),
        start_date: optional_text(&draft.start_date),
        end_date: optional_text(&draft.end_date),
        application_deadline: optional_text(&draft.application_deadline),
        max_applicants: parse_count(&draft.max_applicants),
        contact_email: optional_text(&draft.contact_email),
        contact_phone: optional_text(&draft.contact_phone),
        is_featured: draft.is_featured,
        status: "active".to_owned(),
        user_id: user_id.to_owned(),
    }
}

/// Map a validated draft to the update payload. Cleared inputs write nulls.
pub(crate) fn build_job_update(draft: &JobDraft) -> JobUpdate {
    JobUpdate {
        title: draft.title.trim().to_owned(),
        description: optional_text(&draft.description),
        category: draft.category.clone(),
        location: draft.location.trim().to_owned(),
        employment_type: draft.employment_type.clone(),
        experience_level: draft.experience_level.clone(),
        requirements: lines_to_list(&draft.requirements),
        benefits: lines_to_list(&draft.benefits),
        salary_min: parse_money(&draft.salary_min),
        salary_max: parse_money(&draft.salary_max),
        start_date: optional_text(&draft.start_date),
        end_date: optional_text(&draft.end_date),
        application_deadline: optional_text(&draft.application_deadline),
        max_applicants: parse_count(&draft.max_applicants),
        contact_email: optional_text(&draft.contact_email),
        contact_phone: optional_text(&draft.contact_phone),
        is_featured: draft.is_featured,
    }
}

/// Signal bundle backing the form inputs.
#[derive(Clone, Copy)]
pub(crate) struct JobFormState {
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    pub category: RwSignal<String>,
    pub location: RwSignal<String>,
    pub employment_type: RwSignal<String>,
    pub experience_level: RwSignal<String>,
    pub salary_min: RwSignal<String>,
    pub salary_max: RwSignal<String>,
    pub requirements: RwSignal<String>,
    pub benefits: RwSignal<String>,
    pub start_date: RwSignal<String>,
    pub end_date: RwSignal<String>,
    pub application_deadline: RwSignal<String>,
    pub max_applicants: RwSignal<String>,
    pub contact_email: RwSignal<String>,
    pub contact_phone: RwSignal<String>,
    pub is_featured: RwSignal<bool>,
}

impl JobFormState {
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
            location: RwSignal::new(String::new()),
            employment_type: RwSignal::new("temporary".to_owned()),
            experience_level: RwSignal::new("entry".to_owned()),
            salary_min: RwSignal::new(String::new()),
            salary_max: RwSignal::new(String::new()),
            requirements: RwSignal::new(String::new()),
            benefits: RwSignal::new(String::new()),
            start_date: RwSignal::new(String::new()),
            end_date: RwSignal::new(String::new()),
            application_deadline: RwSignal::new(String::new()),
            max_applicants: RwSignal::new(String::new()),
            contact_email: RwSignal::new(String::new()),
            contact_phone: RwSignal::new(String::new()),
            is_featured: RwSignal::new(false),
        }
    }

    /// Prefill from a stored row. List columns flatten to one entry per
    /// line; zero salaries and limits show as empty inputs.
    pub fn load(self, job: &Job) {
        self.title.set(job.title.clone());
        self.description
            .set(job.description.clone().unwrap_or_default());
        self.category.set(job.category.clone());
        self.location.set(job.location.clone());
        self.employment_type.set(job.employment_type.clone());
        self.experience_level.set(
            job.experience_level
                .clone()
                .unwrap_or_else(|| "entry".to_owned()),
        );
        self.salary_min.set(
            job.salary_min
                .filter(|salary| *salary != 0.0)
                .map(|salary| salary.to_string())
                .unwrap_or_default(),
        );
        self.salary_max.set(
            job.salary_max
                .filter(|salary| *salary != 0.0)
                .map(|salary| salary.to_string())
                .unwrap_or_default(),
        );
        self.requirements
            .set(job.requirements.as_deref().unwrap_or_default().join("\n"));
        self.benefits
            .set(job.benefits.as_deref().unwrap_or_default().join("\n"));
        self.start_date
            .set(job.start_date.clone().unwrap_or_default());
        self.end_date.set(job.end_date.clone().unwrap_or_default());
        self.application_deadline
            .set(job.application_deadline.clone().unwrap_or_default());
        self.max_applicants.set(
            job.max_applicants
                .filter(|max| *max != 0)
                .map(|max| max.to_string())
                .unwrap_or_default(),
        );
        self.contact_email
            .set(job.contact_email.clone().unwrap_or_default());
        self.contact_phone
            .set(job.contact_phone.clone().unwrap_or_default());
        self.is_featured.set(job.is_featured.unwrap_or(false));
    }

    /// Snapshot for validation and payload building.
    pub fn draft(self) -> JobDraft {
        JobDraft {
            title: self.title.get_untracked(),
            description: self.description.get_untracked(),
            category: self.category.get_untracked(),
            location: self.location.get_untracked(),
            employment_type: self.employment_type.get_untracked(),
            experience_level: self.experience_level.get_untracked(),
            salary_min: self.salary_min.get_untracked(),
            salary_max: self.salary_max.get_untracked(),
            requirements: self.requirements.get_untracked(),
            benefits: self.benefits.get_untracked(),
            start_date: self.start_date.get_untracked(),
            end_date: self.end_date.get_untracked(),
            application_deadline: self.application_deadline.get_untracked(),
            max_applicants: self.max_applicants.get_untracked(),
            contact_email: self.contact_email.get_untracked(),
            contact_phone: self.contact_phone.get_untracked(),
            is_featured: self.is_featured.get_untracked(),
        }
    }
}

/// The form fields, split into the listing details and the side settings
/// the way the job pages lay them out.
#[component]
pub(crate) fn JobFormFields(state: JobFormState) -> impl IntoView {
    use crate::components::form::{TextAreaField, TextField};

    view! {
        <div class="card">
            <h2>"Informações Básicas"</h2>
            <TextField
                label="Título da Vaga *"
                placeholder="Ex: Garçon para Evento Corporativo"
                value=state.title
            />
            <TextAreaField
                label="Descrição"
                placeholder="Descreva os detalhes da vaga..."
                rows=4
                value=state.description
            />
            <label class="field">
                "Categoria *"
                <select
                    prop:value=move || state.category.get()
                    on:change=move |ev| state.category.set(event_target_value(&ev))
                >
                    <option value="">"Selecione a categoria"</option>
                    {JOB_CATEGORIES
                        .into_iter()
                        .map(|category| view! { <option value=category>{category}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <TextField label="Localização *" placeholder="Ex: Lisboa, Porto" value=state.location/>
            <label class="field">
                "Tipo de Emprego *"
                <select
                    prop:value=move || state.employment_type.get()
                    on:change=move |ev| state.employment_type.set(event_target_value(&ev))
                >
                    <option value="temporary">"Temporário"</option>
                    <option value="permanent">"Permanente"</option>
                    <option value="contract">"Contrato"</option>
                </select>
            </label>
            <label class="field">
                "Nível de Experiência *"
                <select
                    prop:value=move || state.experience_level.get()
                    on:change=move |ev| state.experience_level.set(event_target_value(&ev))
                >
                    <option value="entry">"Iniciante"</option>
                    <option value="mid">"Intermediário"</option>
                    <option value="senior">"Sénior"</option>
                </select>
            </label>
            <TextField
                label="Salário Mínimo (\u{20ac})"
                input_type="number"
                placeholder="0.00"
                value=state.salary_min
            />
            <TextField
                label="Salário Máximo (\u{20ac})"
                input_type="number"
                placeholder="0.00"
                value=state.salary_max
            />
            <TextAreaField
                label="Requisitos (um por linha)"
                placeholder="Ex:\nExperiência prévia em eventos\nDisponibilidade aos fins de semana\nConhecimento de inglês"
                rows=4
                value=state.requirements
            />
            <TextAreaField
                label="Benefícios (um por linha)"
                placeholder="Ex:\nAlimentação incluída\nTransporte fornecido\nFormação profissional"
                rows=4
                value=state.benefits
            />
        </div>
        <div class="card">
            <h2>"Configurações"</h2>
            <TextField label="Data de Início" input_type="date" value=state.start_date/>
            <TextField label="Data de Fim" input_type="date" value=state.end_date/>
            <TextField
                label="Prazo para Candidaturas"
                input_type="date"
                value=state.application_deadline
            />
            <TextField
                label="Máximo de Candidatos"
                input_type="number"
                placeholder="Deixe vazio para ilimitado"
                value=state.max_applicants
            />
            <TextField
                label="Email de Contacto"
                input_type="email"
                placeholder="contato@empresa.com"
                value=state.contact_email
            />
            <TextField
                label="Telefone de Contacto"
                placeholder="+351 XXX XXX XXX"
                value=state.contact_phone
            />
            <label class="checkbox checkbox--boxed">
                <input
                    type="checkbox"
                    prop:checked=move || state.is_featured.get()
                    on:change=move |_| state.is_featured.update(|value| *value = !*value)
                />
                <span>
                    <strong>"Vaga em Destaque"</strong>
                    <small>"Destacar esta vaga na listagem"</small>
                </span>
            </label>
        </div>
    }
}

//! Shared state, fields and payload building for the event form pages.
//!
//! The create and edit pages differ only in which sections show and in how
//! the draft becomes a payload, so everything else lives here. Validation
//! and payload building are plain functions over a [`EventDraft`] snapshot,
//! tested natively.

use leptos::prelude::*;

use crate::net::types::{Event, EventInsert, EventUpdate};
use crate::util::format::{PROFESSIONAL_CATEGORIES, professional_category_label};
use crate::util::validate::{
    date_in_past, end_after_start, has_min_len, optional_text, parse_count, parse_money,
};

#[cfg(test)]
#[path = "event_form_test.rs"]
mod event_form_test;

pub(crate) const EVENT_CATEGORIES: [&str; 10] = [
    "Casamento",
    "Evento Corporativo",
    "Festa de Aniversário",
    "Conferência",
    "Workshop",
    "Networking",
    "Formatura",
    "Batizado",
    "Comunhão",
    "Outro",
];

/// Snapshot of the form fields in input representation: everything is a
/// string until payload building.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct EventDraft {
    pub title: String,
    pub description: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub category: String,
    pub max_participants: String,
    pub price: String,
    pub image_url: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub application_deadline: String,
    pub required_professionals: Vec<String>,
    pub status: String,
}

/// First validation failure, if any. The past-date rule only applies on
/// creation; an edited event may keep a date that has since gone by.
pub(crate) fn validate_event_draft(
    draft: &EventDraft,
    require_future_date: bool,
    today: &str,
) -> Result<(), &'static str> {
    if !has_min_len(&draft.title, 3) {
        return Err("Título deve ter pelo menos 3 caracteres");
    }
    if draft.date.trim().is_empty() {
        return Err("Data é obrigatória");
    }
    if draft.start_time.trim().is_empty() {
        return Err("Hora de início é obrigatória");
    }
    if draft.end_time.trim().is_empty() {
        return Err("Hora de fim é obrigatória");
    }
    if draft.location.trim().is_empty() {
        return Err("Local é obrigatório");
    }
    if !end_after_start(&draft.start_time, &draft.end_time) {
        return Err("A hora de fim deve ser posterior à hora de início.");
    }
    if require_future_date && date_in_past(&draft.date, today) {
        return Err("A data do evento não pode ser no passado.");
    }
    Ok(())
}

/// Map a validated draft to the insert payload. Empty inputs become absent
/// columns; an empty price defaults to 0 and new events start `active`.
pub(crate) fn build_event_insert(draft: &EventDraft, user_id: &str) -> EventInsert {
    EventInsert {
        title: draft.title.trim().to_owned(),
        description: optional_text(&draft.description),
        date: draft.date.clone(),
        start_time: draft.start_time.clone(),
        end_time: draft.end_time.clone(),
        location: draft.location.trim().to_owned(),
        category: optional_text(&draft.category),
        max_participants: parse_count(&draft.max_participants),
        price: parse_money(&draft.price).unwrap_or(0.0),
        image_url: optional_text(&draft.image_url),
        status: "active".to_owned(),
        contact_email: optional_text(&draft.contact_email),
        contact_phone: optional_text(&draft.contact_phone),
        application_deadline: optional_text(&draft.application_deadline),
        required_professionals: if draft.required_professionals.is_empty() {
            None
        } else {
            Some(serde_json::json!(draft.required_professionals))
        },
        user_id: user_id.to_owned(),
    }
}

/// Map a validated draft to the update payload. Cleared inputs write nulls.
pub(crate) fn build_event_update(draft: &EventDraft, updated_at: String) -> EventUpdate {
    EventUpdate {
        title: draft.title.trim().to_owned(),
        description: optional_text(&draft.description),
        date: draft.date.clone(),
        start_time: draft.start_time.clone(),
        end_time: draft.end_time.clone(),
        location: draft.location.trim().to_owned(),
        category: optional_text(&draft.category),
        max_participants: parse_count(&draft.max_participants),
        price: parse_money(&draft.price).unwrap_or(0.0),
        image_url: optional_text(&draft.image_url),
        status: draft.status.clone(),
        updated_at,
    }
}

/// Signal bundle backing the form inputs. `Copy`, so the fields component
/// and page handlers can capture it freely.
#[derive(Clone, Copy)]
pub(crate) struct EventFormState {
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    pub date: RwSignal<String>,
    pub start_time: RwSignal<String>,
    pub end_time: RwSignal<String>,
    pub location: RwSignal<String>,
    pub category: RwSignal<String>,
    pub max_participants: RwSignal<String>,
    pub price: RwSignal<String>,
    pub image_url: RwSignal<String>,
    pub contact_email: RwSignal<String>,
    pub contact_phone: RwSignal<String>,
    pub application_deadline: RwSignal<String>,
    pub required_professionals: RwSignal<Vec<String>>,
    pub status: RwSignal<String>,
}

impl EventFormState {
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            date: RwSignal::new(String::new()),
            start_time: RwSignal::new(String::new()),
            end_time: RwSignal::new(String::new()),
            location: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
            max_participants: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            image_url: RwSignal::new(String::new()),
            contact_email: RwSignal::new(String::new()),
            contact_phone: RwSignal::new(String::new()),
            application_deadline: RwSignal::new(String::new()),
            required_professionals: RwSignal::new(Vec::new()),
            status: RwSignal::new("active".to_owned()),
        }
    }

    /// Prefill from a stored row. Zero counts and prices show as empty
    /// inputs, matching how they were entered.
    pub fn load(self, event: &Event) {
        self.title.set(event.title.clone());
        self.description
            .set(event.description.clone().unwrap_or_default());
        self.date.set(event.date.clone());
        self.start_time.set(event.start_time.clone());
        self.end_time.set(event.end_time.clone());
        self.location.set(event.location.clone());
        self.category.set(event.category.clone().unwrap_or_default());
        self.max_participants.set(
            event
                .max_participants
                .filter(|count| *count != 0)
                .map(|count| count.to_string())
                .unwrap_or_default(),
        );
        self.price.set(
            event
                .price
                .filter(|price| *price != 0.0)
                .map(|price| price.to_string())
                .unwrap_or_default(),
        );
        self.image_url.set(event.image_url.clone().unwrap_or_default());
        self.status
            .set(event.status.clone().unwrap_or_else(|| "active".to_owned()));
    }

    /// Snapshot for validation and payload building.
    pub fn draft(self) -> EventDraft {
        EventDraft {
            title: self.title.get_untracked(),
            description: self.description.get_untracked(),
            date: self.date.get_untracked(),
            start_time: self.start_time.get_untracked(),
            end_time: self.end_time.get_untracked(),
            location: self.location.get_untracked(),
            category: self.category.get_untracked(),
            max_participants: self.max_participants.get_untracked(),
            price: self.price.get_untracked(),
            image_url: self.image_url.get_untracked(),
            contact_email: self.contact_email.get_untracked(),
            contact_phone: self.contact_phone.get_untracked(),
            application_deadline: self.application_deadline.get_untracked(),
            required_professionals: self.required_professionals.get_untracked(),
            status: self.status.get_untracked(),
        }
    }

    fn toggle_professional(self, slug: &str) {
        self.required_professionals.update(|list| {
            if let Some(position) = list.iter().position(|item| item == slug) {
                list.remove(position);
            } else {
                list.push(slug.to_owned());
            }
        });
    }
}

/// The form fields, shared by both pages. Creation shows the application
/// section (contact, deadline, wanted professionals); editing shows the
/// status select instead.
#[component]
pub(crate) fn EventFormFields(
    state: EventFormState,
    show_status: bool,
    show_application_details: bool,
) -> impl IntoView {
    use crate::components::form::{TextAreaField, TextField};

    view! {
        <TextField
            label="Título do Evento"
            placeholder="Ex: Casamento Silva & Costa"
            value=state.title
        />
        <TextAreaField
            label="Descrição (opcional)"
            placeholder="Descreva os detalhes do evento..."
            rows=4
            value=state.description
        />
        <TextField label="Data do Evento" input_type="date" value=state.date/>
        <Show when=move || show_status>
            <label class="field">
                "Status"
                <select
                    prop:value=move || state.status.get()
                    on:change=move |ev| state.status.set(event_target_value(&ev))
                >
                    <option value="active">"Ativo"</option>
                    <option value="completed">"Concluído"</option>
                    <option value="cancelled">"Cancelado"</option>
                </select>
            </label>
        </Show>
        <label class="field">
            "Categoria"
            <select
                prop:value=move || state.category.get()
                on:change=move |ev| state.category.set(event_target_value(&ev))
            >
                <option value="">"Selecione uma categoria"</option>
                {EVENT_CATEGORIES
                    .into_iter()
                    .map(|category| view! { <option value=category>{category}</option> })
                    .collect::<Vec<_>>()}
            </select>
        </label>
        <TextField label="Hora de Início" input_type="time" value=state.start_time/>
        <TextField label="Hora de Fim" input_type="time" value=state.end_time/>
        <TextField
            label="Local do Evento"
            placeholder="Ex: Quinta do Lago, Lisboa"
            value=state.location
        />
        <TextField
            label="Máximo de Participantes (opcional)"
            input_type="number"
            placeholder="Ex: 150"
            value=state.max_participants
        />
        <TextField
            label="Preço (\u{20ac}) (opcional)"
            input_type="number"
            placeholder="Ex: 25.00"
            value=state.price
        />
        <TextField
            label="URL da Imagem (opcional)"
            input_type="url"
            placeholder="https://exemplo.com/imagem.jpg"
            value=state.image_url
        />
        <Show when=move || show_application_details>
            <TextField
                label="Email para Contato (opcional)"
                input_type="email"
                placeholder="contato@exemplo.com"
                value=state.contact_email
            />
            <TextField
                label="Telefone para Contato (opcional)"
                input_type="tel"
                placeholder="+351 912 345 678"
                value=state.contact_phone
            />
            <TextField
                label="Prazo para Candidaturas (opcional)"
                input_type="date"
                value=state.application_deadline
            />
            <fieldset class="field">
                <legend>"Profissionais Necessários (opcional)"</legend>
                <div class="checkbox-grid">
                    {PROFESSIONAL_CATEGORIES
                        .into_iter()
                        .map(|slug| {
                            view! {
                                <label class="checkbox">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            state
                                                .required_professionals
                                                .with(|list| list.iter().any(|item| item == slug))
                                        }
                                        on:change=move |_| state.toggle_professional(slug)
                                    />
                                    {professional_category_label(slug)}
                                </label>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </fieldset>
        </Show>
    }
}

//! Shared state, fields and payload building for the professional profile
//! form pages.
//!
//! Specialties and portfolio images are tag lists: a staging input plus an
//! add button (or Enter), with per-entry removal. Duplicates are ignored on
//! add.

use leptos::prelude::*;

use crate::net::types::{Professional, ProfessionalInsert, ProfessionalUpdate};
use crate::util::format::{PROFESSIONAL_CATEGORIES, WEEKDAYS, professional_category_label, weekday_label};
use crate::util::validate::{optional_text, parse_money};

#[cfg(test)]
#[path = "professional_form_test.rs"]
mod professional_form_test;

/// Snapshot of the form fields in input representation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ProfessionalDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub category: String,
    pub specialties: Vec<String>,
    pub location: String,
    pub price_range: String,
    pub min_price: String,
    pub max_price: String,
    pub portfolio_images: Vec<String>,
    pub instagram_url: String,
    pub website_url: String,
    pub availability_days: Vec<String>,
}

/// The four required fields share one message.
pub(crate) fn validate_professional_draft(draft: &ProfessionalDraft) -> Result<(), &'static str> {
    if draft.name.trim().is_empty()
        || draft.email.trim().is_empty()
        || draft.category.is_empty()
        || draft.location.trim().is_empty()
    {
        return Err("Preencha todos os campos obrigatórios");
    }
    Ok(())
}

pub(crate) fn build_professional_insert(
    draft: &ProfessionalDraft,
    user_id: &str,
) -> ProfessionalInsert {
    ProfessionalInsert {
        name: draft.name.trim().to_owned(),
        email: draft.email.trim().to_owned(),
        phone: optional_text(&draft.phone),
        bio: optional_text(&draft.bio),
        category: draft.category.clone(),
        specialties: non_empty(&draft.specialties),
        location: draft.location.trim().to_owned(),
        price_range: optional_text(&draft.price_range),
        min_price: parse_money(&draft.min_price),
        max_price: parse_money(&draft.max_price),
        portfolio_images: non_empty(&draft.portfolio_images),
        instagram_url: optional_text(&draft.instagram_url),
        website_url: optional_text(&draft.website_url),
        availability_days: non_empty(&draft.availability_days),
        user_id: user_id.to_owned(),
    }
}

/// Map a validated draft to the update payload. Cleared inputs and emptied
/// lists write nulls.
pub(crate) fn build_professional_update(
    draft: &ProfessionalDraft,
    updated_at: String,
) -> ProfessionalUpdate {
    ProfessionalUpdate {
        name: draft.name.trim().to_owned(),
        email: draft.email.trim().to_owned(),
        phone: optional_text(&draft.phone),
        bio: optional_text(&draft.bio),
        category: draft.category.clone(),
        specialties: non_empty(&draft.specialties),
        location: draft.location.trim().to_owned(),
        price_range: optional_text(&draft.price_range),
        min_price: parse_money(&draft.min_price),
        max_price: parse_money(&draft.max_price),
        portfolio_images: non_empty(&draft.portfolio_images),
        instagram_url: optional_text(&draft.instagram_url),
        website_url: optional_text(&draft.website_url),
        availability_days: non_empty(&draft.availability_days),
        updated_at,
    }
}

fn non_empty(list: &[String]) -> Option<Vec<String>> {
    if list.is_empty() { None } else { Some(list.to_vec()) }
}

/// Signal bundle backing the form inputs, including the staging inputs for
/// the two tag lists.
#[derive(Clone, Copy)]
pub(crate) struct ProfessionalFormState {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub bio: RwSignal<String>,
    pub category: RwSignal<String>,
    pub specialties: RwSignal<Vec<String>>,
    pub new_specialty: RwSignal<String>,
    pub location: RwSignal<String>,
    pub price_range: RwSignal<String>,
    pub min_price: RwSignal<String>,
    pub max_price: RwSignal<String>,
    pub portfolio_images: RwSignal<Vec<String>>,
    pub new_portfolio_image: RwSignal<String>,
    pub instagram_url: RwSignal<String>,
    pub website_url: RwSignal<String>,
    pub availability_days: RwSignal<Vec<String>>,
}

impl ProfessionalFormState {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            bio: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
            specialties: RwSignal::new(Vec::new()),
            new_specialty: RwSignal::new(String::new()),
            location: RwSignal::new(String::new()),
            price_range: RwSignal::new(String::new()),
            min_price: RwSignal::new(String::new()),
            max_price: RwSignal::new(String::new()),
            portfolio_images: RwSignal::new(Vec::new()),
            new_portfolio_image: RwSignal::new(String::new()),
            instagram_url: RwSignal::new(String::new()),
            website_url: RwSignal::new(String::new()),
            availability_days: RwSignal::new(Vec::new()),
        }
    }

    /// Prefill from a stored row. Zero prices show as empty inputs.
    pub fn load(self, professional: &Professional) {
        self.name.set(professional.name.clone());
        self.email.set(professional.email.clone());
        self.phone.set(professional.phone.clone().unwrap_or_default());
        self.bio.set(professional.bio.clone().unwrap_or_default());
        self.category.set(professional.category.clone());
        self.specialties
            .set(professional.specialties.clone().unwrap_or_default());
        self.location.set(professional.location.clone());
        self.price_range
            .set(professional.price_range.clone().unwrap_or_default());
        self.min_price.set(
            professional
                .min_price
                .filter(|price| *price != 0.0)
                .map(|price| price.to_string())
                .unwrap_or_default(),
        );
        self.max_price.set(
            professional
                .max_price
                .filter(|price| *price != 0.0)
                .map(|price| price.to_string())
                .unwrap_or_default(),
        );
        self.portfolio_images
            .set(professional.portfolio_images.clone().unwrap_or_default());
        self.instagram_url
            .set(professional.instagram_url.clone().unwrap_or_default());
        self.website_url
            .set(professional.website_url.clone().unwrap_or_default());
        self.availability_days
            .set(professional.availability_days.clone().unwrap_or_default());
    }

    /// Snapshot for validation and payload building.
    pub fn draft(self) -> ProfessionalDraft {
        ProfessionalDraft {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            phone: self.phone.get_untracked(),
            bio: self.bio.get_untracked(),
            category: self.category.get_untracked(),
            specialties: self.specialties.get_untracked(),
            location: self.location.get_untracked(),
            price_range: self.price_range.get_untracked(),
            min_price: self.min_price.get_untracked(),
            max_price: self.max_price.get_untracked(),
            portfolio_images: self.portfolio_images.get_untracked(),
            instagram_url: self.instagram_url.get_untracked(),
            website_url: self.website_url.get_untracked(),
            availability_days: self.availability_days.get_untracked(),
        }
    }

    fn add_specialty(self) {
        push_unique(self.specialties, self.new_specialty);
    }

    fn remove_specialty(self, value: &str) {
        self.specialties
            .update(|list| list.retain(|entry| entry != value));
    }

    fn add_portfolio_image(self) {
        push_unique(self.portfolio_images, self.new_portfolio_image);
    }

    fn remove_portfolio_image(self, value: &str) {
        self.portfolio_images
            .update(|list| list.retain(|entry| entry != value));
    }

    fn toggle_weekday(self, slug: &str) {
        self.availability_days.update(|list| {
            if let Some(position) = list.iter().position(|entry| entry == slug) {
                list.remove(position);
            } else {
                list.push(slug.to_owned());
            }
        });
    }
}

/// Move the trimmed staging value into the list unless blank or already
/// present.
fn push_unique(list: RwSignal<Vec<String>>, staging: RwSignal<String>) {
    let value = staging.get_untracked().trim().to_owned();
    if value.is_empty() || list.with_untracked(|entries| entries.contains(&value)) {
        return;
    }
    list.update(|entries| entries.push(value));
    staging.set(String::new());
}

#[component]
pub(crate) fn ProfessionalFormFields(state: ProfessionalFormState) -> impl IntoView {
    use crate::components::form::{TextAreaField, TextField};

    let specialty_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            state.add_specialty();
        }
    };
    let portfolio_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            state.add_portfolio_image();
        }
    };

    view! {
        <div class="card">
            <h2>"Informações Básicas"</h2>
            <TextField label="Nome Completo *" placeholder="Seu nome completo" value=state.name/>
            <TextField
                label="Email *"
                input_type="email"
                placeholder="seu@email.com"
                value=state.email
            />
            <TextField label="Telefone" placeholder="(11) 99999-9999" value=state.phone/>
            <TextField label="Localização *" placeholder="São Paulo, SP" value=state.location/>
            <TextAreaField
                label="Biografia"
                placeholder="Conte um pouco sobre você e seu trabalho..."
                rows=4
                value=state.bio
            />
        </div>

        <div class="card">
            <h2>"Categoria e Especialidades"</h2>
            <label class="field">
                "Categoria *"
                <select
                    prop:value=move || state.category.get()
                    on:change=move |ev| state.category.set(event_target_value(&ev))
                >
                    <option value="">"Selecione sua categoria principal"</option>
                    {PROFESSIONAL_CATEGORIES
                        .into_iter()
                        .map(|slug| {
                            view! {
                                <option value=slug>
                                    {professional_category_label(slug).to_owned()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <div class="field">
                "Especialidades"
                <div class="tag-input">
                    <input
                        placeholder="Digite uma especialidade"
                        prop:value=move || state.new_specialty.get()
                        on:input=move |ev| state.new_specialty.set(event_target_value(&ev))
                        on:keydown=specialty_keydown
                    />
                    <button type="button" class="btn" on:click=move |_| state.add_specialty()>
                        "+"
                    </button>
                </div>
                <div class="tag-list">
                    {move || {
                        state
                            .specialties
                            .get()
                            .into_iter()
                            .map(|specialty| {
                                let label = specialty.clone();
                                view! {
                                    <span class="badge badge--soft tag">
                                        {label}
                                        <button
                                            type="button"
                                            class="tag__remove"
                                            on:click=move |_| state.remove_specialty(&specialty)
                                        >
                                            "\u{00d7}"
                                        </button>
                                    </span>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </div>
        </div>

        <div class="card">
            <h2>"Informações de Preço"</h2>
            <TextField
                label="Faixa de Preço"
                placeholder="Ex: R$ 500 - R$ 1.500"
                value=state.price_range
            />
            <TextField
                label="Preço Mínimo"
                input_type="number"
                placeholder="500.00"
                value=state.min_price
            />
            <TextField
                label="Preço Máximo"
                input_type="number"
                placeholder="1500.00"
                value=state.max_price
            />
        </div>

        <div class="card">
            <h2>"Portfólio"</h2>
            <div class="field">
                "Imagens do Portfólio"
                <div class="tag-input">
                    <input
                        placeholder="URL da imagem"
                        prop:value=move || state.new_portfolio_image.get()
                        on:input=move |ev| state.new_portfolio_image.set(event_target_value(&ev))
                        on:keydown=portfolio_keydown
                    />
                    <button
                        type="button"
                        class="btn"
                        on:click=move |_| state.add_portfolio_image()
                    >
                        "+"
                    </button>
                </div>
                <div class="portfolio-list">
                    {move || {
                        state
                            .portfolio_images
                            .get()
                            .into_iter()
                            .map(|image| {
                                let src = image.clone();
                                let url = image.clone();
                                view! {
                                    <div class="portfolio-list__row">
                                        <img src=src alt=""/>
                                        <span>{url}</span>
                                        <button
                                            type="button"
                                            class="tag__remove"
                                            on:click=move |_| state.remove_portfolio_image(&image)
                                        >
                                            "\u{00d7}"
                                        </button>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </div>
        </div>

        <div class="card">
            <h2>"Redes Sociais e Website"</h2>
            <TextField
                label="Instagram"
                placeholder="https://instagram.com/seuperfil"
                value=state.instagram_url
            />
            <TextField label="Website" placeholder="https://seusite.com" value=state.website_url/>
        </div>

        <div class="card">
            <h2>"Disponibilidade"</h2>
            <fieldset class="field">
                <legend>"Dias da Semana Disponíveis"</legend>
                <div class="checkbox-grid">
                    {WEEKDAYS
                        .into_iter()
                        .map(|slug| {
                            view! {
                                <label class="checkbox">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            state
                                                .availability_days
                                                .with(|days| days.iter().any(|day| day == slug))
                                        }
                                        on:change=move |_| state.toggle_weekday(slug)
                                    />
                                    {weekday_label(slug)}
                                </label>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </fieldset>
        </div>
    }
}

use super::*;

// ============================================================================
// Salary labels
// ============================================================================

#[test]
fn salary_label_renders_full_band() {
    assert_eq!(salary_label(Some(500.0), Some(800.0)), "€500 - €800");
}

#[test]
fn salary_label_renders_open_ended_bands() {
    assert_eq!(salary_label(Some(500.0), None), "A partir de €500");
    assert_eq!(salary_label(None, Some(800.0)), "Até €800");
}

#[test]
fn salary_label_falls_back_when_absent() {
    assert_eq!(salary_label(None, None), "A combinar");
}

#[test]
fn salary_label_treats_zero_as_absent() {
    assert_eq!(salary_label(Some(0.0), Some(800.0)), "Até €800");
    assert_eq!(salary_label(Some(500.0), Some(0.0)), "A partir de €500");
    assert_eq!(salary_label(Some(0.0), Some(0.0)), "A combinar");
}

#[test]
fn money_eur_keeps_two_decimals() {
    assert_eq!(money_eur(1500.5), "1500.50€");
    assert_eq!(money_eur(0.0), "0.00€");
}

// ============================================================================
// Slug labels
// ============================================================================

#[test]
fn employment_type_labels_are_localized() {
    assert_eq!(employment_type_label("temporary"), "Temporário");
    assert_eq!(employment_type_label("permanent"), "Permanente");
    assert_eq!(employment_type_label("contract"), "Contrato");
}

#[test]
fn experience_level_labels_are_localized() {
    assert_eq!(experience_level_label("entry"), "Iniciante");
    assert_eq!(experience_level_label("mid"), "Intermediário");
    assert_eq!(experience_level_label("senior"), "Sénior");
}

#[test]
fn event_status_labels_are_localized() {
    assert_eq!(event_status_label("active"), "Ativo");
    assert_eq!(event_status_label("completed"), "Concluído");
    assert_eq!(event_status_label("cancelled"), "Cancelado");
}

#[test]
fn event_status_class_covers_known_states() {
    assert_eq!(event_status_class("active"), "badge--active");
    assert_eq!(event_status_class("completed"), "badge--completed");
    assert_eq!(event_status_class("cancelled"), "badge--cancelled");
    assert_eq!(event_status_class("draft"), "badge--neutral");
}

#[test]
fn professional_category_labels_are_localized() {
    assert_eq!(professional_category_label("fotografo"), "Fotógrafo");
    assert_eq!(professional_category_label("dj"), "DJ");
    assert_eq!(professional_category_label("seguranca"), "Segurança");
    assert_eq!(professional_category_label("outros"), "Outros");
}

#[test]
fn weekday_labels_are_localized() {
    assert_eq!(weekday_label("domingo"), "Domingo");
    assert_eq!(weekday_label("terca"), "Terça-feira");
    assert_eq!(weekday_label("sabado"), "Sábado");
}

#[test]
fn unknown_slugs_pass_through() {
    assert_eq!(employment_type_label("freelance"), "freelance");
    assert_eq!(event_status_label("draft"), "draft");
    assert_eq!(professional_category_label("barista"), "barista");
    assert_eq!(weekday_label("feriado"), "feriado");
}

// ============================================================================
// Names and dates
// ============================================================================

#[test]
fn initials_takes_first_two_words() {
    assert_eq!(initials("Maria Santos"), "MS");
    assert_eq!(initials("joão pedro da silva"), "JP");
}

#[test]
fn initials_handles_short_and_empty_names() {
    assert_eq!(initials("Ana"), "A");
    assert_eq!(initials(""), "");
    assert_eq!(initials("   "), "");
}

#[test]
fn date_pt_reorders_iso_dates() {
    assert_eq!(date_pt("2025-06-15"), "15/06/2025");
}

#[test]
fn date_pt_trims_timestamps_to_the_day() {
    assert_eq!(date_pt("2025-06-15T14:30:00+00:00"), "15/06/2025");
}

#[test]
fn date_pt_passes_through_unrecognized_values() {
    assert_eq!(date_pt("amanhã"), "amanhã");
    assert_eq!(date_pt(""), "");
}

// ============================================================================
// Ratings and greetings
// ============================================================================

#[test]
fn star_states_fills_whole_stars_only() {
    assert_eq!(star_states(0.0), [false; 5]);
    assert_eq!(star_states(3.0), [true, true, true, false, false]);
    assert_eq!(star_states(4.8), [true, true, true, true, false]);
    assert_eq!(star_states(5.0), [true; 5]);
}

#[test]
fn greeting_name_strips_the_domain() {
    assert_eq!(greeting_name("maria@example.com"), "maria");
    assert_eq!(greeting_name("no-domain"), "no-domain");
}

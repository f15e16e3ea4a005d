//! Display formatting for marketplace values.
//!
//! All user-facing copy is European Portuguese, matching the product's
//! market. Helpers fall back to the raw value for unknown slugs so new
//! backend values degrade visibly instead of breaking rendering.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Salary band label. Zero means "not provided", so a `0 - 800` band reads
/// as "Até €800".
pub fn salary_label(min: Option<f64>, max: Option<f64>) -> String {
    let min = min.filter(|value| *value != 0.0);
    let max = max.filter(|value| *value != 0.0);
    match (min, max) {
        (Some(min), Some(max)) => format!("€{min} - €{max}"),
        (Some(min), None) => format!("A partir de €{min}"),
        (None, Some(max)) => format!("Até €{max}"),
        (None, None) => "A combinar".to_owned(),
    }
}

/// Euro amount with cents, suffix notation: `1500.50€`.
pub fn money_eur(value: f64) -> String {
    format!("{value:.2}€")
}

pub fn employment_type_label(value: &str) -> &str {
    match value {
        "temporary" => "Temporário",
        "permanent" => "Permanente",
        "contract" => "Contrato",
        other => other,
    }
}

pub fn experience_level_label(value: &str) -> &str {
    match value {
        "entry" => "Iniciante",
        "mid" => "Intermediário",
        "senior" => "Sénior",
        other => other,
    }
}

pub fn event_status_label(status: &str) -> &str {
    match status {
        "active" => "Ativo",
        "completed" => "Concluído",
        "cancelled" => "Cancelado",
        other => other,
    }
}

/// CSS badge modifier for an event status.
pub fn event_status_class(status: &str) -> &'static str {
    match status {
        "active" => "badge--active",
        "completed" => "badge--completed",
        "cancelled" => "badge--cancelled",
        _ => "badge--neutral",
    }
}

/// Professional category slugs as stored in the backend, in display order.
pub const PROFESSIONAL_CATEGORIES: [&str; 11] = [
    "fotografo",
    "videomaker",
    "dj",
    "decorador",
    "buffet",
    "musico",
    "cerimonialista",
    "florista",
    "maquiador",
    "seguranca",
    "outros",
];

pub fn professional_category_label(slug: &str) -> &str {
    match slug {
        "fotografo" => "Fotógrafo",
        "videomaker" => "Videomaker",
        "dj" => "DJ",
        "decorador" => "Decorador",
        "buffet" => "Buffet",
        "musico" => "Músico",
        "cerimonialista" => "Cerimonialista",
        "florista" => "Florista",
        "maquiador" => "Maquiador",
        "seguranca" => "Segurança",
        "outros" => "Outros",
        other => other,
    }
}

/// Weekday slugs as stored in `availability_days`, Sunday first.
pub const WEEKDAYS: [&str; 7] = [
    "domingo", "segunda", "terca", "quarta", "quinta", "sexta", "sabado",
];

pub fn weekday_label(slug: &str) -> &str {
    match slug {
        "domingo" => "Domingo",
        "segunda" => "Segunda-feira",
        "terca" => "Terça-feira",
        "quarta" => "Quarta-feira",
        "quinta" => "Quinta-feira",
        "sexta" => "Sexta-feira",
        "sabado" => "Sábado",
        other => other,
    }
}

/// First letters of the first two name words, uppercased, for avatar
/// fallbacks.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// `YYYY-MM-DD` (or an ISO timestamp starting with it) as `DD/MM/YYYY`.
/// Anything else passes through unchanged.
pub fn date_pt(value: &str) -> String {
    let day_part = value.split('T').next().unwrap_or(value);
    let mut parts = day_part.splitn(3, '-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day))
            if year.len() == 4 && month.len() == 2 && day.len() == 2 =>
        {
            format!("{day}/{month}/{year}")
        }
        _ => value.to_owned(),
    }
}

/// Which of the five rating stars are filled for `rating`.
pub fn star_states(rating: f64) -> [bool; 5] {
    let mut states = [false; 5];
    for (index, state) in states.iter_mut().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        {
            *state = (index as f64) + 1.0 <= rating;
        }
    }
    states
}

/// Display name for the dashboard greeting: the part before the `@`.
pub fn greeting_name(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

//! Form-input validation primitives.
//!
//! Field-level checks shared by the create/edit forms. Page modules compose
//! these into per-form validation with their own messages.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Upper bound for avatar uploads.
pub const MAX_AVATAR_BYTES: f64 = 5.0 * 1024.0 * 1024.0;

/// Whether `value` has at least `min` characters after trimming.
pub fn has_min_len(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}

/// Loose email shape check: one `@` with a dotted domain and no spaces.
/// The provider does the authoritative validation.
pub fn is_valid_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain.split('.').count() >= 2 && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Whether `end` is strictly after `start`. Both are zero-padded 24h
/// `HH:MM` strings, so byte order matches clock order.
pub fn end_after_start(start: &str, end: &str) -> bool {
    !start.is_empty() && !end.is_empty() && end > start
}

/// Whether `date` lies before `today`. Both are `YYYY-MM-DD`, so byte
/// order matches calendar order.
pub fn date_in_past(date: &str, today: &str) -> bool {
    !date.is_empty() && date < today
}

/// Parse an optional money input. Empty or unparsable entries count as
/// "not provided", matching how the forms treat them.
pub fn parse_money(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Parse an optional whole-number input, e.g. participant limits.
pub fn parse_count(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

/// Reject oversized or non-image avatar files with the message to toast.
/// Size is checked first.
pub fn avatar_file_error(size_bytes: f64, mime: &str) -> Option<&'static str> {
    if size_bytes > MAX_AVATAR_BYTES {
        return Some("A imagem deve ter no máximo 5MB.");
    }
    if !mime.starts_with("image/") {
        return Some("Apenas imagens são permitidas.");
    }
    None
}

/// Empty trimmed strings become `None`, mirroring nullable text columns.
pub fn optional_text(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Split a textarea into one trimmed entry per non-empty line. `None` when
/// nothing remains, mirroring nullable array columns.
pub fn lines_to_list(input: &str) -> Option<Vec<String>> {
    let entries: Vec<String> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect();
    if entries.is_empty() { None } else { Some(entries) }
}

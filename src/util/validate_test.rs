use super::*;

#[test]
fn min_len_ignores_surrounding_whitespace() {
    assert!(has_min_len("abc", 3));
    assert!(has_min_len("  abc  ", 3));
    assert!(!has_min_len("ab", 3));
    assert!(!has_min_len("   ", 1));
}

#[test]
fn email_shape_accepts_plain_addresses() {
    assert!(is_valid_email("a@b.com"));
    assert!(is_valid_email("maria.silva@example.co.uk"));
}

#[test]
fn email_shape_rejects_malformed_addresses() {
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("semArroba.com"));
    assert!(!is_valid_email("@dominio.com"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("a@.com"));
    assert!(!is_valid_email("a b@c.com"));
    assert!(!is_valid_email("a@b@c.com"));
}

#[test]
fn end_after_start_compares_clock_times() {
    assert!(end_after_start("09:00", "17:30"));
    assert!(!end_after_start("17:30", "09:00"));
    assert!(!end_after_start("12:00", "12:00"));
    assert!(!end_after_start("", "12:00"));
}

#[test]
fn date_in_past_compares_calendar_days() {
    assert!(date_in_past("2026-08-20", "2026-08-21"));
    assert!(!date_in_past("2026-08-21", "2026-08-21"));
    assert!(!date_in_past("2026-08-22", "2026-08-21"));
    assert!(!date_in_past("", "2026-08-21"));
}

#[test]
fn parse_money_treats_blank_and_garbage_as_absent() {
    assert_eq!(parse_money("1500.50"), Some(1500.5));
    assert_eq!(parse_money("  0  "), Some(0.0));
    assert_eq!(parse_money(""), None);
    assert_eq!(parse_money("abc"), None);
    assert_eq!(parse_money("NaN"), None);
}

#[test]
fn parse_count_only_accepts_whole_numbers() {
    assert_eq!(parse_count("120"), Some(120));
    assert_eq!(parse_count("12.5"), None);
    assert_eq!(parse_count(""), None);
}

#[test]
fn avatar_rules_reject_oversized_and_non_image_files() {
    assert_eq!(avatar_file_error(1024.0, "image/png"), None);
    assert_eq!(
        avatar_file_error(1024.0, "application/pdf"),
        Some("Apenas imagens são permitidas.")
    );
    assert_eq!(
        avatar_file_error(MAX_AVATAR_BYTES + 1.0, "image/jpeg"),
        Some("A imagem deve ter no máximo 5MB.")
    );
}

#[test]
fn avatar_size_is_checked_before_type() {
    assert_eq!(
        avatar_file_error(MAX_AVATAR_BYTES + 1.0, "application/pdf"),
        Some("A imagem deve ter no máximo 5MB.")
    );
}

#[test]
fn optional_text_trims_to_none() {
    assert_eq!(optional_text("  Lisboa  "), Some("Lisboa".to_owned()));
    assert_eq!(optional_text("   "), None);
}

#[test]
fn lines_to_list_drops_blank_lines() {
    let input = "Experiência prévia\n\n  Inglês fluente  \n";
    assert_eq!(
        lines_to_list(input),
        Some(vec!["Experiência prévia".to_owned(), "Inglês fluente".to_owned()])
    );
    assert_eq!(lines_to_list("\n  \n"), None);
}

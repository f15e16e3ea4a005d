use super::*;

fn valid_draft() -> EventDraft {
    EventDraft {
        title: "Casamento Silva & Costa".to_owned(),
        description: "Cerimónia e copo de água".to_owned(),
        date: "2026-09-12".to_owned(),
        start_time: "16:00".to_owned(),
        end_time: "23:30".to_owned(),
        location: "Quinta do Lago, Lisboa".to_owned(),
        category: "Casamento".to_owned(),
        max_participants: "150".to_owned(),
        price: "25.00".to_owned(),
        image_url: String::new(),
        contact_email: "noivos@exemplo.com".to_owned(),
        contact_phone: String::new(),
        application_deadline: "2026-09-01".to_owned(),
        required_professionals: vec!["fotografo".to_owned(), "dj".to_owned()],
        status: "active".to_owned(),
    }
}

const TODAY: &str = "2026-08-21";

// ============================================================
// Validation
// ============================================================

#[test]
fn complete_draft_passes_validation() {
    assert_eq!(validate_event_draft(&valid_draft(), true, TODAY), Ok(()));
}

#[test]
fn optional_fields_may_all_be_blank() {
    let draft = EventDraft {
        description: String::new(),
        category: String::new(),
        max_participants: String::new(),
        price: String::new(),
        contact_email: String::new(),
        application_deadline: String::new(),
        required_professionals: Vec::new(),
        ..valid_draft()
    };
    assert_eq!(validate_event_draft(&draft, true, TODAY), Ok(()));
}

#[test]
fn short_title_is_rejected_first() {
    let draft = EventDraft {
        title: "ab".to_owned(),
        date: String::new(),
        ..valid_draft()
    };
    assert_eq!(
        validate_event_draft(&draft, true, TODAY),
        Err("Título deve ter pelo menos 3 caracteres")
    );
}

#[test]
fn required_fields_report_in_form_order() {
    let mut draft = EventDraft {
        date: String::new(),
        ..valid_draft()
    };
    assert_eq!(
        validate_event_draft(&draft, true, TODAY),
        Err("Data é obrigatória")
    );

    draft = EventDraft {
        start_time: String::new(),
        ..valid_draft()
    };
    assert_eq!(
        validate_event_draft(&draft, true, TODAY),
        Err("Hora de início é obrigatória")
    );

    draft = EventDraft {
        end_time: String::new(),
        ..valid_draft()
    };
    assert_eq!(
        validate_event_draft(&draft, true, TODAY),
        Err("Hora de fim é obrigatória")
    );

    draft = EventDraft {
        location: "   ".to_owned(),
        ..valid_draft()
    };
    assert_eq!(
        validate_event_draft(&draft, true, TODAY),
        Err("Local é obrigatório")
    );
}

#[test]
fn end_time_must_follow_start_time() {
    let draft = EventDraft {
        start_time: "18:00".to_owned(),
        end_time: "09:00".to_owned(),
        ..valid_draft()
    };
    assert_eq!(
        validate_event_draft(&draft, true, TODAY),
        Err("A hora de fim deve ser posterior à hora de início.")
    );
}

#[test]
fn past_date_is_rejected_only_on_creation() {
    let draft = EventDraft {
        date: "2026-08-01".to_owned(),
        ..valid_draft()
    };
    assert_eq!(
        validate_event_draft(&draft, true, TODAY),
        Err("A data do evento não pode ser no passado.")
    );
    assert_eq!(validate_event_draft(&draft, false, TODAY), Ok(()));
}

#[test]
fn today_counts_as_future() {
    let draft = EventDraft {
        date: TODAY.to_owned(),
        ..valid_draft()
    };
    assert_eq!(validate_event_draft(&draft, true, TODAY), Ok(()));
}

// ============================================================
// Insert payload
// ============================================================

#[test]
fn insert_payload_carries_the_full_draft() {
    let insert = build_event_insert(&valid_draft(), "user-1");
    assert_eq!(insert.title, "Casamento Silva & Costa");
    assert_eq!(insert.description.as_deref(), Some("Cerimónia e copo de água"));
    assert_eq!(insert.date, "2026-09-12");
    assert_eq!(insert.max_participants, Some(150));
    assert_eq!(insert.price, 25.0);
    assert_eq!(insert.status, "active");
    assert_eq!(insert.contact_email.as_deref(), Some("noivos@exemplo.com"));
    assert_eq!(insert.contact_phone, None);
    assert_eq!(
        insert.required_professionals,
        Some(serde_json::json!(["fotografo", "dj"]))
    );
    assert_eq!(insert.user_id, "user-1");
}

#[test]
fn insert_payload_defaults_blank_optionals() {
    let draft = EventDraft {
        title: "  Workshop de Fotografia  ".to_owned(),
        description: "   ".to_owned(),
        category: String::new(),
        max_participants: String::new(),
        price: String::new(),
        image_url: String::new(),
        contact_email: String::new(),
        application_deadline: String::new(),
        required_professionals: Vec::new(),
        ..valid_draft()
    };
    let insert = build_event_insert(&draft, "user-1");
    assert_eq!(insert.title, "Workshop de Fotografia");
    assert_eq!(insert.description, None);
    assert_eq!(insert.category, None);
    assert_eq!(insert.max_participants, None);
    assert_eq!(insert.price, 0.0);
    assert_eq!(insert.image_url, None);
    assert_eq!(insert.required_professionals, None);
}

#[test]
fn insert_payload_omits_absent_columns() {
    let draft = EventDraft {
        description: String::new(),
        category: String::new(),
        max_participants: String::new(),
        image_url: String::new(),
        contact_email: String::new(),
        contact_phone: String::new(),
        application_deadline: String::new(),
        required_professionals: Vec::new(),
        ..valid_draft()
    };
    let body = serde_json::to_value(build_event_insert(&draft, "user-1")).unwrap();
    let object = body.as_object().unwrap();
    assert!(!object.contains_key("description"));
    assert!(!object.contains_key("required_professionals"));
    assert!(object.contains_key("price"));
    assert!(object.contains_key("status"));
}

// ============================================================
// Update payload
// ============================================================

#[test]
fn update_payload_writes_nulls_for_cleared_fields() {
    let draft = EventDraft {
        description: String::new(),
        category: String::new(),
        max_participants: String::new(),
        status: "completed".to_owned(),
        ..valid_draft()
    };
    let update = build_event_update(&draft, "2026-08-21T10:00:00.000Z".to_owned());
    assert_eq!(update.description, None);
    assert_eq!(update.category, None);
    assert_eq!(update.max_participants, None);
    assert_eq!(update.status, "completed");
    assert_eq!(update.updated_at, "2026-08-21T10:00:00.000Z");

    let body = serde_json::to_value(&update).unwrap();
    assert!(body.as_object().unwrap().contains_key("description"));
    assert_eq!(body["description"], serde_json::Value::Null);
}

use super::*;

fn valid_draft() -> ProfessionalDraft {
    ProfessionalDraft {
        name: "Maria Silva".to_owned(),
        email: "maria@exemplo.com".to_owned(),
        phone: "(11) 99999-9999".to_owned(),
        bio: "Fotógrafa de casamentos há dez anos".to_owned(),
        category: "fotografo".to_owned(),
        specialties: vec!["Casamentos".to_owned(), "Retratos".to_owned()],
        location: "Lisboa".to_owned(),
        price_range: "€500 - €1.500".to_owned(),
        min_price: "500".to_owned(),
        max_price: "1500".to_owned(),
        portfolio_images: vec!["https://exemplo.com/foto1.jpg".to_owned()],
        instagram_url: "https://instagram.com/maria".to_owned(),
        website_url: String::new(),
        availability_days: vec!["sexta".to_owned(), "sabado".to_owned()],
    }
}

// ============================================================
// Validation
// ============================================================

#[test]
fn complete_draft_passes_validation() {
    assert_eq!(validate_professional_draft(&valid_draft()), Ok(()));
}

#[test]
fn any_missing_required_field_shares_one_message() {
    for missing in [
        ProfessionalDraft { name: "  ".to_owned(), ..valid_draft() },
        ProfessionalDraft { email: String::new(), ..valid_draft() },
        ProfessionalDraft { category: String::new(), ..valid_draft() },
        ProfessionalDraft { location: String::new(), ..valid_draft() },
    ] {
        assert_eq!(
            validate_professional_draft(&missing),
            Err("Preencha todos os campos obrigatórios")
        );
    }
}

#[test]
fn optional_fields_may_all_be_blank() {
    let draft = ProfessionalDraft {
        phone: String::new(),
        bio: String::new(),
        specialties: Vec::new(),
        price_range: String::new(),
        min_price: String::new(),
        max_price: String::new(),
        portfolio_images: Vec::new(),
        instagram_url: String::new(),
        availability_days: Vec::new(),
        ..valid_draft()
    };
    assert_eq!(validate_professional_draft(&draft), Ok(()));
}

// ============================================================
// Payloads
// ============================================================

#[test]
fn insert_payload_carries_the_full_draft() {
    let insert = build_professional_insert(&valid_draft(), "user-1");
    assert_eq!(insert.name, "Maria Silva");
    assert_eq!(insert.category, "fotografo");
    assert_eq!(insert.min_price, Some(500.0));
    assert_eq!(insert.max_price, Some(1500.0));
    assert_eq!(
        insert.specialties,
        Some(vec!["Casamentos".to_owned(), "Retratos".to_owned()])
    );
    assert_eq!(
        insert.availability_days,
        Some(vec!["sexta".to_owned(), "sabado".to_owned()])
    );
    assert_eq!(insert.website_url, None);
    assert_eq!(insert.user_id, "user-1");
}

#[test]
fn insert_payload_omits_empty_lists() {
    let draft = ProfessionalDraft {
        specialties: Vec::new(),
        portfolio_images: Vec::new(),
        availability_days: Vec::new(),
        phone: String::new(),
        ..valid_draft()
    };
    let body = serde_json::to_value(build_professional_insert(&draft, "user-1")).unwrap();
    let object = body.as_object().unwrap();
    assert!(!object.contains_key("specialties"));
    assert!(!object.contains_key("portfolio_images"));
    assert!(!object.contains_key("availability_days"));
    assert!(!object.contains_key("phone"));
}

#[test]
fn update_payload_writes_nulls_for_cleared_fields() {
    let draft = ProfessionalDraft {
        bio: String::new(),
        specialties: Vec::new(),
        max_price: String::new(),
        ..valid_draft()
    };
    let update = build_professional_update(&draft, "2026-08-21T10:00:00.000Z".to_owned());
    assert_eq!(update.bio, None);
    assert_eq!(update.specialties, None);
    assert_eq!(update.max_price, None);
    assert_eq!(update.updated_at, "2026-08-21T10:00:00.000Z");

    let body = serde_json::to_value(&update).unwrap();
    let object = body.as_object().unwrap();
    assert_eq!(object["bio"], serde_json::Value::Null);
    assert_eq!(object["specialties"], serde_json::Value::Null);
}

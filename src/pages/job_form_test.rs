use super::*;

fn valid_draft() -> JobDraft {
    JobDraft {
        title: "Garçon para Evento Corporativo".to_owned(),
        description: "Serviço de mesa durante o jantar de gala".to_owned(),
        category: "Garçons & Empregados".to_owned(),
        location: "Lisboa".to_owned(),
        employment_type: "temporary".to_owned(),
        experience_level: "entry".to_owned(),
        salary_min: "80".to_owned(),
        salary_max: "120".to_owned(),
        requirements: "Experiência prévia em eventos\nDisponibilidade aos fins de semana".to_owned(),
        benefits: "Alimentação incluída\n\nTransporte fornecido".to_owned(),
        start_date: "2026-09-05".to_owned(),
        end_date: String::new(),
        application_deadline: "2026-09-01".to_owned(),
        max_applicants: "10".to_owned(),
        contact_email: "rh@empresa.com".to_owned(),
        contact_phone: String::new(),
        is_featured: true,
    }
}

// ============================================================
// Validation
// ============================================================

#[test]
fn complete_draft_passes_validation() {
    assert_eq!(validate_job_draft(&valid_draft()), Ok(()));
}

#[test]
fn required_fields_report_in_form_order() {
    let mut draft = JobDraft {
        title: "  ".to_owned(),
        ..valid_draft()
    };
    assert_eq!(validate_job_draft(&draft), Err("Título é obrigatório"));

    draft = JobDraft {
        category: String::new(),
        ..valid_draft()
    };
    assert_eq!(validate_job_draft(&draft), Err("Categoria é obrigatória"));

    draft = JobDraft {
        location: String::new(),
        ..valid_draft()
    };
    assert_eq!(validate_job_draft(&draft), Err("Localização é obrigatória"));
}

#[test]
fn contact_email_is_optional_but_checked_when_present() {
    let mut draft = JobDraft {
        contact_email: String::new(),
        ..valid_draft()
    };
    assert_eq!(validate_job_draft(&draft), Ok(()));

    draft = JobDraft {
        contact_email: "naoEmail".to_owned(),
        ..valid_draft()
    };
    assert_eq!(validate_job_draft(&draft), Err("Email inválido"));
}

// ============================================================
// Payloads
// ============================================================

#[test]
fn insert_payload_splits_list_fields_per_line() {
    let insert = build_job_insert(&valid_draft(), "user-1");
    assert_eq!(
        insert.requirements,
        Some(vec![
            "Experiência prévia em eventos".to_owned(),
            "Disponibilidade aos fins de semana".to_owned(),
        ])
    );
    assert_eq!(
        insert.benefits,
        Some(vec![
            "Alimentação incluída".to_owned(),
            "Transporte fornecido".to_owned(),
        ])
    );
    assert_eq!(insert.salary_min, Some(80.0));
    assert_eq!(insert.salary_max, Some(120.0));
    assert_eq!(insert.end_date, None);
    assert_eq!(insert.max_applicants, Some(10));
    assert!(insert.is_featured);
    assert_eq!(insert.status, "active");
    assert_eq!(insert.user_id, "user-1");
}

#[test]
fn insert_payload_omits_blank_optionals() {
    let draft = JobDraft {
        description: String::new(),
        salary_min: String::new(),
        salary_max: String::new(),
        requirements: "   \n  ".to_owned(),
        benefits: String::new(),
        start_date: String::new(),
        application_deadline: String::new(),
        max_applicants: String::new(),
        contact_email: String::new(),
        is_featured: false,
        ..valid_draft()
    };
    let body = serde_json::to_value(build_job_insert(&draft, "user-1")).unwrap();
    let object = body.as_object().unwrap();
    assert!(!object.contains_key("description"));
    assert!(!object.contains_key("requirements"));
    assert!(!object.contains_key("salary_min"));
    assert_eq!(object["is_featured"], serde_json::json!(false));
}

#[test]
fn update_payload_writes_nulls_for_cleared_fields() {
    let draft = JobDraft {
        description: String::new(),
        requirements: String::new(),
        salary_max: String::new(),
        contact_email: String::new(),
        ..valid_draft()
    };
    let update = build_job_update(&draft);
    assert_eq!(update.description, None);
    assert_eq!(update.requirements, None);
    assert_eq!(update.salary_max, None);
    assert_eq!(update.salary_min, Some(80.0));

    let body = serde_json::to_value(&update).unwrap();
    let object = body.as_object().unwrap();
    assert_eq!(object["description"], serde_json::Value::Null);
    assert!(!object.contains_key("updated_at"));
}

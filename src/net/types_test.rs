use super::*;

// Decoding of provider grants must tolerate both provider generations:
// older ones omit `expires_at`.

#[test]
fn token_grant_decodes_without_expires_at() {
    let raw = r#"{
        "access_token": "at",
        "token_type": "bearer",
        "expires_in": 3600,
        "refresh_token": "rt",
        "user": { "id": "u1", "email": "a@b.com", "role": "authenticated" }
    }"#;
    let grant: TokenGrant = serde_json::from_str(raw).unwrap();
    assert_eq!(grant.expires_at, None);
    assert_eq!(grant.expires_in, 3600);
    assert_eq!(grant.user.email.as_deref(), Some("a@b.com"));
}

#[test]
fn token_grant_decodes_with_expires_at() {
    let raw = r#"{
        "access_token": "at",
        "expires_in": 3600,
        "expires_at": 1750000000,
        "refresh_token": "rt",
        "user": { "id": "u1", "email": null }
    }"#;
    let grant: TokenGrant = serde_json::from_str(raw).unwrap();
    assert_eq!(grant.expires_at, Some(1_750_000_000));
    assert_eq!(grant.user.email, None);
}

#[test]
fn event_row_decodes_gateway_json() {
    let raw = r#"{
        "id": "e1", "title": "Casamento", "description": null,
        "date": "2026-09-12", "start_time": "16:00", "end_time": "23:00",
        "location": "Lisboa", "category": "casamento",
        "max_participants": 120, "current_participants": 0,
        "price": 1500.5, "image_url": null, "status": "active",
        "contact_email": null, "contact_phone": null,
        "application_deadline": null,
        "required_professionals": ["fotografo", "dj"],
        "user_id": "u1",
        "created_at": "2026-08-01T10:00:00Z", "updated_at": "2026-08-01T10:00:00Z"
    }"#;
    let event: Event = serde_json::from_str(raw).unwrap();
    assert_eq!(event.title, "Casamento");
    assert_eq!(event.price, Some(1500.5));
    assert_eq!(event.status.as_deref(), Some("active"));
}

#[test]
fn insert_payload_omits_absent_optionals() {
    let insert = EventInsert {
        title: "Festa".to_owned(),
        description: None,
        date: "2026-09-12".to_owned(),
        start_time: "16:00".to_owned(),
        end_time: "23:00".to_owned(),
        location: "Porto".to_owned(),
        category: None,
        max_participants: None,
        price: 0.0,
        image_url: None,
        status: "active".to_owned(),
        contact_email: None,
        contact_phone: None,
        application_deadline: None,
        required_professionals: None,
        user_id: "u1".to_owned(),
    };
    let value = serde_json::to_value(&insert).unwrap();
    let object = value.as_object().unwrap();
    // Absent optionals must be omitted, not serialized as null, so the
    // database applies its own column defaults.
    assert!(!object.contains_key("description"));
    assert!(!object.contains_key("max_participants"));
    assert_eq!(object["status"], "active");
}

#[test]
fn job_update_serializes_explicit_nulls_to_clear_values() {
    let update = JobUpdate {
        title: "Barman".to_owned(),
        description: None,
        category: "Barmen & Bartenders".to_owned(),
        location: "Lisboa".to_owned(),
        employment_type: "temporary".to_owned(),
        experience_level: "entry".to_owned(),
        requirements: None,
        benefits: None,
        salary_min: None,
        salary_max: None,
        start_date: None,
        end_date: None,
        application_deadline: None,
        max_applicants: None,
        contact_email: None,
        contact_phone: None,
        is_featured: false,
    };
    let value = serde_json::to_value(&update).unwrap();
    let object = value.as_object().unwrap();
    // Updates must write nulls so a cleared field actually clears.
    assert!(object.contains_key("salary_min"));
    assert!(object["salary_min"].is_null());
}

use super::*;

fn sample_event() -> Event {
    Event {
        id: "11111111-1111-1111-1111-111111111111".to_owned(),
        title: "Casamento na Quinta".to_owned(),
        description: None,
        date: "2025-09-20".to_owned(),
        start_time: "16:00".to_owned(),
        end_time: "23:00".to_owned(),
        location: "Sintra".to_owned(),
        category: Some("casamento".to_owned()),
        max_participants: None,
        current_participants: None,
        price: Some(0.0),
        image_url: None,
        status: Some("active".to_owned()),
        contact_email: None,
        contact_phone: None,
        application_deadline: None,
        required_professionals: None,
        user_id: "22222222-2222-2222-2222-222222222222".to_owned(),
        created_at: "2025-06-01T10:00:00+00:00".to_owned(),
        updated_at: "2025-06-01T10:00:00+00:00".to_owned(),
    }
}

fn sample_job() -> Job {
    Job {
        id: "33333333-3333-3333-3333-333333333333".to_owned(),
        title: "Barman para festival".to_owned(),
        description: Some("Servir cocktails no bar principal".to_owned()),
        category: "Bartenders".to_owned(),
        location: "Porto".to_owned(),
        employment_type: "temporary".to_owned(),
        experience_level: Some("entry".to_owned()),
        salary_min: Some(80.0),
        salary_max: Some(120.0),
        requirements: None,
        benefits: None,
        start_date: None,
        end_date: None,
        application_deadline: None,
        max_applicants: None,
        current_applicants: None,
        contact_email: None,
        contact_phone: None,
        is_featured: Some(false),
        status: Some("active".to_owned()),
        user_id: "22222222-2222-2222-2222-222222222222".to_owned(),
        created_at: "2025-06-01T10:00:00+00:00".to_owned(),
        updated_at: "2025-06-01T10:00:00+00:00".to_owned(),
    }
}

fn sample_professional() -> Professional {
    Professional {
        id: "44444444-4444-4444-4444-444444444444".to_owned(),
        name: "Maria Santos".to_owned(),
        email: "maria@example.com".to_owned(),
        phone: None,
        bio: Some("Fotografia documental".to_owned()),
        category: "fotografo".to_owned(),
        specialties: Some(vec!["Casamentos".to_owned(), "Retratos".to_owned()]),
        location: "Lisboa".to_owned(),
        price_range: None,
        min_price: None,
        max_price: None,
        portfolio_images: None,
        instagram_url: None,
        website_url: None,
        rating: Some(4.8),
        total_reviews: Some(12),
        is_verified: Some(true),
        is_active: Some(true),
        availability_days: Some(vec!["sexta".to_owned(), "sabado".to_owned()]),
        user_id: "55555555-5555-5555-5555-555555555555".to_owned(),
        created_at: "2025-06-01T10:00:00+00:00".to_owned(),
        updated_at: "2025-06-01T10:00:00+00:00".to_owned(),
    }
}

// ============================================================================
// Events
// ============================================================================

#[test]
fn event_empty_search_matches_everything() {
    assert!(event_matches(&sample_event(), ""));
}

#[test]
fn event_search_is_case_insensitive_across_fields() {
    let event = sample_event();
    assert!(event_matches(&event, "QUINTA"));
    assert!(event_matches(&event, "sintra"));
    assert!(event_matches(&event, "Casamento"));
}

#[test]
fn event_search_misses_unrelated_terms() {
    assert!(!event_matches(&sample_event(), "batizado"));
}

#[test]
fn event_without_category_still_searches_other_fields() {
    let mut event = sample_event();
    event.category = None;
    assert!(event_matches(&event, "sintra"));
    assert!(!event_matches(&event, "casamento"));
}

// ============================================================================
// Jobs
// ============================================================================

#[test]
fn job_empty_filters_match_everything() {
    assert!(job_matches(&sample_job(), "", FILTER_ALL, FILTER_ALL));
}

#[test]
fn job_search_covers_title_description_and_location() {
    let job = sample_job();
    assert!(job_matches(&job, "barman", FILTER_ALL, FILTER_ALL));
    assert!(job_matches(&job, "cocktails", FILTER_ALL, FILTER_ALL));
    assert!(job_matches(&job, "porto", FILTER_ALL, FILTER_ALL));
    assert!(!job_matches(&job, "seguranças", FILTER_ALL, FILTER_ALL));
}

#[test]
fn job_category_select_is_exact() {
    let job = sample_job();
    assert!(job_matches(&job, "", "Bartenders", FILTER_ALL));
    assert!(!job_matches(&job, "", "Fotografia", FILTER_ALL));
}

#[test]
fn job_employment_type_select_is_exact() {
    let job = sample_job();
    assert!(job_matches(&job, "", FILTER_ALL, "temporary"));
    assert!(!job_matches(&job, "", FILTER_ALL, "permanent"));
}

#[test]
fn job_filters_combine_conjunctively() {
    let job = sample_job();
    assert!(job_matches(&job, "porto", "Bartenders", "temporary"));
    assert!(!job_matches(&job, "porto", "Bartenders", "permanent"));
}

// ============================================================================
// Professionals
// ============================================================================

#[test]
fn professional_search_covers_specialties() {
    let professional = sample_professional();
    assert!(professional_matches(
        &professional,
        "retratos",
        FILTER_ALL,
        FILTER_ALL
    ));
}

#[test]
fn professional_search_does_not_cover_bio() {
    assert!(!professional_matches(
        &sample_professional(),
        "documental",
        FILTER_ALL,
        FILTER_ALL
    ));
}

#[test]
fn professional_category_select_is_exact() {
    let professional = sample_professional();
    assert!(professional_matches(&professional, "", "fotografo", FILTER_ALL));
    assert!(!professional_matches(&professional, "", "dj", FILTER_ALL));
}

#[test]
fn professional_weekday_matches_availability_slugs() {
    let professional = sample_professional();
    assert!(professional_matches(&professional, "", FILTER_ALL, "sexta"));
    assert!(!professional_matches(&professional, "", FILTER_ALL, "domingo"));
}

#[test]
fn professional_without_availability_fails_weekday_filter() {
    let mut professional = sample_professional();
    professional.availability_days = None;
    assert!(!professional_matches(&professional, "", FILTER_ALL, "sexta"));
    assert!(professional_matches(&professional, "", FILTER_ALL, FILTER_ALL));
}

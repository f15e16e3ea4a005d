use super::*;

#[test]
fn grant_endpoints_target_the_auth_service() {
    assert_eq!(
        password_grant_endpoint(),
        format!("{PROJECT_URL}/auth/v1/token?grant_type=password")
    );
    assert_eq!(
        refresh_grant_endpoint(),
        format!("{PROJECT_URL}/auth/v1/token?grant_type=refresh_token")
    );
}

#[test]
fn table_endpoint_appends_query_string() {
    assert_eq!(
        table_endpoint("events", "select=*&order=date.asc"),
        format!("{PROJECT_URL}/rest/v1/events?select=*&order=date.asc")
    );
}

#[test]
fn table_endpoint_omits_question_mark_without_query() {
    assert_eq!(table_endpoint("events", ""), format!("{PROJECT_URL}/rest/v1/events"));
}

#[test]
fn storage_public_url_inserts_public_segment() {
    assert_eq!(
        storage_public_url("avatars", "u1/avatar.png"),
        format!("{PROJECT_URL}/storage/v1/object/public/avatars/u1/avatar.png")
    );
}

#[test]
fn session_storage_key_derives_from_project_ref() {
    assert_eq!(session_storage_key(), format!("sb-{PROJECT_REF}-auth-token"));
}

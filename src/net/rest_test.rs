use super::*;

// ============================================================
// Query builders
// ============================================================

#[test]
fn list_queries_match_gateway_filters() {
    assert_eq!(EVENTS_LIST_QUERY, "select=*&order=date.asc");
    assert_eq!(JOBS_LIST_QUERY, "select=*&status=eq.active&order=created_at.desc");
    assert_eq!(
        PROFESSIONALS_LIST_QUERY,
        "select=*&is_active=eq.true&order=created_at.desc"
    );
}

#[test]
fn owned_row_query_filters_by_id_and_owner() {
    assert_eq!(owned_row_query("e1", "u1"), "select=*&id=eq.e1&user_id=eq.u1");
    assert_eq!(owned_filter("e1", "u1"), "id=eq.e1&user_id=eq.u1");
}

#[test]
fn row_and_user_queries_filter_single_column() {
    assert_eq!(row_query("j1"), "select=*&id=eq.j1");
    assert_eq!(id_filter("j1"), "id=eq.j1");
    assert_eq!(user_filter("u1"), "user_id=eq.u1");
    assert_eq!(user_rows_query("u1"), "select=*&user_id=eq.u1");
}

#[test]
fn own_professionals_query_selects_slim_columns() {
    assert_eq!(
        own_professionals_query("u1"),
        "select=id,name,category&user_id=eq.u1&is_active=eq.true"
    );
}

// ============================================================
// Error mapping
// ============================================================

#[test]
fn rest_error_keeps_backend_code_and_message() {
    let body = r#"{"code":"23505","details":"Key (event_id, professional_id) already exists.","hint":null,"message":"duplicate key value violates unique constraint \"uniq_event_application\""}"#;
    let err = rest_error(409, body);
    assert!(err.is_unique_violation());
    match err {
        ApiError::Http { status, message, .. } => {
            assert_eq!(status, 409);
            assert!(message.starts_with("duplicate key value"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn rest_error_falls_back_to_status_for_opaque_bodies() {
    let err = rest_error(503, "upstream timeout");
    assert_eq!(
        err,
        ApiError::Http {
            status: 503,
            code: None,
            message: "request failed: 503".to_owned()
        }
    );
}

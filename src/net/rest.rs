//! Database-gateway calls for marketplace rows.
//!
//! Browser builds (csr) issue real HTTP calls via `gloo-net`; native builds
//! get stubs returning [`ApiError::Unsupported`].
//!
//! DESIGN
//! ======
//! One function per table operation, mirroring the gateway's row filters in
//! plain query strings. Mutations on owned rows carry a `user_id` filter
//! exactly where ownership matters client-side; row-level policies enforce
//! the same rule server-side regardless.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "rest_test.rs"]
mod rest_test;

use super::config;
use super::error::ApiError;
use super::types::{
    Event, EventApplicationInsert, EventInsert, EventUpdate, Job, JobInsert, JobUpdate,
    OwnProfessional, Professional, ProfessionalInsert, ProfessionalUpdate, Profile, ProfileUpsert,
};

// ============================================================
// Events
// ============================================================

/// Fetch every event, soonest date first.
///
/// # Errors
///
/// Returns an error on transport failure or a non-success gateway response.
pub async fn list_events(access_token: &str) -> Result<Vec<Event>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = config::table_endpoint("events", EVENTS_LIST_QUERY);
        fetch_json(&url, access_token).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = access_token;
        Err(ApiError::Unsupported)
    }
}

/// Fetch one event by id, scoped to its owner. `Ok(None)` when the row does
/// not exist or belongs to someone else.
///
/// # Errors
///
/// Returns an error on transport failure or a non-success gateway response.
pub async fn fetch_owned_event(
    access_token: &str,
    id: &str,
    user_id: &str,
) -> Result<Option<Event>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = config::table_endpoint("events", &owned_row_query(id, user_id));
        let rows: Vec<Event> = fetch_json(&url, access_token).await?;
        Ok(rows.into_iter().next())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (access_token, id, user_id);
        Err(ApiError::Unsupported)
    }
}

/// Create an event.
///
/// # Errors
///
/// Returns an error on transport failure or a non-success gateway response.
pub async fn insert_event(access_token: &str, event: &EventInsert) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = config::table_endpoint("events", "");
        insert_json(&url, access_token, event).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (access_token, event);
        Err(ApiError::Unsupported)
    }
}

/// Update an owned event.
///
/// # Errors
///
/// Returns an error on transport failure or a non-success gateway response.
pub async fn update_event(
    access_token: &str,
    id: &str,
    user_id: &str,
    event: &EventUpdate,
) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = config::table_endpoint("events", &owned_filter(id, user_id));
        patch_json(&url, access_token, event).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (access_token, id, user_id, event);
        Err(ApiError::Unsupported)
    }
}

/// Delete an event by id.
///
/// # Errors
///
/// Returns an error on transport failure or a non-success gateway response.
pub async fn delete_event(access_token: &str, id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = config::table_endpoint("events", &id_filter(id));
        delete_rows(&url, access_token).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (access_token, id);
        Err(ApiError::Unsupported)
    }
}

/// Apply to an event with one of the caller's professional profiles.
///
/// # Errors
///
/// Returns an error on transport failure or a non-success gateway response.
/// A repeat application surfaces as a uniqueness violation; check with
/// [`ApiError::is_unique_violation`].
pub async fn insert_event_application(
    access_token: &str,
    application: &EventApplicationInsert,
) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = config::table_endpoint("event_applications", "");
        insert_json(&url, access_token, application).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (access_token, application);
        Err(ApiError::Unsupported)
    }
}

// ============================================================
// Jobs
// ============================================================

/// Fetch active job listings, newest first.
///
/// # Errors
///
/// Returns an error on transport failure or a non-success gateway response.
pub async fn list_active_jobs(access_token: &str) -> Result<Vec<Job>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = config::table_endpoint("jobs", JOBS_LIST_QUERY);
        fetch_json(&url, access_token).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = access_token;
        Err(ApiError::Unsupported)
    }
}

/// Fetch one job by id. Ownership is checked by the caller, which needs to
/// distinguish "missing" from "not yours" for its messaging.
///
/// # Errors
///
/// Returns an error on transport failure or a non-success gateway response.
pub async fn fetch_job(access_token: &str, id: &str) -> Result<Option<Job>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = config::table_endpoint("jobs", &row_query(id));
        let rows: Vec<Job> = fetch_json(&url, access_token).await?;
        Ok(rows.into_iter().next())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (access_token, id);
        Err(ApiError::Unsupported)
    }
}

/// Create a job listing.
///
/// # Errors
///
/// Returns an error on transport failure or a non-success gateway response.
pub async fn insert_job(access_token: &str, job: &JobInsert) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = config::table_endpoint("jobs", "");
        insert_json(&url, access_token, job).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (access_token, job);
        Err(ApiError::Unsupported)
    }
}

/// Update a job by id.
///
/// # Errors
///
/// Returns an error on transport failure or a non-success gateway response.
pub async fn update_job(access_token: &str, id: &str, job: &JobUpdate) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = config::table_endpoint("jobs", &id_filter(id));
        patch_json(&url, access_token, job).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (access_token, id, job);
        Err(ApiError::Unsupported)
    }
}

/// Delete a job by id.
///
/// # Errors
///
/// Returns an error on transport failure or a non-success gateway response.
pub async fn delete_job(access_token: &str, id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = config::table_endpoint("jobs", &id_filter(id));
        delete_rows(&url, access_token).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (access_token, id);
        Err(ApiError::Unsupported)
    }
}

// ============================================================
// Professionals
// ============================================================

/// Fetch active professional profiles, newest first.
///
/// # Errors
///
/// Returns an error on transport failure or a non-success gateway response.
pub async fn list_active_professionals(access_token: &str) -> Result<Vec<Professional>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = config::table_endpoint("professionals", PROFESSIONALS_LIST_QUERY);
        fetch_json(&url, access_token).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = access_token;
        Err(ApiError::Unsupported)
    }
}

/// Fetch the slim list of the caller's own professional profiles, used to
/// pick an identity when applying to an event.
///
/// # Errors
///
/// Returns an error on transport failure or a non-success gateway response.
pub async fn list_own_professionals(
    access_token: &str,
    user_id: &str,
) -> Result<Vec<OwnProfessional>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = config::table_endpoint("professionals", &own_professionals_query(user_id));
        fetch_json(&url, access_token).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (access_token, user_id);
        Err(ApiError::Unsupported)
    }
}

/// Fetch one professional profile by id, scoped to its owner.
///
/// # Errors
///
/// Returns an error on transport failure or a non-success gateway response.
pub async fn fetch_owned_professional(
    access_token: &str,
    id: &str,
    user_id: &str,
) -> Result<Option<Professional>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = config::table_endpoint("professionals", &owned_row_query(id, user_id));
        let rows: Vec<Professional> = fetch_json(&url, access_token).await?;
        Ok(rows.into_iter().next())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (access_token, id, user_id);
        Err(ApiError::Unsupported)
    }
}

/// Create a professional profile.
///
/// # Errors
///
/// Returns an error on transport failure or a non-success gateway response.
pub async fn insert_professional(
    access_token: &str,
    professional: &ProfessionalInsert,
) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = config::table_endpoint("professionals", "");
        insert_json(&url, access_token, professional).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (access_token, professional);
        Err(ApiError::Unsupported)
    }
}

/// Delete a professional profile by id.
///
/// # Errors
///
/// Returns an error on transport failure or a non-success gateway response.
pub async fn delete_professional(access_token: &str, id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = config::table_endpoint("professionals", &id_filter(id));
        delete_rows(&url, access_token).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (access_token, id);
        Err(ApiError::Unsupported)
    }
}

/// Update an owned professional profile.
///
/// # Errors
///
/// Returns an error on transport failure or a non-success gateway response.
pub async fn update_professional(
    access_token: &str,
    id: &str,
    user_id: &str,
    professional: &ProfessionalUpdate,
) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = config::table_endpoint("professionals", &owned_filter(id, user_id));
        patch_json(&url, access_token, professional).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (access_token, id, user_id, professional);
        Err(ApiError::Unsupported)
    }
}

// ============================================================
// Profiles
// ============================================================

/// Fetch the account profile for `user_id`. `Ok(None)` when the user has
/// never saved one.
///
/// # Errors
///
/// Returns an error on transport failure or a non-success gateway response.
pub async fn fetch_profile(access_token: &str, user_id: &str) -> Result<Option<Profile>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = config::table_endpoint("profiles", &user_rows_query(user_id));
        let rows: Vec<Profile> = fetch_json(&url, access_token).await?;
        Ok(rows.into_iter().next())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (access_token, user_id);
        Err(ApiError::Unsupported)
    }
}

/// Create the account profile row.
///
/// # Errors
///
/// Returns an error on transport failure or a non-success gateway response.
pub async fn insert_profile(access_token: &str, profile: &ProfileUpsert) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = config::table_endpoint("profiles", "");
        insert_json(&url, access_token, profile).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (access_token, profile);
        Err(ApiError::Unsupported)
    }
}

/// Update the existing account profile row for `user_id`.
///
/// # Errors
///
/// Returns an error on transport failure or a non-success gateway response.
pub async fn update_profile(
    access_token: &str,
    user_id: &str,
    profile: &ProfileUpsert,
) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = config::table_endpoint("profiles", &user_filter(user_id));
        patch_json(&url, access_token, profile).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (access_token, user_id, profile);
        Err(ApiError::Unsupported)
    }
}

// ============================================================
// Request plumbing (browser only)
// ============================================================

#[cfg(feature = "csr")]
async fn fetch_json<T: serde::de::DeserializeOwned>(
    url: &str,
    access_token: &str,
) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .header("apikey", config::PUBLISHABLE_KEY)
        .header("Authorization", &format!("Bearer {access_token}"))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(rest_error(status, &body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "csr")]
async fn insert_json<T: serde::Serialize>(
    url: &str,
    access_token: &str,
    payload: &T,
) -> Result<(), ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .header("apikey", config::PUBLISHABLE_KEY)
        .header("Authorization", &format!("Bearer {access_token}"))
        .header("Prefer", "return=minimal")
        .json(payload)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ok_or_rest_error(resp).await
}

#[cfg(feature = "csr")]
async fn patch_json<T: serde::Serialize>(
    url: &str,
    access_token: &str,
    payload: &T,
) -> Result<(), ApiError> {
    let resp = gloo_net::http::Request::patch(url)
        .header("apikey", config::PUBLISHABLE_KEY)
        .header("Authorization", &format!("Bearer {access_token}"))
        .header("Prefer", "return=minimal")
        .json(payload)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ok_or_rest_error(resp).await
}

#[cfg(feature = "csr")]
async fn delete_rows(url: &str, access_token: &str) -> Result<(), ApiError> {
    let resp = gloo_net::http::Request::delete(url)
        .header("apikey", config::PUBLISHABLE_KEY)
        .header("Authorization", &format!("Bearer {access_token}"))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ok_or_rest_error(resp).await
}

#[cfg(feature = "csr")]
async fn ok_or_rest_error(resp: gloo_net::http::Response) -> Result<(), ApiError> {
    if resp.ok() {
        return Ok(());
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(rest_error(status, &body))
}

// ============================================================
// Pure helpers
// ============================================================

#[cfg(any(test, feature = "csr"))]
const EVENTS_LIST_QUERY: &str = "select=*&order=date.asc";

#[cfg(any(test, feature = "csr"))]
const JOBS_LIST_QUERY: &str = "select=*&status=eq.active&order=created_at.desc";

#[cfg(any(test, feature = "csr"))]
const PROFESSIONALS_LIST_QUERY: &str = "select=*&is_active=eq.true&order=created_at.desc";

#[cfg(any(test, feature = "csr"))]
fn row_query(id: &str) -> String {
    format!("select=*&id=eq.{id}")
}

#[cfg(any(test, feature = "csr"))]
fn owned_row_query(id: &str, user_id: &str) -> String {
    format!("select=*&id=eq.{id}&user_id=eq.{user_id}")
}

#[cfg(any(test, feature = "csr"))]
fn id_filter(id: &str) -> String {
    format!("id=eq.{id}")
}

#[cfg(any(test, feature = "csr"))]
fn owned_filter(id: &str, user_id: &str) -> String {
    format!("id=eq.{id}&user_id=eq.{user_id}")
}

#[cfg(any(test, feature = "csr"))]
fn user_filter(user_id: &str) -> String {
    format!("user_id=eq.{user_id}")
}

#[cfg(any(test, feature = "csr"))]
fn user_rows_query(user_id: &str) -> String {
    format!("select=*&user_id=eq.{user_id}")
}

#[cfg(any(test, feature = "csr"))]
fn own_professionals_query(user_id: &str) -> String {
    format!("select=id,name,category&user_id=eq.{user_id}&is_active=eq.true")
}

/// Turn a non-success gateway response into an [`ApiError::Http`], keeping
/// the backend error code (`23505` and friends) when present.
#[cfg(any(test, feature = "csr"))]
fn rest_error(status: u16, body: &str) -> ApiError {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    let code = parsed
        .as_ref()
        .and_then(|value| value.get("code"))
        .and_then(|code| code.as_str())
        .map(str::to_owned);
    let message = parsed
        .as_ref()
        .and_then(|value| value.get("message"))
        .and_then(|message| message.as_str())
        .map(str::to_owned)
        .unwrap_or_else(|| format!("request failed: {status}"));
    ApiError::Http { status, code, message }
}

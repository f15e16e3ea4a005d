//! Identity-provider calls and session persistence.
//!
//! Browser builds (csr) issue real HTTP calls via `gloo-net`; native builds
//! get stubs returning [`ApiError::Unsupported`] so pure session logic stays
//! testable off-browser.
//!
//! ERROR HANDLING
//! ==============
//! Provider error bodies vary across provider generations, so message
//! extraction tries the known field names in order before falling back to
//! a status-coded message. Callers decide what a failure means: the sign-in
//! form shows it, session restore treats it as signed-out.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::config;
use super::error::ApiError;
use super::types::{Session, TokenGrant};
use crate::util::persist;

/// Seconds before nominal expiry at which a session counts as stale and the
/// refresh task fires.
pub const REFRESH_MARGIN_SECS: i64 = 60;

/// Result of a registration attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// The project auto-confirms accounts; the user is signed in at once.
    SignedIn(Session),
    /// The provider sent a confirmation email; no session yet.
    ConfirmationRequired,
}

/// Exchange email + password for a session.
///
/// # Errors
///
/// Returns the provider's rejection message on bad credentials, or a
/// network/decode error.
pub async fn sign_in_with_password(email: &str, password: &str) -> Result<Session, ApiError> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&config::password_grant_endpoint())
            .header("apikey", config::PUBLISHABLE_KEY)
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(auth_error(resp.status(), &body));
        }
        let grant: TokenGrant = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(session_from_grant(grant, current_unix_secs()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, password);
        Err(ApiError::Unsupported)
    }
}

/// Register a new account with email + password.
///
/// # Errors
///
/// Returns the provider's rejection message (e.g. account already exists),
/// or a network/decode error.
pub async fn sign_up(email: &str, password: &str) -> Result<SignUpOutcome, ApiError> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&config::signup_endpoint())
            .header("apikey", config::PUBLISHABLE_KEY)
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(auth_error(resp.status(), &body));
        }
        let body: serde_json::Value = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        parse_signup_outcome(body, current_unix_secs())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, password);
        Err(ApiError::Unsupported)
    }
}

/// Exchange a refresh token for a fresh session.
///
/// # Errors
///
/// Returns an error when the refresh token was revoked or already used, or
/// on network/decode failure.
pub async fn refresh_session(refresh_token: &str) -> Result<Session, ApiError> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "refresh_token": refresh_token });
        let resp = gloo_net::http::Request::post(&config::refresh_grant_endpoint())
            .header("apikey", config::PUBLISHABLE_KEY)
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(auth_error(resp.status(), &body));
        }
        let grant: TokenGrant = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(session_from_grant(grant, current_unix_secs()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = refresh_token;
        Err(ApiError::Unsupported)
    }
}

/// Revoke the current session's tokens with the provider.
///
/// # Errors
///
/// Returns the provider's error; callers log it and clear local state anyway.
pub async fn sign_out(access_token: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&config::logout_endpoint())
            .header("apikey", config::PUBLISHABLE_KEY)
            .header("Authorization", &format!("Bearer {access_token}"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(auth_error(resp.status(), &body));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = access_token;
        Err(ApiError::Unsupported)
    }
}

// ============================================================
// Session persistence
// ============================================================

/// Load the persisted session, if any.
pub fn load_persisted_session() -> Option<Session> {
    persist::load_json(&config::session_storage_key())
}

/// Persist `session` for the next page load.
pub fn persist_session(session: &Session) {
    persist::save_json(&config::session_storage_key(), session);
}

/// Drop any persisted session.
pub fn clear_persisted_session() {
    persist::remove(&config::session_storage_key());
}

// ============================================================
// Pure helpers
// ============================================================

/// Current UTC time in whole seconds since the Unix epoch.
pub fn current_unix_secs() -> i64 {
    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_possible_truncation)]
        {
            (js_sys::Date::now() / 1000.0) as i64
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
    }
}

/// Build a [`Session`] from a provider grant, computing the absolute expiry
/// when the provider only sent a relative lifetime.
pub fn session_from_grant(grant: TokenGrant, now_secs: i64) -> Session {
    let expires_at = grant.expires_at.unwrap_or(now_secs + grant.expires_in);
    Session {
        access_token: grant.access_token,
        refresh_token: grant.refresh_token,
        expires_at,
        user: grant.user,
    }
}

/// Whether `session` is still usable without refreshing, with the margin
/// deducted so it never expires mid-request.
pub fn session_is_fresh(session: &Session, now_secs: i64) -> bool {
    session.expires_at - REFRESH_MARGIN_SECS > now_secs
}

/// Seconds to wait before refreshing a session that expires at
/// `expires_at_secs`. Zero when already stale.
pub fn refresh_delay_secs(expires_at_secs: i64, now_secs: i64) -> u64 {
    u64::try_from(expires_at_secs - REFRESH_MARGIN_SECS - now_secs).unwrap_or(0)
}

/// Decode a registration response, which carries a full grant when the
/// project auto-confirms and a bare user object otherwise.
#[cfg(any(test, feature = "csr"))]
fn parse_signup_outcome(body: serde_json::Value, now_secs: i64) -> Result<SignUpOutcome, ApiError> {
    if body.get("access_token").is_some() {
        let grant: TokenGrant =
            serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        return Ok(SignUpOutcome::SignedIn(session_from_grant(grant, now_secs)));
    }
    Ok(SignUpOutcome::ConfirmationRequired)
}

/// Extract a human-readable message from a provider error body.
#[cfg(any(test, feature = "csr"))]
fn auth_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["error_description", "msg", "error"]
                .iter()
                .find_map(|key| value.get(key).and_then(|m| m.as_str()).map(str::to_owned))
        })
        .unwrap_or_else(|| format!("authentication failed: {status}"));
    ApiError::Http {
        status,
        code: None,
        message,
    }
}

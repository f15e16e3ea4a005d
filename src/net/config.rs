//! Hosted-project endpoints and keys.
//!
//! The project URL and publishable key identify the hosted backend and are
//! safe to embed in the shipped bundle; row access is enforced server-side
//! per authenticated user. Everything else in this module builds URLs and
//! storage keys from those two values.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Hosted project identifier (the subdomain of the project URL).
pub const PROJECT_REF: &str = "vqpzhjxkemrnaudlwcyt";

/// Base URL of the hosted backend project.
pub const PROJECT_URL: &str = "https://vqpzhjxkemrnaudlwcyt.supabase.co";

/// Publishable API key sent with every request alongside the user's token.
pub const PUBLISHABLE_KEY: &str = "sb_publishable_9qPYMjLhVmcdRAoofkEtbw_3vZTqGKa";

/// Token endpoint for the email + password grant.
pub fn password_grant_endpoint() -> String {
    format!("{PROJECT_URL}/auth/v1/token?grant_type=password")
}

/// Token endpoint for exchanging a refresh token.
pub fn refresh_grant_endpoint() -> String {
    format!("{PROJECT_URL}/auth/v1/token?grant_type=refresh_token")
}

/// Account registration endpoint.
pub fn signup_endpoint() -> String {
    format!("{PROJECT_URL}/auth/v1/signup")
}

/// Token revocation endpoint.
pub fn logout_endpoint() -> String {
    format!("{PROJECT_URL}/auth/v1/logout")
}

/// Database gateway endpoint for `table` with a raw query string. Inserts
/// pass an empty query and get the bare table URL.
pub fn table_endpoint(table: &str, query: &str) -> String {
    if query.is_empty() {
        format!("{PROJECT_URL}/rest/v1/{table}")
    } else {
        format!("{PROJECT_URL}/rest/v1/{table}?{query}")
    }
}

/// Object-store endpoint for one object in `bucket`.
pub fn storage_object_endpoint(bucket: &str, path: &str) -> String {
    format!("{PROJECT_URL}/storage/v1/object/{bucket}/{path}")
}

/// Public (unauthenticated) URL for an object in a public bucket.
pub fn storage_public_url(bucket: &str, path: &str) -> String {
    format!("{PROJECT_URL}/storage/v1/object/public/{bucket}/{path}")
}

/// `localStorage` key under which the current session is persisted.
pub fn session_storage_key() -> String {
    format!("sb-{PROJECT_REF}-auth-token")
}

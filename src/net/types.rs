//! Wire-schema DTOs for the hosted backend.
//!
//! DESIGN
//! ======
//! Row types mirror the backend tables column for column so the database
//! gateway's JSON decodes losslessly. Insert payloads omit `None` fields
//! entirely, letting column defaults apply server-side; update payloads
//! keep them so cleared inputs write explicit nulls.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

// ============================================================
// Identity
// ============================================================

/// Authenticated user as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Provider-assigned user identifier (UUID string).
    pub id: String,
    /// Sign-in email. Absent for anonymous or phone-based accounts.
    pub email: Option<String>,
}

/// Raw token grant returned by the identity provider's token endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenGrant {
    /// Bearer token for subsequent requests.
    pub access_token: String,
    /// Single-use token for obtaining the next grant.
    pub refresh_token: String,
    /// Lifetime of the access token in seconds.
    pub expires_in: i64,
    /// Absolute expiry in Unix seconds. Newer provider versions send it;
    /// when absent it is computed from `expires_in` at receipt time.
    pub expires_at: Option<i64>,
    /// The account the grant belongs to.
    pub user: AuthUser,
}

/// Session as held in memory and persisted to `localStorage`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    /// Absolute access-token expiry in Unix seconds.
    pub expires_at: i64,
    pub user: AuthUser,
}

// ============================================================
// Events
// ============================================================

/// An event row: an organizer's listing that professionals apply to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Row identifier (UUID string).
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    /// Event date as `YYYY-MM-DD`.
    pub date: String,
    /// Start time as `HH:MM` (24h).
    pub start_time: String,
    /// End time as `HH:MM` (24h). Must be after `start_time`.
    pub end_time: String,
    pub location: String,
    pub category: Option<String>,
    pub max_participants: Option<i64>,
    pub current_participants: Option<i64>,
    /// Budget in euros. Defaults to 0 server-side.
    pub price: Option<f64>,
    pub image_url: Option<String>,
    /// `active`, `completed`, or `cancelled`.
    pub status: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    /// Application cutoff as `YYYY-MM-DD`.
    pub application_deadline: Option<String>,
    /// Open-ended list of professional categories the organizer needs.
    pub required_professionals: Option<serde_json::Value>,
    /// Owning organizer (UUID string).
    pub user_id: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Insert payload for a new event.
#[derive(Clone, Debug, Serialize)]
pub struct EventInsert {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<i64>,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_deadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_professionals: Option<serde_json::Value>,
    pub user_id: String,
}

/// Update payload for an owned event. Contact details and the application
/// deadline are not editable after creation, so they are absent here and
/// keep their stored values.
#[derive(Clone, Debug, Serialize)]
pub struct EventUpdate {
    pub title: String,
    pub description: Option<String>,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub category: Option<String>,
    pub max_participants: Option<i64>,
    pub price: f64,
    pub image_url: Option<String>,
    pub status: String,
    /// Set client-side on every edit.
    pub updated_at: String,
}

/// Insert payload for a professional applying to an event.
#[derive(Clone, Debug, Serialize)]
pub struct EventApplicationInsert {
    pub event_id: String,
    pub professional_id: String,
    pub applicant_id: String,
    pub application_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_preference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_proposal: Option<f64>,
}

// ============================================================
// Jobs
// ============================================================

/// A job row: a fixed-position staffing listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub location: String,
    /// `temporary`, `permanent`, or `contract`.
    pub employment_type: String,
    /// `entry`, `mid`, or `senior`.
    pub experience_level: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub requirements: Option<Vec<String>>,
    pub benefits: Option<Vec<String>>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub application_deadline: Option<String>,
    pub max_applicants: Option<i64>,
    pub current_applicants: Option<i64>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub is_featured: Option<bool>,
    /// `active` rows are the only ones listed publicly.
    pub status: Option<String>,
    pub user_id: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Insert payload for a new job.
#[derive(Clone, Debug, Serialize)]
pub struct JobInsert {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: String,
    pub location: String,
    pub employment_type: String,
    pub experience_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefits: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_deadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_applicants: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    pub is_featured: bool,
    pub status: String,
    pub user_id: String,
}

/// Update payload for an owned job. Explicit nulls clear previous values.
#[derive(Clone, Debug, Serialize)]
pub struct JobUpdate {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub location: String,
    pub employment_type: String,
    pub experience_level: String,
    pub requirements: Option<Vec<String>>,
    pub benefits: Option<Vec<String>>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub application_deadline: Option<String>,
    pub max_applicants: Option<i64>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub is_featured: bool,
}

// ============================================================
// Professionals
// ============================================================

/// A professional row: a service provider's public profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Professional {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub bio: Option<String>,
    /// Primary service category slug, e.g. `fotografo`, `dj`.
    pub category: String,
    pub specialties: Option<Vec<String>>,
    pub location: String,
    /// Free-text price range shown on the card.
    pub price_range: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub portfolio_images: Option<Vec<String>>,
    pub instagram_url: Option<String>,
    pub website_url: Option<String>,
    /// Average review rating, 0 to 5.
    pub rating: Option<f64>,
    pub total_reviews: Option<i64>,
    pub is_verified: Option<bool>,
    /// Inactive profiles are hidden from the public listing.
    pub is_active: Option<bool>,
    /// Weekday slugs: `domingo`, `segunda`, ... `sabado`.
    pub availability_days: Option<Vec<String>>,
    pub user_id: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Insert payload for a new professional profile.
#[derive(Clone, Debug, Serialize)]
pub struct ProfessionalInsert {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialties: Option<Vec<String>>,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_days: Option<Vec<String>>,
    pub user_id: String,
}

/// Update payload for an owned professional profile.
#[derive(Clone, Debug, Serialize)]
pub struct ProfessionalUpdate {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub category: String,
    pub specialties: Option<Vec<String>>,
    pub location: String,
    pub price_range: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub portfolio_images: Option<Vec<String>>,
    pub instagram_url: Option<String>,
    pub website_url: Option<String>,
    pub availability_days: Option<Vec<String>>,
    /// Set client-side on every edit.
    pub updated_at: String,
}

/// Slim projection of a professional used when the current user picks one
/// of their own profiles in the apply-to-event dialog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnProfessional {
    pub id: String,
    pub name: String,
    pub category: String,
}

// ============================================================
// Profiles
// ============================================================

/// Account profile row keyed by the auth user id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub user_id: String,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Payload shared by profile insert and update.
#[derive(Clone, Debug, Serialize)]
pub struct ProfileUpsert {
    pub user_id: String,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
}

//! Object-store calls for avatar images.
//!
//! Uploads go to the public `avatars` bucket under a per-user prefix; the
//! stored profile row keeps only the public URL.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use super::config;
#[cfg(feature = "csr")]
use super::error::ApiError;

/// Bucket holding account avatars. Publicly readable.
pub const AVATAR_BUCKET: &str = "avatars";

/// Upload `file` to the avatar bucket at `object_path`, replacing any
/// previous object there, and return its public URL.
///
/// # Errors
///
/// Returns an error on transport failure or a non-success store response.
#[cfg(feature = "csr")]
pub async fn upload_avatar(
    access_token: &str,
    object_path: &str,
    file: &web_sys::File,
) -> Result<String, ApiError> {
    let url = config::storage_object_endpoint(AVATAR_BUCKET, object_path);
    let resp = gloo_net::http::Request::post(&url)
        .header("apikey", config::PUBLISHABLE_KEY)
        .header("Authorization", &format!("Bearer {access_token}"))
        .header("x-upsert", "true")
        .header("Content-Type", &file.type_())
        .body(file.clone())
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        let status = resp.status();
        return Err(ApiError::Http {
            status,
            code: None,
            message: format!("upload failed: {status}"),
        });
    }
    Ok(config::storage_public_url(AVATAR_BUCKET, object_path))
}

/// Best-effort removal of a previous avatar object.
#[cfg(feature = "csr")]
pub async fn remove_avatar(access_token: &str, object_path: &str) {
    let url = config::storage_object_endpoint(AVATAR_BUCKET, object_path);
    let _ = gloo_net::http::Request::delete(&url)
        .header("apikey", config::PUBLISHABLE_KEY)
        .header("Authorization", &format!("Bearer {access_token}"))
        .send()
        .await;
}

// ============================================================
// Pure helpers
// ============================================================

/// Object path for a user's avatar, keyed so re-uploads overwrite in place.
/// The extension carries over from the original file name.
pub fn avatar_object_path(user_id: &str, file_name: &str) -> String {
    let ext = file_name.rsplit('.').next().unwrap_or("png");
    format!("{user_id}/avatar.{ext}")
}

/// Recover the bucket-relative object path from a stored public URL, for
/// deleting the previous avatar. The path is the last two URL segments.
pub fn object_path_from_public_url(url: &str) -> Option<String> {
    let mut segments = url.rsplit('/');
    let file = segments.next()?;
    let prefix = segments.next()?;
    if file.is_empty() || prefix.is_empty() {
        return None;
    }
    Some(format!("{prefix}/{file}"))
}

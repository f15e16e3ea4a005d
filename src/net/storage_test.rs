use super::*;

#[test]
fn avatar_object_path_uses_owner_prefix_and_extension() {
    assert_eq!(avatar_object_path("u1", "me.jpeg"), "u1/avatar.jpeg");
    assert_eq!(avatar_object_path("u1", "photo.2024.png"), "u1/avatar.png");
}

#[test]
fn avatar_object_path_keeps_extensionless_names_as_suffix() {
    // Mirrors how the file picker value is treated: the segment after the
    // last dot, or the whole name when there is none.
    assert_eq!(avatar_object_path("u1", "photo"), "u1/avatar.photo");
}

#[test]
fn object_path_round_trips_through_public_url() {
    let path = avatar_object_path("u1", "me.png");
    let url = crate::net::config::storage_public_url(AVATAR_BUCKET, &path);
    assert_eq!(object_path_from_public_url(&url), Some(path));
}

#[test]
fn object_path_rejects_malformed_urls() {
    assert_eq!(object_path_from_public_url(""), None);
    assert_eq!(object_path_from_public_url("avatar.png"), None);
    assert_eq!(object_path_from_public_url("trailing//"), None);
}

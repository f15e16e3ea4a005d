//! Page modules for route-level screens.
//!
//! Each page owns route-scoped orchestration: fetching, form state, and
//! navigation. The `*_form` modules hold the draft/validation/payload
//! plumbing shared by each create/edit pair.

pub mod auth;
pub mod dashboard;
pub mod event_create;
pub mod event_edit;
pub(crate) mod event_form;
pub mod events;
pub mod job_create;
pub mod job_edit;
pub(crate) mod job_form;
pub mod jobs;
pub mod landing;
pub mod not_found;
pub mod placeholder;
pub mod professional_create;
pub mod professional_edit;
pub(crate) mod professional_form;
pub mod professionals;
pub mod profile;

//! Reusable UI components shared across pages.

pub mod confirm_dialog;
pub mod form;
pub mod route_guard;
pub mod sidebar;
pub mod spinner;
pub mod toaster;

//! Utility helpers shared across page and component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure helpers live here so pages stay thin: filtering, formatting,
//! validation and the route-guard decision logic are all plain functions
//! with native unit tests, while browser storage access is isolated in
//! [`persist`].

pub mod clock;
pub mod filter;
pub mod format;
pub mod guard;
pub mod persist;
pub mod validate;

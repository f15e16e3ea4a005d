//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern: `session` owns authentication, `toasts` owns
//! notifications. Both are provided via context at the app root so any
//! component can depend on the slice it needs.

pub mod session;
pub mod toasts;

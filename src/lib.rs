//! # eventajob
//!
//! Leptos + WASM single-page marketplace connecting event organizers with
//! freelance event-service professionals. The app talks directly to a hosted
//! Postgres/auth/storage backend over HTTP; there is no first-party server.
//!
//! This crate contains pages, components, application state (session and
//! toasts), the HTTP client for the hosted backend, and pure helpers for
//! route guarding, validation, filtering, and formatting.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

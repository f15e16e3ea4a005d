//! Networking modules for the hosted backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app has no first-party server. `auth` talks to the identity provider,
//! `rest` to the database gateway, and `storage` to the object store, all on
//! the same hosted project. `config` centralizes endpoints and keys, `types`
//! defines the wire schema shared by all three.

pub mod auth;
pub mod config;
pub mod error;
pub mod rest;
pub mod storage;
pub mod types;

//! Client-side state containers.
//!
//! ARCHITECTURE
//! ============
//! Plain structs held in `RwSignal`s and provided through Leptos context.
//! `auth` mirrors the session context; `offers` and `ui` are page-local.

pub mod auth;
pub mod offers;
pub mod ui;

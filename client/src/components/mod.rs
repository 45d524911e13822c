//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome shared by every route while reading and
//! writing shared state from Leptos context providers.

pub mod footer;
pub mod navbar;

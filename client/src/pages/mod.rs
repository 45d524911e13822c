//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates shared chrome
//! to `components`.

pub mod contact;
pub mod home;
pub mod login;
pub mod offers;
pub mod portfolio;
pub mod services;
pub mod signup;

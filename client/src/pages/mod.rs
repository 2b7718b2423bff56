//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped state (form fields, loading flag, error,
//! fetched payload) and delegates rendering details to `components`.

pub(crate) mod credentials_form;
pub mod following;
pub mod login;
pub mod profile;
pub mod register;

//! Client-side state modules.
//!
//! ARCHITECTURE
//! ============
//! `session` is app-wide and provided via context. The rest are page-scoped
//! models owned by their page containers.

pub mod following;
pub mod page;
pub mod profile;
pub mod session;

//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business logic and persistence concerns so route
//! handlers can stay focused on request validation and status mapping.

pub mod accounts;
pub mod follows;
pub mod leetcode;
pub mod session;
pub mod stats_cache;

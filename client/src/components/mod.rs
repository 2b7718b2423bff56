//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: they render what pages hand them. Only the
//! sidebar reads shared state (the session, for logout).

pub mod button;
pub mod grid_background;
pub mod leaderboard;
pub mod sidebar;
pub mod spinner;
pub mod user_card;

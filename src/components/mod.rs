//! Reusable UI components.

pub mod guard;
pub mod navbar;
pub mod palace_card;

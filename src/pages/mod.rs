//! Routed page components.

pub mod dashboard;
pub mod login;
pub mod palace;
pub mod register;

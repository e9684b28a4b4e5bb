//! Network layer: transport gateway, token persistence, and typed API calls.
//!
//! DESIGN
//! ======
//! All remote traffic funnels through the [`gateway::Gateway`], which
//! attaches the bearer credential at call time and applies the `401`
//! collapse policy uniformly. The `api` module is a thin typed veneer
//! over it and owns no policy of its own.

pub mod api;
pub mod gateway;
pub mod token_store;
pub mod types;

#[cfg(test)]
pub mod testing;

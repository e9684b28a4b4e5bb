//! Shared client-side state.
//!
//! DESIGN
//! ======
//! The session is the only state with real transition logic; it lives in
//! one `RwSignal` provided via context so gates, pages, and the navbar
//! all observe the same resolution.

pub mod session;

//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `view`, `dashboard`, etc.) so the session
//! core and individual components can depend on small focused models. None of
//! these types know about Leptos; the UI wraps them in signals.

pub mod auth;
pub mod dashboard;
pub mod generate;
pub mod notifications;
pub mod view;

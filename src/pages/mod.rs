//! Top-level page modules, one per [`View`](crate::state::view::View).
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and orchestration and delegates rendering
//! details to `components`.

pub mod dashboard;
pub mod login;
pub mod register;

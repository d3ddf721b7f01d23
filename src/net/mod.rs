//! Networking modules for the backend HTTP contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` moves raw requests over `fetch`, `gateway` owns credential
//! attachment and 401 handling, `api` names the endpoints and user-facing
//! messages, and `types` defines the JSON wire schema.

pub mod api;
pub mod error;
pub mod gateway;
pub mod transport;
pub mod types;

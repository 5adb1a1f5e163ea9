//! Networking for the contact submission endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP exchange and classifies responses; `types` defines
//! the reply shape the form state machine consumes.

pub mod api;
pub mod types;

//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` delivers contact submissions and `types` defines the JSON shapes
//! exchanged with the contact endpoint.

pub mod api;
pub mod types;

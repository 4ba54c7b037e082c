//! Utility helpers shared across page controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, timers, observers,
//! DOM lookups) and the pure math behind animations from page wiring, so the
//! math is testable natively and the browser glue stays small.

pub mod chrome;
pub mod dark_mode;
#[cfg(feature = "csr")]
pub mod dom;
pub mod easing;
pub mod keyboard;
pub mod query;
pub mod radar;
pub mod reveal;
pub mod storage;
pub mod timers;
pub mod typing;

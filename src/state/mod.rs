//! Pure state holders and decision logic.
//!
//! DESIGN
//! ======
//! State is split by page concern (`theme`, `contact`, `catalog`) so each
//! controller owns one small model and the rules are testable without a DOM.

pub mod catalog;
pub mod contact;
pub mod theme;

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Most page markup is pre-rendered HTML; components cover the pieces the
//! crate draws itself from computed data.

pub mod radar_chart;

//! # folio
//!
//! WASM script layer for a static personal-portfolio site. The pages ship as
//! pre-rendered HTML; this crate attaches behavior to them at load time:
//! theme switching, scroll reveals, counters, typing effects, the contact
//! form, the project filter, and the skills radar chart.
//!
//! ARCHITECTURE
//! ============
//! `state` holds pure decision logic (themes, validation, catalog filtering)
//! that compiles and tests natively. `util` and `net` wrap browser and HTTP
//! concerns behind small functions that no-op outside the `csr` feature.
//! `pages` wires both onto the live DOM and only exists in browser builds.

pub mod components;
pub mod config;
pub mod error;
pub mod net;
#[cfg(feature = "csr")]
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point.
///
/// Installs the panic hook and console logger, then boots every page
/// controller whose markup is present on the current document.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let config = config::SiteConfig::from_document();
    let _ = console_log::init_with_level(config.log_level);
    pages::boot(&config);
}

//! Page controllers that attach behavior to pre-rendered markup.
//!
//! ARCHITECTURE
//! ============
//! Every page script ships in one bundle. `boot` runs each controller; a
//! controller looks for its own anchor elements and returns early when they
//! are absent, so the same bundle serves every page.
//!
//! Listeners, observers and async loops are registered in one [`Teardown`]
//! that runs on `beforeunload`.

pub mod about;
pub mod contact;
pub mod home;
pub mod projects;
pub mod site;
pub mod skills;
pub mod theme;

use std::rc::Rc;

use crate::config::SiteConfig;
use crate::util::timers::Teardown;

/// Start every controller for the current document.
pub fn boot(config: &SiteConfig) {
    let teardown = Rc::new(Teardown::new());

    theme::init(&teardown);
    site::init(&teardown);
    home::init(&teardown);
    about::init(&teardown);
    contact::init(config, &teardown);
    projects::init(&teardown);
    skills::init(&teardown);

    log::debug!("page controllers booted with {} cleanup tasks", teardown.len());
    site::run_on_unload(teardown);
}

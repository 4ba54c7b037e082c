//! Site configuration read from `<meta name="folio:*">` tags.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site is static, so runtime knobs travel in the page head. Parsing is
//! kept separate from DOM access so defaults and fallbacks are testable.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

const META_PREFIX: &str = "folio:";
pub const DEFAULT_CONTACT_ENDPOINT: &str = "/api/contact";

/// How the contact form delivers submissions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionMode {
    /// POST to the configured endpoint.
    #[default]
    Live,
    /// Wait, then succeed or fail at random without touching the network.
    Simulate,
}

impl FromStr for SubmissionMode {
    type Err = ();

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(Self::Live),
            "simulate" | "simulated" | "demo" => Ok(Self::Simulate),
            _ => Err(()),
        }
    }
}

/// Runtime configuration for all page controllers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub contact_endpoint: String,
    pub submission_mode: SubmissionMode,
    pub log_level: log::Level,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_endpoint: DEFAULT_CONTACT_ENDPOINT.to_owned(),
            submission_mode: SubmissionMode::Live,
            log_level: log::Level::Info,
        }
    }
}

impl SiteConfig {
    /// Build a config from `(meta name, content)` pairs.
    ///
    /// Names without the `folio:` prefix and unknown keys are ignored; values
    /// that fail to parse keep the default.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::default();
        for (name, content) in pairs {
            let Some(key) = name.trim().strip_prefix(META_PREFIX) else {
                continue;
            };
            match key {
                "contact-endpoint" => {
                    let endpoint = content.trim();
                    if !endpoint.is_empty() {
                        config.contact_endpoint = endpoint.to_owned();
                    }
                }
                "contact-mode" => {
                    if let Ok(mode) = content.parse() {
                        config.submission_mode = mode;
                    }
                }
                "log-level" => {
                    if let Ok(level) = log::Level::from_str(content.trim()) {
                        config.log_level = level;
                    }
                }
                _ => {}
            }
        }
        config
    }

    /// Read configuration from the current document's meta tags.
    pub fn from_document() -> Self {
        #[cfg(feature = "csr")]
        {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return Self::default();
            };
            let Ok(nodes) = document.query_selector_all("meta[name^=\"folio:\"]") else {
                return Self::default();
            };
            let mut raw = Vec::new();
            for idx in 0..nodes.length() {
                let Some(el) = nodes
                    .item(idx)
                    .and_then(|n| wasm_bindgen::JsCast::dyn_into::<web_sys::Element>(n).ok())
                else {
                    continue;
                };
                let name = el.get_attribute("name").unwrap_or_default();
                let content = el.get_attribute("content").unwrap_or_default();
                raw.push((name, content));
            }
            Self::from_pairs(raw.iter().map(|(n, c)| (n.as_str(), c.as_str())))
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }
}

//! Error types shared across the crate.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal to a page. Storage errors degrade theme state to the
//! current session, parse errors leave state untouched, and submission errors
//! surface as a user-visible alert with the form re-enabled.

/// Local storage could not be reached or written.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("local storage access failed: {0}")]
    Access(String),
}

/// A theme name other than `light` or `dark`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0:?}")]
pub struct ThemeParseError(pub String);

/// Contact form delivery failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("request encoding failed: {0}")]
    Encode(String),
    #[error("submission is only available in the browser")]
    Unavailable,
}

//! Browser `localStorage` access with typed failures.
//!
//! SYSTEM CONTEXT
//! ==============
//! Storage can be disabled or throw (private browsing, quota). These helpers
//! centralize the csr-only web-sys glue and turn every failure into a
//! [`StorageError`] so callers decide whether to log or ignore it.

use crate::error::StorageError;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    window
        .local_storage()
        .map_err(|e| StorageError::Access(format!("{e:?}")))?
        .ok_or(StorageError::Unavailable)
}

/// Read the raw string stored under `key`.
///
/// # Errors
///
/// Returns a [`StorageError`] if storage is unavailable or the read throws.
pub fn get_item(key: &str) -> Result<Option<String>, StorageError> {
    #[cfg(feature = "csr")]
    {
        local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Access(format!("{e:?}")))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        Err(StorageError::Unavailable)
    }
}

/// Store `value` under `key`.
///
/// # Errors
///
/// Returns a [`StorageError`] if storage is unavailable or the write throws.
pub fn set_item(key: &str, value: &str) -> Result<(), StorageError> {
    #[cfg(feature = "csr")]
    {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Access(format!("{e:?}")))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
        Err(StorageError::Unavailable)
    }
}

/// Remove `key`.
///
/// # Errors
///
/// Returns a [`StorageError`] if storage is unavailable or the removal throws.
pub fn remove_item(key: &str) -> Result<(), StorageError> {
    #[cfg(feature = "csr")]
    {
        local_storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Access(format!("{e:?}")))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        Err(StorageError::Unavailable)
    }
}

//! Light/dark theme state and its persistence rules.
//!
//! DESIGN
//! ======
//! `ThemeManager` owns the single active theme. Everything that touches the
//! browser (storage, `matchMedia`, DOM attributes, the `themeChanged` event)
//! sits behind `ThemeBackend`, so the decision rules below are testable
//! without a document.
//!
//! Only explicit user choices are persisted. Initial resolution, OS-follow and
//! reset apply a theme without writing it, so a visitor who never touched the
//! toggle keeps tracking the OS preference.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use crate::error::{StorageError, ThemeParseError};

/// Storage key holding the persisted preference.
pub const STORAGE_KEY: &str = "theme";

/// Visual mode of the site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite mode.
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// `<meta name="theme-color">` value for mobile browser chrome.
    pub fn meta_color(self) -> &'static str {
        match self {
            Self::Light => "#ffffff",
            Self::Dark => "#0f172a",
        }
    }

    /// Accessible label for the toggle control while this theme is active.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeParseError(other.to_owned())),
        }
    }
}

/// Environment a theme manager reads from and applies to.
pub trait ThemeBackend {
    /// Raw stored preference, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when storage is disabled or throws.
    fn load_preference(&self) -> Result<Option<String>, StorageError>;

    /// Persist `theme` as the user's preference.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when storage is disabled or throws.
    fn store_preference(&self, theme: Theme) -> Result<(), StorageError>;

    /// Forget the stored preference.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when storage is disabled or throws.
    fn clear_preference(&self) -> Result<(), StorageError>;

    /// Theme reported by the operating system.
    fn system_theme(&self) -> Theme;

    /// Reflect `theme` in the document and notify listeners.
    fn apply(&self, theme: Theme);
}

/// How an outside caller uses a shared manager.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ManagerAccess {
    /// Query only; a busy manager has a fallback answer.
    Read,
    /// Change the theme; a busy manager drops the call.
    Write,
}

impl ManagerAccess {
    /// Level for reporting that the manager was busy.
    pub fn busy_level(self) -> log::Level {
        match self {
            Self::Read => log::Level::Debug,
            Self::Write => log::Level::Warn,
        }
    }
}

/// Owner of the active theme.
#[derive(Debug)]
pub struct ThemeManager<B> {
    backend: B,
    theme: Theme,
}

impl<B: ThemeBackend> ThemeManager<B> {
    /// Resolve the initial theme (stored preference, else OS) and apply it.
    pub fn new(backend: B) -> Self {
        let mut manager = Self {
            theme: Theme::default(),
            backend,
        };
        let initial = manager
            .stored_theme()
            .unwrap_or_else(|| manager.backend.system_theme());
        manager.commit(initial, false);
        manager
    }

    pub fn current_theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Apply and persist `theme`.
    pub fn set_theme(&mut self, theme: Theme) {
        self.commit(theme, true);
    }

    /// Apply and persist a theme given by name.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeParseError`] for anything other than `light`/`dark`; the
    /// active theme is left unchanged.
    pub fn set_theme_str(&mut self, raw: &str) -> Result<(), ThemeParseError> {
        let theme = raw.parse()?;
        self.set_theme(theme);
        Ok(())
    }

    pub fn toggle_theme(&mut self) {
        self.set_theme(self.theme.flipped());
    }

    /// Drop the stored preference and follow the OS again.
    pub fn reset_to_system_theme(&mut self) {
        if let Err(e) = self.backend.clear_preference() {
            log::warn!("unable to remove theme from storage: {e}");
        }
        let system = self.backend.system_theme();
        self.commit(system, false);
    }

    /// React to an OS preference change. Ignored while a preference is stored.
    pub fn on_system_change(&mut self, system: Theme) {
        if self.stored_theme().is_none() {
            self.commit(system, false);
        }
    }

    /// Adopt the persisted preference when another tab changed it.
    pub fn reconcile_with_storage(&mut self) {
        if let Some(stored) = self.stored_theme() {
            if stored != self.theme {
                self.set_theme(stored);
            }
        }
    }

    /// Handle a `storage` event raised by another tab.
    pub fn on_storage_event(&mut self, key: Option<&str>, new_value: Option<&str>) {
        if key != Some(STORAGE_KEY) {
            return;
        }
        let Some(value) = new_value else {
            return;
        };
        if let Err(e) = self.set_theme_str(value) {
            log::debug!("ignoring storage event: {e}");
        }
    }

    fn stored_theme(&self) -> Option<Theme> {
        match self.backend.load_preference() {
            Ok(raw) => raw.and_then(|value| value.parse().ok()),
            Err(e) => {
                log::warn!("unable to read theme from storage: {e}");
                None
            }
        }
    }

    fn commit(&mut self, theme: Theme, persist: bool) {
        self.theme = theme;
        self.backend.apply(theme);
        if persist {
            if let Err(e) = self.backend.store_preference(theme) {
                log::warn!("unable to save theme to storage: {e}");
            }
        }
        log::info!("[Theme] Switched to {theme} mode");
    }
}

use super::*;
use std::cell::{Cell, RefCell};

#[derive(Default)]
struct MemoryBackend {
    stored: RefCell<Option<String>>,
    broken: bool,
    system: Cell<Theme>,
    applied: RefCell<Vec<Theme>>,
}

impl MemoryBackend {
    fn with_stored(value: &str) -> Self {
        Self {
            stored: RefCell::new(Some(value.to_owned())),
            ..Self::default()
        }
    }

    fn with_system(theme: Theme) -> Self {
        let backend = Self::default();
        backend.system.set(theme);
        backend
    }

    fn broken(system: Theme) -> Self {
        let backend = Self {
            broken: true,
            ..Self::default()
        };
        backend.system.set(system);
        backend
    }
}

impl ThemeBackend for MemoryBackend {
    fn load_preference(&self) -> Result<Option<String>, StorageError> {
        if self.broken {
            return Err(StorageError::Unavailable);
        }
        Ok(self.stored.borrow().clone())
    }

    fn store_preference(&self, theme: Theme) -> Result<(), StorageError> {
        if self.broken {
            return Err(StorageError::Access("quota".to_owned()));
        }
        *self.stored.borrow_mut() = Some(theme.as_str().to_owned());
        Ok(())
    }

    fn clear_preference(&self) -> Result<(), StorageError> {
        if self.broken {
            return Err(StorageError::Unavailable);
        }
        *self.stored.borrow_mut() = None;
        Ok(())
    }

    fn system_theme(&self) -> Theme {
        self.system.get()
    }

    fn apply(&self, theme: Theme) {
        self.applied.borrow_mut().push(theme);
    }
}

// =============================================================
// Theme value
// =============================================================

#[test]
fn theme_parses_only_light_and_dark() {
    assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
    assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
    assert_eq!("Dark".parse::<Theme>(), Err(ThemeParseError("Dark".to_owned())));
    assert!("".parse::<Theme>().is_err());
}

#[test]
fn theme_helpers_match_expected_strings() {
    assert_eq!(Theme::Dark.to_string(), "dark");
    assert_eq!(Theme::Light.flipped(), Theme::Dark);
    assert_eq!(Theme::Dark.meta_color(), "#0f172a");
    assert_eq!(Theme::Light.meta_color(), "#ffffff");
    assert_eq!(Theme::Dark.toggle_label(), "Switch to light mode");
}

// =============================================================
// Initial resolution
// =============================================================

#[test]
fn new_prefers_stored_theme_over_system() {
    let backend = MemoryBackend::with_stored("dark");
    backend.system.set(Theme::Light);
    let manager = ThemeManager::new(backend);
    assert_eq!(manager.current_theme(), Theme::Dark);
    assert_eq!(*manager.backend().applied.borrow(), vec![Theme::Dark]);
}

#[test]
fn new_falls_back_to_system_and_does_not_persist_it() {
    let manager = ThemeManager::new(MemoryBackend::with_system(Theme::Dark));
    assert!(manager.is_dark());
    assert_eq!(*manager.backend().stored.borrow(), None);
}

#[test]
fn new_ignores_garbage_stored_value() {
    let backend = MemoryBackend::with_stored("sepia");
    backend.system.set(Theme::Dark);
    let manager = ThemeManager::new(backend);
    assert_eq!(manager.current_theme(), Theme::Dark);
}

// =============================================================
// Set / toggle / reset
// =============================================================

#[test]
fn set_theme_then_current_theme_round_trips_and_persists() {
    let mut manager = ThemeManager::new(MemoryBackend::default());
    for theme in [Theme::Dark, Theme::Light, Theme::Dark] {
        manager.set_theme(theme);
        assert_eq!(manager.current_theme(), theme);
        assert_eq!(manager.backend().stored.borrow().as_deref(), Some(theme.as_str()));
    }
}

#[test]
fn set_theme_str_rejects_invalid_input_without_side_effects() {
    let mut manager = ThemeManager::new(MemoryBackend::with_stored("dark"));
    let applied_before = manager.backend().applied.borrow().len();
    for raw in ["", "blue", "LIGHT", " dark"] {
        assert!(manager.set_theme_str(raw).is_err());
        assert_eq!(manager.current_theme(), Theme::Dark);
    }
    assert_eq!(manager.backend().applied.borrow().len(), applied_before);
    assert_eq!(manager.backend().stored.borrow().as_deref(), Some("dark"));
}

#[test]
fn toggle_flips_and_applies_each_time() {
    let mut manager = ThemeManager::new(MemoryBackend::default());
    manager.toggle_theme();
    assert_eq!(manager.current_theme(), Theme::Dark);
    manager.toggle_theme();
    assert_eq!(manager.current_theme(), Theme::Light);
    assert_eq!(
        *manager.backend().applied.borrow(),
        vec![Theme::Light, Theme::Dark, Theme::Light]
    );
}

#[test]
fn reset_clears_preference_and_uses_system_theme() {
    let backend = MemoryBackend::with_stored("light");
    backend.system.set(Theme::Dark);
    let mut manager = ThemeManager::new(backend);
    assert_eq!(manager.current_theme(), Theme::Light);
    manager.reset_to_system_theme();
    assert_eq!(manager.current_theme(), Theme::Dark);
    assert_eq!(*manager.backend().stored.borrow(), None);
}

#[test]
fn broken_storage_still_switches_in_memory() {
    let mut manager = ThemeManager::new(MemoryBackend::broken(Theme::Light));
    manager.set_theme(Theme::Dark);
    assert_eq!(manager.current_theme(), Theme::Dark);
    manager.reset_to_system_theme();
    assert_eq!(manager.current_theme(), Theme::Light);
}

// =============================================================
// External changes
// =============================================================

#[test]
fn system_change_followed_only_without_stored_preference() {
    let mut manager = ThemeManager::new(MemoryBackend::default());
    manager.on_system_change(Theme::Dark);
    assert_eq!(manager.current_theme(), Theme::Dark);

    manager.set_theme(Theme::Light);
    manager.on_system_change(Theme::Dark);
    assert_eq!(manager.current_theme(), Theme::Light);
}

#[test]
fn reconcile_adopts_value_written_by_another_tab() {
    let mut manager = ThemeManager::new(MemoryBackend::with_stored("light"));
    *manager.backend().stored.borrow_mut() = Some("dark".to_owned());
    manager.reconcile_with_storage();
    assert_eq!(manager.current_theme(), Theme::Dark);
}

#[test]
fn reconcile_is_noop_when_values_agree() {
    let mut manager = ThemeManager::new(MemoryBackend::with_stored("dark"));
    let applied_before = manager.backend().applied.borrow().len();
    manager.reconcile_with_storage();
    assert_eq!(manager.backend().applied.borrow().len(), applied_before);
}

#[test]
fn storage_event_only_reacts_to_theme_key_with_value() {
    let mut manager = ThemeManager::new(MemoryBackend::default());
    manager.on_storage_event(Some("other"), Some("dark"));
    assert_eq!(manager.current_theme(), Theme::Light);
    manager.on_storage_event(Some("theme"), None);
    assert_eq!(manager.current_theme(), Theme::Light);
    manager.on_storage_event(Some("theme"), Some("neon"));
    assert_eq!(manager.current_theme(), Theme::Light);
    manager.on_storage_event(Some("theme"), Some("dark"));
    assert_eq!(manager.current_theme(), Theme::Dark);
}

#[test]
fn busy_manager_is_quiet_for_reads_and_loud_for_dropped_writes() {
    assert_eq!(ManagerAccess::Read.busy_level(), log::Level::Debug);
    assert_eq!(ManagerAccess::Write.busy_level(), log::Level::Warn);
}

use std::cell::RefCell;
use std::collections::HashMap;

use super::*;

#[derive(Default)]
struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
    writes: RefCell<Vec<(String, String)>>,
}

impl MemoryStore {
    fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    fn stored(&self) -> Option<String> {
        self.values.borrow().get(THEME_STORAGE_KEY).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        self.writes.borrow_mut().push((key.to_owned(), value.to_owned()));
    }
}

#[derive(Default)]
struct RecordingSurface {
    applied: RefCell<Vec<ThemeMode>>,
}

impl ThemeSurface for RecordingSurface {
    fn apply(&self, mode: ThemeMode) {
        self.applied.borrow_mut().push(mode);
    }
}

/// Records the interleaving of store writes and surface applies.
#[derive(Default)]
struct EventLog {
    events: RefCell<Vec<&'static str>>,
}

impl PreferenceStore for EventLog {
    fn load(&self, _key: &str) -> Option<String> {
        None
    }

    fn save(&self, _key: &str, _value: &str) {
        self.events.borrow_mut().push("save");
    }
}

impl ThemeSurface for EventLog {
    fn apply(&self, _mode: ThemeMode) {
        self.events.borrow_mut().push("apply");
    }
}

// =============================================================
// ThemeMode
// =============================================================

#[test]
fn theme_mode_default_is_light() {
    assert_eq!(ThemeMode::default(), ThemeMode::Light);
    assert!(!ThemeMode::default().is_dark());
}

#[test]
fn theme_mode_toggled_flips() {
    assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
}

#[test]
fn from_stored_accepts_json_booleans_only() {
    assert_eq!(ThemeMode::from_stored("true"), Some(ThemeMode::Dark));
    assert_eq!(ThemeMode::from_stored("false"), Some(ThemeMode::Light));
    assert_eq!(ThemeMode::from_stored(" true "), Some(ThemeMode::Dark));
    for raw in ["", "yes", "1", "null", "\"true\"", "TRUE", "{", "dark"] {
        assert_eq!(ThemeMode::from_stored(raw), None, "expected None for {raw:?}");
    }
}

#[test]
fn as_stored_matches_from_stored() {
    assert_eq!(ThemeMode::Dark.as_stored(), "true");
    assert_eq!(ThemeMode::Light.as_stored(), "false");
}

// =============================================================
// restore
// =============================================================

#[test]
fn restore_dark_preference() {
    let store = MemoryStore::with(THEME_STORAGE_KEY, "true");
    let surface = RecordingSurface::default();
    let mut theme = ThemeManager::new(&store, &surface);

    assert_eq!(theme.restore(), ThemeMode::Dark);
    assert_eq!(theme.mode(), ThemeMode::Dark);
    assert_eq!(surface.applied.borrow().as_slice(), &[ThemeMode::Dark]);
}

#[test]
fn restore_absent_preference_defaults_to_light() {
    let store = MemoryStore::default();
    let surface = RecordingSurface::default();
    let mut theme = ThemeManager::new(&store, &surface);

    assert_eq!(theme.restore(), ThemeMode::Light);
    assert_eq!(store.stored().as_deref(), Some("false"));
    assert_eq!(surface.applied.borrow().as_slice(), &[ThemeMode::Light]);
}

#[test]
fn restore_malformed_preference_defaults_to_light_and_overwrites() {
    let store = MemoryStore::with(THEME_STORAGE_KEY, "definitely-not-json");
    let surface = RecordingSurface::default();
    let mut theme = ThemeManager::new(&store, &surface);

    assert_eq!(theme.restore(), ThemeMode::Light);
    assert_eq!(store.stored().as_deref(), Some("false"));
}

#[test]
fn new_manager_has_no_side_effects() {
    let store = MemoryStore::default();
    let surface = RecordingSurface::default();
    let theme = ThemeManager::new(&store, &surface);

    assert_eq!(theme.mode(), ThemeMode::Light);
    assert!(store.writes.borrow().is_empty());
    assert!(surface.applied.borrow().is_empty());
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_parity_and_persistence_track_each_step() {
    let store = MemoryStore::default();
    let surface = RecordingSurface::default();
    let mut theme = ThemeManager::new(&store, &surface);
    theme.restore();

    for n in 1..=7 {
        let mode = theme.toggle();
        assert_eq!(mode.is_dark(), n % 2 == 1, "after {n} toggles");
        assert_eq!(store.stored().as_deref(), Some(mode.as_stored()));
        assert_eq!(surface.applied.borrow().last(), Some(&mode));
    }
}

#[test]
fn toggle_round_trips_through_storage() {
    let store = MemoryStore::default();
    let surface = RecordingSurface::default();
    {
        let mut theme = ThemeManager::new(&store, &surface);
        theme.restore();
        theme.toggle();
    }

    let mut next_session = ThemeManager::new(&store, &surface);
    assert_eq!(next_session.restore(), ThemeMode::Dark);
}

#[test]
fn changes_persist_before_applying() {
    let log = EventLog::default();
    let mut theme = ThemeManager::new(&log, &log);

    theme.restore();
    theme.toggle();

    assert_eq!(log.events.borrow().as_slice(), &["save", "apply", "save", "apply"]);
}

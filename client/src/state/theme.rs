//! Light/dark display preference and its persistence rules.
//!
//! DESIGN
//! ======
//! `ThemeManager` is the only writer of the page-wide theme flag. It restores
//! the flag once at mount, flips it on explicit toggles, and after every change
//! persists the value and then applies it to the document. Storage and the
//! document are reached through `PreferenceStore` and `ThemeSurface` so the
//! rules run unchanged in the browser, during SSR, and in tests.
//!
//! A stored value that does not decode is treated as absent; there is no
//! error path.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Storage key holding the JSON-encoded dark flag.
pub const THEME_STORAGE_KEY: &str = "darkMode";

/// Two-valued display preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Decode a persisted value. Only the JSON booleans `true` and `false` are
    /// recognized.
    #[must_use]
    pub fn from_stored(raw: &str) -> Option<Self> {
        serde_json::from_str::<bool>(raw)
            .ok()
            .map(|dark| if dark { Self::Dark } else { Self::Light })
    }

    /// Encode for persistence; inverse of [`ThemeMode::from_stored`].
    #[must_use]
    pub fn as_stored(self) -> &'static str {
        if self.is_dark() { "true" } else { "false" }
    }
}

/// Durable key/value storage for a single preference.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// Whole-page presentation context that reflects the current mode.
pub trait ThemeSurface {
    fn apply(&self, mode: ThemeMode);
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn load(&self, key: &str) -> Option<String> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) {
        (**self).save(key, value);
    }
}

impl<T: ThemeSurface + ?Sized> ThemeSurface for &T {
    fn apply(&self, mode: ThemeMode) {
        (**self).apply(mode);
    }
}

/// Owner of the session's theme flag.
#[derive(Debug)]
pub struct ThemeManager<S, A> {
    mode: ThemeMode,
    store: S,
    surface: A,
}

impl<S: PreferenceStore, A: ThemeSurface> ThemeManager<S, A> {
    /// Create a manager in the default (`Light`) mode. No side effects run
    /// until [`ThemeManager::restore`] or [`ThemeManager::toggle`].
    pub fn new(store: S, surface: A) -> Self {
        Self { mode: ThemeMode::default(), store, surface }
    }

    /// Current mode.
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Load the persisted preference, falling back to the current mode when it
    /// is absent or malformed, then persist and apply the result.
    pub fn restore(&mut self) -> ThemeMode {
        match self.store.load(THEME_STORAGE_KEY).as_deref().map(ThemeMode::from_stored) {
            Some(Some(mode)) => self.mode = mode,
            Some(None) => log::debug!("ignoring malformed theme preference"),
            None => {}
        }
        log::debug!("theme restored: {:?}", self.mode);
        self.commit();
        self.mode
    }

    /// Flip between light and dark, then persist and apply.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        log::debug!("theme toggled: {:?}", self.mode);
        self.commit();
        self.mode
    }

    fn commit(&self) {
        self.store.save(THEME_STORAGE_KEY, self.mode.as_stored());
        self.surface.apply(self.mode);
    }
}

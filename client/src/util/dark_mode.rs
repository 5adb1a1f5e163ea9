//! Browser adapters for the theme preference.
//!
//! `LocalPreferenceStore` reads and writes `localStorage`; `DocumentThemeSurface`
//! adds or removes the `dark` class on the `<html>` element so every styled
//! element can key off one ambient flag. Both require a browser environment
//! and no-op elsewhere.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::{PreferenceStore, ThemeManager, ThemeMode, ThemeSurface};

/// Class toggled on the document element while dark mode is active.
pub const DARK_CLASS: &str = "dark";

/// Theme manager wired to the real browser.
pub type BrowserThemeManager = ThemeManager<LocalPreferenceStore, DocumentThemeSurface>;

/// Build a [`BrowserThemeManager`] in its default state.
pub fn browser_theme_manager() -> BrowserThemeManager {
    ThemeManager::new(LocalPreferenceStore, DocumentThemeSurface)
}

/// `window.localStorage`, looked up on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalPreferenceStore;

impl PreferenceStore for LocalPreferenceStore {
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn save(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                return;
            };
            let _ = storage.set_item(key, value);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

/// The `<html>` element's class list.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentThemeSurface;

impl ThemeSurface for DocumentThemeSurface {
    fn apply(&self, mode: ThemeMode) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                if let Some(el) = doc.document_element() {
                    let class_list = el.class_list();
                    if mode.is_dark() {
                        let _ = class_list.add_1(DARK_CLASS);
                    } else {
                        let _ = class_list.remove_1(DARK_CLASS);
                    }
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = mode;
        }
    }
}

#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn local_store_reads_nothing_outside_browser() {
    LocalPreferenceStore.save("darkMode", "true");
    assert_eq!(LocalPreferenceStore.load("darkMode"), None);
}

#[test]
fn document_surface_apply_is_noop_but_callable() {
    DocumentThemeSurface.apply(ThemeMode::Light);
    DocumentThemeSurface.apply(ThemeMode::Dark);
}

#[test]
fn browser_manager_restores_light_outside_browser() {
    let mut theme = browser_theme_manager();
    assert_eq!(theme.restore(), ThemeMode::Light);
    assert_eq!(theme.toggle(), ThemeMode::Dark);
}

use super::*;

#[test]
fn toggle_glyph_offers_opposite_mode() {
    assert_eq!(toggle_glyph(ThemeMode::Light), "☾");
    assert_eq!(toggle_glyph(ThemeMode::Dark), "☀");
}

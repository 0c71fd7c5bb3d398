use ecosmart_core::{
    JsonFilePreferenceStore, MemoryPreferenceStore, PreferenceStore, Theme, ThemeController,
};

const KEY: &str = "ecosmart-theme";

#[test]
fn absent_preference_loads_light() {
    let controller = ThemeController::load(MemoryPreferenceStore::new(), KEY);
    assert_eq!(controller.current(), Theme::Light);
    assert_eq!(controller.current().toggle_glyph(), "\u{1F319}");
}

#[test]
fn stored_dark_loads_dark() {
    let controller = ThemeController::load(MemoryPreferenceStore::with_item(KEY, "dark"), KEY);
    assert_eq!(controller.current(), Theme::Dark);
    assert_eq!(controller.current().toggle_glyph(), "\u{2600}\u{FE0F}");
}

#[test]
fn unexpected_stored_value_loads_light() {
    let controller = ThemeController::load(MemoryPreferenceStore::with_item(KEY, "midnight"), KEY);
    assert_eq!(controller.current(), Theme::Light);
}

#[test]
fn display_and_store_agree_after_each_toggle() {
    let mut controller = ThemeController::load(MemoryPreferenceStore::new(), KEY);

    let first = controller.toggle();
    assert_eq!(first, Theme::Dark);
    assert_eq!(
        controller.store().get_item(KEY).unwrap().as_deref(),
        Some("dark")
    );

    let second = controller.toggle();
    assert_eq!(second, Theme::Light);
    assert_eq!(
        controller.store().get_item(KEY).unwrap().as_deref(),
        Some("light")
    );
}

#[test]
fn double_toggle_restores_original_state() {
    for initial in ["dark", "light"] {
        let mut controller =
            ThemeController::load(MemoryPreferenceStore::with_item(KEY, initial), KEY);
        let before = controller.current();
        controller.toggle();
        controller.toggle();
        assert_eq!(controller.current(), before);
        assert_eq!(
            controller.store().get_item(KEY).unwrap().as_deref(),
            Some(initial)
        );
    }
}

#[test]
fn preference_survives_reload_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    let mut first_load = ThemeController::load(JsonFilePreferenceStore::new(&path), KEY);
    assert_eq!(first_load.toggle(), Theme::Dark);

    let second_load = ThemeController::load(JsonFilePreferenceStore::new(&path), KEY);
    assert_eq!(second_load.current(), Theme::Dark);
}

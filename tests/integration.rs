// SPDX-License-Identifier: MPL-2.0
use iced_storefront::catalog;
use iced_storefront::config::{self, Config, DEFAULT_SLIDE_INTERVAL_MS};
use iced_storefront::i18n::I18n;
use iced_storefront::ui::hero;
use iced_storefront::ui::state::SlideInterval;
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_cli_language_overrides_config() {
    let mut config = Config::default();
    config.general.language = Some("en-US".to_string());

    let i18n = I18n::new(Some("fr".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "fr");
}

#[test]
fn test_homepage_settings_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.homepage.slide_interval_ms = Some(7500);
    config.homepage.auto_advance = Some(false);
    config.homepage.scroll_threshold_px = Some(80.0);
    config::save_to_path(&config, &temp_config_file_path).expect("Failed to write config file");

    let loaded =
        config::load_from_path(&temp_config_file_path).expect("Failed to load config from path");
    assert_eq!(loaded.homepage.slide_interval_ms, Some(7500));
    assert_eq!(loaded.homepage.auto_advance, Some(false));
    assert_eq!(loaded.homepage.scroll_threshold_px, Some(80.0));

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_slider_full_cycle_with_manual_jump() {
    // Drives the hero slider through the same scenario a user would:
    // let it advance once, click a dot, then verify the cycle restarts
    // from the clicked slide.
    let interval = SlideInterval::new(DEFAULT_SLIDE_INTERVAL_MS);
    let mut state = hero::State::new(catalog::showcase_slides(), interval.as_duration(), true);
    let slide_count = catalog::showcase_slides().len();
    assert!(slide_count >= 2);

    let start = Instant::now();
    assert_eq!(state.current(), 0);

    // One full interval elapses: slide advances to 1.
    assert!(state.tick(start + interval.as_duration()));
    assert_eq!(state.current(), 1);

    // User clicks the last dot shortly after.
    state.update(hero::Message::JumpTo(slide_count - 1));
    assert_eq!(state.current(), slide_count - 1);

    // The automatic cycle restarts from the click, so the next advance
    // happens a full interval later and wraps to the first slide.
    let jump_at = Instant::now();
    assert!(!state.tick(jump_at + Duration::from_millis(100)));
    assert!(state.tick(jump_at + interval.as_duration() + interval.as_duration()));
    assert_eq!(state.current(), 0);
}

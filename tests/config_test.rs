//! Tests for settings loading, defaults, and validation.

use tictac_frenzy::GameConfig;

#[test]
fn test_defaults_make_a_playable_game() {
    let config = GameConfig::default();
    assert_eq!(*config.min_players(), 2);
    assert_eq!(*config.min_grid_size(), 3);
    assert_eq!(*config.rng_seed(), None);
    assert_eq!(*config.bot_think_millis(), 0);
}

#[test]
fn test_partial_file_keeps_defaults_for_unset_keys() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "rng_seed = 7\nmin_players = 3\n").expect("write config");

    let config = GameConfig::from_file(&path).expect("config loads");
    assert_eq!(*config.min_players(), 3);
    assert_eq!(*config.rng_seed(), Some(7));
    assert_eq!(*config.min_grid_size(), 3, "unset keys fall back to defaults");
}

#[test]
fn test_missing_file_means_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config =
        GameConfig::from_file_or_default(dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(*config.min_players(), 2);
}

#[test]
fn test_unplayable_minimums_are_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "min_players = 1\n").expect("write config");

    let err = GameConfig::from_file(&path).expect_err("one player cannot play");
    assert!(err.to_string().contains("min_players"));
}

#[test]
fn test_malformed_toml_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "min_players = [oops\n").expect("write config");

    let err = GameConfig::from_file(&path).expect_err("broken toml");
    assert!(err.to_string().contains("parse"));
}

#[test]
fn test_seed_can_be_overridden_after_loading() {
    let config = GameConfig::default().with_rng_seed(Some(123));
    assert_eq!(*config.rng_seed(), Some(123));
}

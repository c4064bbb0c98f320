//! Tests for loading game config files.

use std::fs;
use tempfile::TempDir;

use strictly_reversi::Player;
use strictly_reversi_cli::GameConfig;

#[test]
fn test_load_full_config() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("game.toml");
    fs::write(
        &path,
        r#"player_one = "Ada"
player_two = "Grace"
show_hints = false
"#,
    )
    .expect("Failed to write TOML");

    let config = GameConfig::from_file(&path).expect("Load failed");
    assert_eq!(config.player_one(), "Ada");
    assert_eq!(config.player_two(), "Grace");
    assert!(!*config.show_hints());
    assert_eq!(config.names().name(Player::Two), "Grace");
}

#[test]
fn test_missing_fields_use_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("game.toml");
    fs::write(&path, "player_two = \"Grace\"\n").expect("Failed to write TOML");

    let config = GameConfig::from_file(&path).expect("Load failed");
    assert!(*config.show_hints());
    assert_eq!(config.names().name(Player::One), "Player One");
}

#[test]
fn test_missing_file_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_invalid_toml_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "this is not valid toml !!!@@@").expect("Write failed");

    let err = GameConfig::from_file(&path).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

//! Tests for the console play loop and replay.

use strictly_reversi::{Outcome, Player};
use strictly_reversi_cli::{Console, GameConfig, replay};

const TERMINAL_GAME: &str = "e3\nf3\ng3\ng2\nc5\nh3\nh1\nf1\n";

fn config(one: &str, two: &str) -> GameConfig {
    GameConfig::default().with_overrides(Some(one.to_string()), Some(two.to_string()), false)
}

fn play(script: &str) -> (usize, Console<&[u8], Vec<u8>>) {
    let config = config("Ada", "Grace");
    let mut console = Console::new(&config, script.as_bytes(), Vec::new());
    let finished = console.run().expect("Console failed");
    (finished, console)
}

#[test]
fn test_full_game_announces_winner() {
    let script = format!("{TERMINAL_GAME}n\n");
    let config = config("Ada", "Grace");
    let mut output = Vec::new();
    let finished = Console::new(&config, script.as_bytes(), &mut output)
        .run()
        .expect("Console failed");
    let out = String::from_utf8(output).expect("utf8");

    assert_eq!(finished, 1);
    assert!(out.contains("Ada wins! (8 - 4)"));
    assert!(out.contains("Start again? [y/N]"));
    assert!(!out.contains("Invalid move"));
}

#[test]
fn test_restart_after_game_over() {
    let script = format!("{TERMINAL_GAME}y\ne3\n");
    let (finished, console) = play(&script);

    assert_eq!(finished, 1);
    let session = console.session();
    assert!(!session.phase().is_over());
    assert_eq!(session.phase().history().len(), 1);
    assert_eq!(session.active_player(), Some(Player::Two));
}

#[test]
fn test_rejected_move_keeps_turn() {
    let (_, console) = play("d3\n3,3\n");
    let session = console.session();
    assert_eq!(session.active_player(), Some(Player::One));
    assert!(session.phase().history().is_empty());
}

#[test]
fn test_replay_to_game_over() {
    let moves: Vec<String> = TERMINAL_GAME.lines().map(String::from).collect();
    let session = replay(&moves, &config("Ada", "Grace")).expect("Replay failed");
    let game_over = session.game_over().expect("Game should be over");
    assert_eq!(game_over.outcome, Outcome::Winner(Player::One));
    assert_eq!(game_over.message(), "Ada wins! (8 - 4)");
}

#[test]
fn test_replay_rejects_moves_after_game_over() {
    let mut moves: Vec<String> = TERMINAL_GAME.lines().map(String::from).collect();
    moves.push("d3".to_string());
    let err = replay(&moves, &GameConfig::default()).unwrap_err();
    assert!(err.to_string().contains("Game is already over"));
}

#[test]
fn test_replay_accepts_every_notation() {
    // e3, f3 and f4 written as label, row/col pair and index.
    let moves = vec!["e3".to_string(), "2,5".to_string(), "29".to_string()];
    let session = replay(&moves, &GameConfig::default()).expect("Replay failed");
    assert_eq!(session.phase().history().len(), 3);
    assert_eq!(session.active_player(), Some(Player::Two));
}

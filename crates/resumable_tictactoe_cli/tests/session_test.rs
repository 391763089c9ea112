//! Tests for the interactive game loop, driven by scripted input.

use resumable_tictactoe::{GameState, Marker, SaveSlot};
use resumable_tictactoe_cli::{Renderer, Session, SessionOutcome};
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

fn setup_slot() -> (TempDir, SaveSlot) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let slot = SaveSlot::new(dir.path().join("game_state.txt"));
    (dir, slot)
}

/// Runs a session over `script` and returns its outcome and everything printed.
fn play(slot: &SaveSlot, script: &str, resume: Option<bool>) -> (SessionOutcome, String) {
    let input = Cursor::new(script.as_bytes().to_vec());
    let mut session = Session::new(input, Vec::new(), slot.clone(), Renderer::new(false));
    let outcome = session.run(resume).expect("Session failed");
    let output = String::from_utf8(session.into_output()).expect("Output not UTF-8");
    (outcome, output)
}

#[test]
fn test_top_row_win() {
    let (_dir, slot) = setup_slot();
    let (outcome, output) = play(&slot, "n\n1\n1\n5\n2\n4\n3\n", None);

    assert_eq!(outcome, SessionOutcome::Won(Marker::X));
    assert!(output.contains("That cell is already taken"));
    assert!(output.contains("Player 1 (X) wins! Congrats!"));
    assert!(output.contains("    X | X | X\n"));
    assert!(output.ends_with("Thanks for playing!\n\n"));
}

#[test]
fn test_draw() {
    let (_dir, slot) = setup_slot();
    let (outcome, output) = play(&slot, "1\n2\n3\n5\n4\n7\n8\n6\n9\n", Some(false));

    assert_eq!(outcome, SessionOutcome::Draw);
    assert!(output.contains("It's a draw! Good game!"));
}

#[test]
fn test_invalid_input_reprompts() {
    let (_dir, slot) = setup_slot();
    let (outcome, output) = play(&slot, "n\nabc\n10\n-3\n99999999999999999999\n", None);

    assert_eq!(outcome, SessionOutcome::Abandoned);
    assert_eq!(output.matches("Invalid input. Please enter a number between 1 and 9.").count(), 1);
    assert_eq!(output.matches("Invalid move. Choose a position from 1 to 9.").count(), 3);
    assert_eq!(output.matches("Player 1 (X), choose a move").count(), 5);
}

#[test]
fn test_save_and_quit_then_resume() {
    let (_dir, slot) = setup_slot();

    let (outcome, output) = play(&slot, "n\n1\n5\n0\n", None);
    assert_eq!(outcome, SessionOutcome::Saved);
    assert!(output.contains("Game state saved!"));
    assert!(slot.exists());

    let (outcome, output) = play(&slot, "y\n2\n4\n3\n", None);
    assert!(output.contains("Game loaded successfully!"));
    assert!(output.contains("Player 1 (X), choose a move"));
    assert_eq!(outcome, SessionOutcome::Won(Marker::X));
    assert!(!slot.exists());
}

#[test]
fn test_resume_without_record_starts_fresh() {
    let (_dir, slot) = setup_slot();
    let (outcome, output) = play(&slot, "y\n", None);

    assert_eq!(outcome, SessionOutcome::Abandoned);
    assert!(output.contains("No saved game found. Starting a new game."));
}

#[test]
fn test_corrupt_record_is_reported_and_replaced() {
    let (_dir, slot) = setup_slot();
    fs::write(slot.path(), "X--\n---\n").expect("Write failed");

    let (outcome, output) = play(&slot, "", Some(true));
    assert_eq!(outcome, SessionOutcome::Abandoned);
    assert!(output.contains("Saved game is damaged"));
    assert!(!output.contains("Game loaded successfully!"));
    assert!(!slot.exists());
}

#[test]
fn test_win_removes_existing_record() {
    let (_dir, slot) = setup_slot();
    let mut stale = GameState::new();
    stale.apply_move(9).expect("empty cell");
    slot.save(&stale).expect("Save failed");

    // Start fresh while a record exists; finishing must clear it.
    let (outcome, _) = play(&slot, "1\n4\n2\n5\n3\n", Some(false));
    assert_eq!(outcome, SessionOutcome::Won(Marker::X));
    assert!(!slot.exists());
}

#[test]
fn test_failed_save_is_not_reported_as_saved() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    // A directory cannot be written as a file.
    let slot = SaveSlot::new(dir.path());

    let (outcome, output) = play(&slot, "0\n", Some(false));
    assert_eq!(outcome, SessionOutcome::Abandoned);
    assert!(output.contains("Could not save the game"));
    assert!(!output.contains("Game state saved!"));
}

#[test]
fn test_player_two_wins() {
    let (_dir, slot) = setup_slot();
    // O takes the middle column.
    let (outcome, output) = play(&slot, "1\n2\n3\n5\n4\n8\n", Some(false));

    assert_eq!(outcome, SessionOutcome::Won(Marker::O));
    assert!(output.contains("Player 2 (O) wins! Congrats!"));
}

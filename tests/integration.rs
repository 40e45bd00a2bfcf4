//! Integration tests for the kalaha engine binary.
//!
//! Tests full protocol sessions by spawning the engine process, sending
//! commands via stdin, and verifying stdout responses.

use std::io::{BufRead, Write};
use std::process::{Command, Stdio};

/// Sends a sequence of commands to the engine and collects stdout lines.
fn run_engine(commands: &[&str]) -> Vec<String> {
    let exe = env!("CARGO_BIN_EXE_kalaha");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start kalaha");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let reader = std::io::BufReader::new(stdout);

    for cmd in commands {
        writeln!(stdin, "{}", cmd).unwrap();
    }
    stdin.flush().unwrap();
    drop(stdin);

    let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
    let status = child.wait().expect("failed to wait on child");
    assert!(status.success());
    lines
}

/// Fresh six-stone board, Player One to move.
const OPENING_ONE: &str = "6,6,6,6,6,6,0,6,6,6,6,6,6,0/1/-";

/// Player One has a single stone left in pit f; Player Two holds 5 in pit v.
const ENDGAME: &str = "0,0,0,0,0,1,30,0,5,0,0,0,0,20/1/-";

#[test]
fn handshake() {
    let lines = run_engine(&["kalaha", "quit"]);
    assert_eq!(lines.first().map(String::as_str), Some("id name kalaha"));
    assert!(lines.iter().any(|l| l.starts_with("option name Stones")));
    assert_eq!(lines.last().map(String::as_str), Some("kalahaok"));
}

#[test]
fn isready_response() {
    let lines = run_engine(&["isready", "quit"]);
    assert_eq!(lines, vec!["readyok".to_string()]);
}

#[test]
fn unknown_commands_are_ignored() {
    let lines = run_engine(&["foobar", "", "play", "isready", "quit"]);
    assert_eq!(lines, vec!["readyok".to_string()]);
}

#[test]
fn newgame_respects_stones_option() {
    let lines = run_engine(&["setoption name Stones value 4", "newgame", "quit"]);
    assert_eq!(lines.len(), 1);
    let line = &lines[0];
    assert!(line.starts_with("game 1 4,4,4,4,4,4,0,4,4,4,4,4,4,0/"), "{}", line);
    assert!(line.ends_with("/1/-") || line.ends_with("/2/-"), "{}", line);
}

#[test]
fn play_opening_passes_turn() {
    let position = format!("position {}", OPENING_ONE);
    let lines = run_engine(&[&position, "play 1 1", "quit"]);
    assert_eq!(lines[0], format!("game 1 {}", OPENING_ONE));
    assert_eq!(
        lines[1],
        "turn 1 6,0,7,7,7,7,1,7,6,6,6,6,6,0/2/- landing 7 captured 0"
    );
}

#[test]
fn play_into_own_store_keeps_turn() {
    let position = format!("position {}", OPENING_ONE);
    let lines = run_engine(&[&position, "play 1 0", "quit"]);
    assert_eq!(
        lines[1],
        "turn 1 0,7,7,7,7,7,1,6,6,6,6,6,6,0/1/- landing 6 captured 0"
    );
}

#[test]
fn invalid_selections_report_error_kinds() {
    let position = format!("position {}", OPENING_ONE);
    let lines = run_engine(&[
        &position,
        "play 1 20",
        "play 1 -1",
        "play 1 13",
        "play 1 9",
        "play 2 0",
        "show 1",
        "quit",
    ]);
    assert_eq!(lines[1], "error 1 out_of_range");
    assert_eq!(lines[2], "error 1 out_of_range");
    assert_eq!(lines[3], "error 1 store_selected");
    assert_eq!(lines[4], "error 1 opponent_pit");
    assert_eq!(lines[5], "error 2 not_found");
    assert_eq!(lines[6], format!("game 1 {}", OPENING_ONE));
}

#[test]
fn empty_pit_is_rejected() {
    let lines = run_engine(&["position 0,6,6,6,6,6,0,6,6,6,6,6,6,6/1/-", "play 1 0", "quit"]);
    assert_eq!(lines[1], "error 1 empty_pit");
}

#[test]
fn endgame_settles_and_locks_game() {
    let position = format!("position {}", ENDGAME);
    let lines = run_engine(&[&position, "play 1 5", "play 1 8", "quit"]);
    assert_eq!(
        lines[1],
        "turn 1 0,0,0,0,0,0,31,0,0,0,0,0,0,25/1/1 landing 6 captured 0"
    );
    assert_eq!(lines[2], "error 1 game_over");
}

#[test]
fn tie_break_option_changes_outcome() {
    let tied = "position 0,0,0,0,0,1,23,0,4,0,0,0,0,20/1/-";
    let second = run_engine(&[tied, "play 1 5", "quit"]);
    assert!(second[1].contains("/1/2 "), "{}", second[1]);

    let draw = run_engine(&["setoption name TieBreak value draw", tied, "play 1 5", "quit"]);
    assert!(draw[1].contains("/1/= "), "{}", draw[1]);
}

#[test]
fn independent_games_do_not_interact() {
    let position = format!("position {}", OPENING_ONE);
    let lines = run_engine(&[&position, &position, "play 1 2", "show 2", "delete 1", "show 1", "quit"]);
    assert_eq!(lines[0], format!("game 1 {}", OPENING_ONE));
    assert_eq!(lines[1], format!("game 2 {}", OPENING_ONE));
    assert!(lines[2].starts_with("turn 1 "));
    assert_eq!(lines[3], format!("game 2 {}", OPENING_ONE));
    assert_eq!(lines[4], "deleted 1");
    assert_eq!(lines[5], "error 1 not_found");
}

#[test]
fn bad_position_is_reported() {
    let lines = run_engine(&["position 1,2,3/1/-", "quit"]);
    assert_eq!(lines, vec!["error - notation".to_string()]);
}

#[test]
fn position_with_empty_side_is_settled_on_load() {
    let lines = run_engine(&[
        "position 0,0,0,0,0,0,30,0,5,0,0,0,0,20/1/-",
        "play 1 0",
        "show 1",
        "quit",
    ]);
    assert_eq!(lines[0], "game 1 0,0,0,0,0,0,30,0,0,0,0,0,0,25/1/1");
    assert_eq!(lines[1], "error 1 game_over");
    assert_eq!(lines[2], "game 1 0,0,0,0,0,0,30,0,0,0,0,0,0,25/1/1");
}

#[test]
fn oversized_inputs_are_rejected() {
    let lines = run_engine(&[
        "position 0,0,0,0,0,1,4294967295,0,5,0,0,0,0,20/1/-",
        "setoption name Stones value 4000000000",
        "newgame",
        "quit",
    ]);
    assert_eq!(lines[0], "error - notation");
    assert!(lines[1].starts_with("game 1 6,6,6,6,6,6,0,6,6,6,6,6,6,0/"), "{}", lines[1]);
}

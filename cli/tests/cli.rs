//! Exercises the CLI surface end to end: the bundled sample, a bad input
//! file, and an over-subscribed convention.

use std::io::Write;
use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_table-scheduler"))
}

#[test]
fn bundled_sample_solves_with_exit_zero() {
    let output = bin().output().expect("failed to run binary");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("==== Session"));
}

#[test]
fn malformed_games_file_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    let games_path = dir.path().join("games.json");
    let mut f = std::fs::File::create(&games_path).unwrap();
    write!(f, "not valid json").unwrap();

    let output = bin().arg("--games").arg(&games_path).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn oversubscribed_convention_exits_zero_with_diagnosis() {
    let dir = tempfile::tempdir().unwrap();
    let games_path = dir.path().join("games.json");
    let sessions_path = dir.path().join("sessions.json");
    let players_path = dir.path().join("players.json");

    std::fs::write(
        &games_path,
        r#"[{"id":1,"name":"X","full_name":"X","min_players":3,"max_players":4,
            "min_playtime":240,"max_playtime":240,"popularity":{},"owned":1}]"#,
    )
    .unwrap();
    std::fs::write(
        &sessions_path,
        r#"[{"name":"Packed","length":240}]"#,
    )
    .unwrap();
    let mut players = vec![r#"{"name":"Owner","owns":["X"],"interests":[],"sessions":[0]}"#.to_string()];
    for i in 1..20 {
        players.push(format!(
            r#"{{"name":"P{i}","owns":[],"interests":[],"sessions":[0]}}"#
        ));
    }
    std::fs::write(&players_path, format!("[{}]", players.join(","))).unwrap();

    let output = bin()
        .arg("--games")
        .arg(&games_path)
        .arg("--sessions")
        .arg(&sessions_path)
        .arg("--players")
        .arg(&players_path)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("over-subscribed"));
}

//! table-scheduler: CLI driver for the games-convention table scheduler.
//!
//! Reads the three catalog files, assembles a
//! [`ScheduleInput`], hands it to `table-scheduler-core`, and prints the
//! solved schedule or a diagnosis to stdout.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use table_scheduler_core::build_schedule;
use table_scheduler_core::error::ScheduleError;
use table_scheduler_core::io;
use table_scheduler_core::models::{ScheduleConfig, ScheduleInput, SharedGameDecl};

const SAMPLE_GAMES: &str = include_str!("../sample/games.json");
const SAMPLE_SESSIONS: &str = include_str!("../sample/sessions.json");
const SAMPLE_PLAYERS: &str = include_str!("../sample/players.json");

/// Assign convention attendees to game tables across sessions.
#[derive(Parser)]
#[command(name = "table-scheduler")]
#[command(version = "0.1.0")]
#[command(about = "Games-convention table scheduler", long_about = None)]
struct Cli {
    /// Path to players JSON. Defaults to a bundled sample convention.
    #[arg(long, value_name = "PATH")]
    players: Option<PathBuf>,

    /// Path to sessions JSON. Defaults to a bundled sample convention.
    #[arg(long, value_name = "PATH")]
    sessions: Option<PathBuf>,

    /// Path to games JSON. Defaults to a bundled sample convention.
    #[arg(long, value_name = "PATH")]
    games: Option<PathBuf>,

    /// Maximum number of distinct tables per session. Default: unbounded.
    #[arg(long, value_name = "N")]
    table_limit: Option<u32>,

    /// Declare a shared-game cap: GAMENAME or GAMENAME:CAP (repeatable).
    #[arg(long = "shared", value_name = "GAMENAME[:CAP]")]
    shared: Vec<String>,

    /// Increase log verbosity (-v for info, -vv for debug). RUST_LOG still wins if set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    if std::env::var_os("RUST_LOG").is_none() {
        let level = match verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        };
        builder.filter_level(level);
    }
    builder.init();
}

fn read_or_sample(path: &Option<PathBuf>, sample: &str) -> Result<(String, String)> {
    match path {
        Some(p) => {
            let content = fs::read_to_string(p)
                .with_context(|| format!("failed to read {}", p.display()))?;
            Ok((p.display().to_string(), content))
        }
        None => Ok(("<bundled sample>".to_string(), sample.to_string())),
    }
}

fn parse_shared_decl(raw: &str) -> Result<SharedGameDecl> {
    match raw.split_once(':') {
        Some((game, cap_str)) => {
            let cap: u32 = cap_str
                .parse()
                .with_context(|| format!("invalid cap in --shared {raw}"))?;
            Ok(SharedGameDecl {
                game: game.to_string(),
                cap,
            })
        }
        None => Ok(SharedGameDecl {
            game: raw.to_string(),
            cap: SharedGameDecl::DEFAULT_CAP,
        }),
    }
}

/// Maps a [`ScheduleError`] to its stdout/stderr rendering and exit code
/// (§6: 0 for solved-or-diagnosed-infeasible, nonzero for input error).
fn report_schedule_error(err: ScheduleError) -> i32 {
    match err {
        ScheduleError::InputParseError { .. } | ScheduleError::InputConsistencyError(_) => {
            eprintln!("{err}");
            2
        }
        ScheduleError::ModelInfeasible(_) => {
            println!("{err}");
            0
        }
        ScheduleError::SolverError(_) => {
            eprintln!("{err}");
            3
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let (games_path, games_content) = read_or_sample(&cli.games, SAMPLE_GAMES)?;
    let (sessions_path, sessions_content) = read_or_sample(&cli.sessions, SAMPLE_SESSIONS)?;
    let (players_path, players_content) = read_or_sample(&cli.players, SAMPLE_PLAYERS)?;

    let games = match io::parse_games(&games_path, &games_content) {
        Ok(v) => v,
        Err(e) => return Ok(report_schedule_error(e)),
    };
    let sessions = match io::parse_sessions(&sessions_path, &sessions_content) {
        Ok(v) => v,
        Err(e) => return Ok(report_schedule_error(e)),
    };
    let players = match io::parse_players(&players_path, &players_content) {
        Ok(v) => v,
        Err(e) => return Ok(report_schedule_error(e)),
    };

    let mut shared_games = Vec::with_capacity(cli.shared.len());
    for raw in &cli.shared {
        shared_games.push(parse_shared_decl(raw)?);
    }

    let input = ScheduleInput {
        games,
        sessions,
        players,
        config: ScheduleConfig {
            table_limit: cli.table_limit,
            shared_games,
        },
    };

    match build_schedule(&input) {
        Ok(outcome) => {
            for warning in &outcome.warnings {
                log::warn!("{warning}");
            }
            println!("{}", outcome.schedule);
            Ok(0)
        }
        Err(e) => Ok(report_schedule_error(e)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let code = run(cli)?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

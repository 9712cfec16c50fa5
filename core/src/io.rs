//! Thin JSON-parsing helpers for the three input files (§6).
//!
//! The core owns the `InputParseError` kind (§7) since it owns the types
//! being parsed into; reading the bytes off disk (and choosing a bundled
//! fallback) is the driver's job, so these functions take already-read
//! string content plus a path label used only for the error message.

use crate::error::ScheduleError;
use crate::models::{GameRecord, PlayerDef, SessionDef};

fn parse<T: serde::de::DeserializeOwned>(path: &str, content: &str) -> Result<T, ScheduleError> {
    serde_json::from_str(content).map_err(|source| ScheduleError::InputParseError {
        path: path.to_string(),
        source,
    })
}

pub fn parse_games(path: &str, content: &str) -> Result<Vec<GameRecord>, ScheduleError> {
    parse(path, content)
}

pub fn parse_sessions(path: &str, content: &str) -> Result<Vec<SessionDef>, ScheduleError> {
    parse(path, content)
}

pub fn parse_players(path: &str, content: &str) -> Result<Vec<PlayerDef>, ScheduleError> {
    parse(path, content)
}

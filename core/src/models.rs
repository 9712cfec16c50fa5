//! Data models for the table-scheduler API.
//!
//! These are the structures that flow in from the three JSON input files
//! (`games.json`, `sessions.json`, `players.json`) plus the small amount of
//! configuration that only the CLI driver knows about (table limit, shared
//! copies). Everything here is intentionally close to the JSON shape, so
//! that a caller can `serde_json::from_str` straight into it; the
//! normalization and index-building that turns this into solver-ready data
//! lives in [`crate::catalog`] and [`crate::index`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single entry from `games.json`.
///
/// `id` and `owned` are carried through for round-tripping but are not
/// consumed by the scheduler; `name` is the short id other inputs refer to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    /// Numeric id from the catalog source. Unused by the core.
    #[serde(default)]
    pub id: i64,
    /// Short identifier used by players' `owns`/`interests` and by output.
    pub name: String,
    /// Human-readable name. Unused by the core beyond round-tripping.
    #[serde(default)]
    pub full_name: String,
    pub min_players: i64,
    pub max_players: i64,
    /// Minimum playtime in minutes.
    pub min_playtime: i64,
    /// Maximum playtime in minutes.
    pub max_playtime: i64,
    /// Player-count (as a string key, e.g. `"4"`) to popularity weight in `[0, 1]`.
    #[serde(default)]
    pub popularity: HashMap<String, f64>,
    /// Number of physical copies owned by the convention. Unused by the core.
    #[serde(default)]
    pub owned: i64,
}

/// A single entry from `sessions.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDef {
    pub name: String,
    /// Length of the session in minutes.
    pub length: i64,
}

/// A single entry from `players.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerDef {
    pub name: String,
    /// Game ids this player can bring a physical copy of.
    #[serde(default)]
    pub owns: Vec<String>,
    /// Game ids this player wishes to play at some point in the convention.
    #[serde(default)]
    pub interests: Vec<String>,
    /// Session indices (0-based) this player attends.
    #[serde(default)]
    pub sessions: Vec<i64>,
}

/// Declares that the convention only has a fixed number of physical copies
/// of a game available at once, capping the number of tables of it that may
/// be scheduled across the whole convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedGameDecl {
    pub game: String,
    /// Maximum total tables of this game across all sessions. The CLI
    /// defaults this to [`SharedGameDecl::DEFAULT_CAP`] when `--shared` is
    /// given without a `:CAP` suffix.
    pub cap: u32,
}

impl SharedGameDecl {
    /// Cap applied to a shared-game declaration with no explicit `:CAP` suffix.
    pub const DEFAULT_CAP: u32 = 1;
}

/// Configuration that does not come from the three catalog files: the
/// per-session table cap and any shared-game declarations. Supplied by the
/// CLI driver from its flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Maximum number of distinct tables per session. `None` means
    /// unbounded (in practice: the number of games that could possibly run
    /// in the busiest session).
    #[serde(default)]
    pub table_limit: Option<u32>,
    #[serde(default)]
    pub shared_games: Vec<SharedGameDecl>,
}

/// The complete input to a solve: the three catalog files plus the driver's
/// configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleInput {
    pub games: Vec<GameRecord>,
    pub sessions: Vec<SessionDef>,
    pub players: Vec<PlayerDef>,
    #[serde(default)]
    pub config: ScheduleConfig,
}

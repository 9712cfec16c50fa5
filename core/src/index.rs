//! Builds the integer-indexed problem representation that the rest of the
//! solver works with.
//!
//! Mirrors the reference solver's approach of converting string-keyed API
//! input into integer indices up front (fast array lookups, stable
//! iteration order) rather than carrying `String` keys through the MIP
//! construction. This is also where the input-consistency checks from §7
//! and the game-availability derivation from §3 happen.

use crate::catalog::{self, NormalizedGame};
use crate::effective::{self, EffectiveParams};
use crate::error::{ConsistencyWarning, ScheduleError};
use crate::models::ScheduleInput;
use log::debug;
use std::collections::{BTreeSet, HashMap, HashSet};

/// A player, with ids resolved to game/session indices.
#[derive(Debug, Clone)]
pub struct IndexedPlayer {
    pub name: String,
    pub owns: HashSet<usize>,
    pub interests: HashSet<usize>,
    pub sessions: HashSet<usize>,
}

/// A session, carrying its display name and length.
#[derive(Debug, Clone)]
pub struct IndexedSession {
    pub name: String,
    pub length: u32,
}

/// The fully resolved, validated problem, ready for variable/constraint
/// construction.
pub struct ProblemIndex {
    pub players: Vec<IndexedPlayer>,
    pub sessions: Vec<IndexedSession>,
    /// Game index to short name, in a stable (sorted) order.
    pub games: Vec<String>,
    pub game_lookup: HashMap<String, usize>,
    /// Parallel to `games`: the normalized catalog record.
    pub catalog: Vec<NormalizedGame>,
    /// Per session, the sorted list of game indices that are present
    /// (§3) and fit (§4.2) in that session.
    pub present: Vec<Vec<usize>>,
    /// Effective bounds for every (session, game) pair present in `present`.
    pub effective: HashMap<(usize, usize), EffectiveParams>,
}

fn positive_session_length(name: &str, length: i64) -> Result<u32, ScheduleError> {
    if length <= 0 {
        return Err(ScheduleError::InputConsistencyError(format!(
            "session '{name}' has a non-positive length: {length}"
        )));
    }
    Ok(length as u32)
}

/// Builds a [`ProblemIndex`] from raw input, returning any non-fatal
/// consistency warnings alongside it.
pub fn build(input: &ScheduleInput) -> Result<(ProblemIndex, Vec<ConsistencyWarning>), ScheduleError> {
    let sessions: Vec<IndexedSession> = input
        .sessions
        .iter()
        .map(|s| {
            Ok(IndexedSession {
                name: s.name.clone(),
                length: positive_session_length(&s.name, s.length)?,
            })
        })
        .collect::<Result<_, ScheduleError>>()?;
    let num_sessions = sessions.len();

    for player in &input.players {
        for &s in &player.sessions {
            if s < 0 || s as usize >= num_sessions {
                return Err(ScheduleError::InputConsistencyError(format!(
                    "player '{}' attends session index {}, but there are only {} sessions",
                    player.name, s, num_sessions
                )));
            }
        }
    }

    let mut referenced: BTreeSet<String> = BTreeSet::new();
    for player in &input.players {
        referenced.extend(player.owns.iter().cloned());
        referenced.extend(player.interests.iter().cloned());
    }
    let catalog_map = catalog::normalize(&input.games, referenced.iter().map(String::as_str))?;

    // Stable game ordering: every game from the catalog file in file order,
    // then any defaulted (referenced-only) game in sorted order. This keeps
    // solver output reproducible without depending on HashMap iteration.
    let mut games: Vec<String> = Vec::with_capacity(catalog_map.len());
    let mut seen = HashSet::with_capacity(catalog_map.len());
    for record in &input.games {
        if seen.insert(record.name.clone()) {
            games.push(record.name.clone());
        }
    }
    for id in &referenced {
        if seen.insert(id.clone()) {
            games.push(id.clone());
        }
    }
    let game_lookup: HashMap<String, usize> = games
        .iter()
        .enumerate()
        .map(|(i, name)| (name.clone(), i))
        .collect();
    let catalog: Vec<NormalizedGame> = games
        .iter()
        .map(|name| catalog_map[name].clone())
        .collect();

    let players: Vec<IndexedPlayer> = input
        .players
        .iter()
        .map(|p| IndexedPlayer {
            name: p.name.clone(),
            owns: p.owns.iter().filter_map(|id| game_lookup.get(id).copied()).collect(),
            interests: p
                .interests
                .iter()
                .filter_map(|id| game_lookup.get(id).copied())
                .collect(),
            sessions: p.sessions.iter().map(|&s| s as usize).collect(),
        })
        .collect();

    // Game availability (§3): present in session i iff some attendee of i owns it.
    let mut owners_by_game: Vec<HashSet<usize>> = vec![HashSet::new(); games.len()];
    for player in &players {
        for &game_idx in &player.owns {
            for &session_idx in &player.sessions {
                owners_by_game[game_idx].insert(session_idx);
            }
        }
    }

    let mut present: Vec<Vec<usize>> = vec![Vec::new(); sessions.len()];
    let mut effective: HashMap<(usize, usize), EffectiveParams> = HashMap::new();
    for (session_idx, session) in sessions.iter().enumerate() {
        for (game_idx, game) in catalog.iter().enumerate() {
            if !owners_by_game[game_idx].contains(&session_idx) {
                continue;
            }
            let params = effective::derive(game, session.length);
            if !params.fits {
                continue;
            }
            present[session_idx].push(game_idx);
            effective.insert((session_idx, game_idx), params);
        }
    }
    for slots in present.iter_mut() {
        slots.sort_unstable();
    }

    let mut warnings = Vec::new();
    for player in &players {
        for &game_idx in &player.interests {
            let reachable = player
                .sessions
                .iter()
                .any(|&s| present[s].contains(&game_idx));
            if !reachable {
                warnings.push(ConsistencyWarning {
                    player: player.name.clone(),
                    game: games[game_idx].clone(),
                });
            }
        }
    }

    debug!(
        "indexed problem: {} players, {} sessions, {} games ({} warnings)",
        players.len(),
        sessions.len(),
        games.len(),
        warnings.len()
    );

    Ok((
        ProblemIndex {
            players,
            sessions,
            games,
            game_lookup,
            catalog,
            present,
            effective,
        },
        warnings,
    ))
}

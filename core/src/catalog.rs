//! Catalog Normalizer (§4.1).
//!
//! Turns the raw `games.json` records into a lookup by short name, and
//! synthesizes a default record for any game a player references that the
//! catalog does not carry. Unknown games are never an error — see §7.

use crate::error::ScheduleError;
use crate::models::GameRecord;
use log::debug;
use std::collections::HashMap;

/// Defaults applied to a game referenced by a player but absent from the catalog.
pub const DEFAULT_MIN_PLAYERS: u32 = 3;
pub const DEFAULT_MAX_PLAYERS: u32 = 4;
pub const DEFAULT_PLAYTIME_MINUTES: u32 = 240;

/// A catalog entry after normalization: plain, validated, unsigned fields
/// and a popularity curve indexed by player count.
#[derive(Debug, Clone)]
pub struct NormalizedGame {
    pub min_players: u32,
    pub max_players: u32,
    pub min_playtime: u32,
    pub max_playtime: u32,
    /// Player count to popularity weight in `[0, 1]`. Counts not present
    /// here are treated as weight 0 (§4.1).
    pub popularity: HashMap<u32, f64>,
}

impl NormalizedGame {
    /// The synthesized record for a game that is referenced but missing
    /// from `games.json` (§3): a flat popularity curve of 1.0 across its
    /// (also defaulted) player-count range.
    fn defaulted() -> Self {
        let mut popularity = HashMap::new();
        for k in DEFAULT_MIN_PLAYERS..=DEFAULT_MAX_PLAYERS {
            popularity.insert(k, 1.0);
        }
        NormalizedGame {
            min_players: DEFAULT_MIN_PLAYERS,
            max_players: DEFAULT_MAX_PLAYERS,
            min_playtime: DEFAULT_PLAYTIME_MINUTES,
            max_playtime: DEFAULT_PLAYTIME_MINUTES,
            popularity,
        }
    }

    /// Popularity weight at a given assigned player count; 0 if the count
    /// has no entry in the curve.
    pub fn popularity_at(&self, count: u32) -> f64 {
        self.popularity.get(&count).copied().unwrap_or(0.0)
    }
}

fn positive_u32(label: &str, game: &str, value: i64) -> Result<u32, ScheduleError> {
    if value <= 0 {
        return Err(ScheduleError::InputConsistencyError(format!(
            "game '{game}': {label} must be a positive integer, got {value}"
        )));
    }
    Ok(value as u32)
}

/// Normalizes the raw catalog, then fills in defaults for every id in
/// `referenced` that the catalog did not define. `referenced` is the set of
/// game ids appearing in any player's `owns` or `interests`.
pub fn normalize<'a>(
    games: &[GameRecord],
    referenced: impl Iterator<Item = &'a str>,
) -> Result<HashMap<String, NormalizedGame>, ScheduleError> {
    let mut catalog = HashMap::with_capacity(games.len());
    for record in games {
        let min_players = positive_u32("min_players", &record.name, record.min_players)?;
        let max_players = positive_u32("max_players", &record.name, record.max_players)?;
        let min_playtime = positive_u32("min_playtime", &record.name, record.min_playtime)?;
        let max_playtime = positive_u32("max_playtime", &record.name, record.max_playtime)?;
        if max_players < min_players {
            return Err(ScheduleError::InputConsistencyError(format!(
                "game '{}': max_players ({}) is less than min_players ({})",
                record.name, max_players, min_players
            )));
        }
        if max_playtime < min_playtime {
            return Err(ScheduleError::InputConsistencyError(format!(
                "game '{}': max_playtime ({}) is less than min_playtime ({})",
                record.name, max_playtime, min_playtime
            )));
        }
        let mut popularity = HashMap::with_capacity(record.popularity.len());
        for (count_str, weight) in &record.popularity {
            if let Ok(count) = count_str.parse::<u32>() {
                popularity.insert(count, *weight);
            }
        }
        catalog.insert(
            record.name.clone(),
            NormalizedGame {
                min_players,
                max_players,
                min_playtime,
                max_playtime,
                popularity,
            },
        );
    }

    let mut defaulted = 0usize;
    for id in referenced {
        catalog.entry(id.to_string()).or_insert_with(|| {
            debug!(
                "defaulting unknown game '{id}' to {DEFAULT_MIN_PLAYERS}-{DEFAULT_MAX_PLAYERS} players, \
                 {DEFAULT_PLAYTIME_MINUTES}min flat, flat popularity 1.0"
            );
            defaulted += 1;
            NormalizedGame::defaulted()
        });
    }
    log::info!(
        "catalog normalized: {} games ({} defaulted)",
        catalog.len(),
        defaulted
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(name: &str, min_p: i64, max_p: i64, min_t: i64, max_t: i64) -> GameRecord {
        GameRecord {
            id: 0,
            name: name.to_string(),
            full_name: String::new(),
            min_players: min_p,
            max_players: max_p,
            min_playtime: min_t,
            max_playtime: max_t,
            popularity: HashMap::new(),
            owned: 0,
        }
    }

    #[test]
    fn defaults_unknown_games() {
        let catalog = normalize(&[], std::iter::once("mystery")).unwrap();
        let g = &catalog["mystery"];
        assert_eq!(g.min_players, DEFAULT_MIN_PLAYERS);
        assert_eq!(g.max_players, DEFAULT_MAX_PLAYERS);
        assert_eq!(g.min_playtime, DEFAULT_PLAYTIME_MINUTES);
        assert_eq!(g.max_playtime, DEFAULT_PLAYTIME_MINUTES);
        assert_eq!(g.popularity_at(3), 1.0);
        assert_eq!(g.popularity_at(4), 1.0);
    }

    #[test]
    fn missing_popularity_count_is_zero() {
        let games = [game("X", 3, 4, 60, 120)];
        let catalog = normalize(&games, std::iter::empty()).unwrap();
        assert_eq!(catalog["X"].popularity_at(3), 0.0);
    }

    #[test]
    fn rejects_non_positive_fields() {
        let games = [game("X", 0, 4, 60, 120)];
        let err = normalize(&games, std::iter::empty()).unwrap_err();
        assert!(matches!(err, ScheduleError::InputConsistencyError(_)));
    }
}

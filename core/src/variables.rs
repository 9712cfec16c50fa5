//! Variable Space Builder (§4.3).
//!
//! Materializes the `X[i,p,g]` and `Y[i,g]` binary decision variables for
//! every triple/pair that survives pruning. The popularity indicator
//! variables `C[i,g,k]` are materialized later, alongside the objective
//! that uses them (§4.5) — see [`crate::objective`].

use crate::index::ProblemIndex;
use good_lp::{variable, ProblemVariables, Variable};
use log::debug;
use std::collections::HashMap;

/// The materialized `X` and `Y` variables, plus a reverse index from table
/// `(session, game)` to the players who have an `X` variable for it — built
/// once here so constraint generation never has to re-scan all players.
pub struct VariableSpace {
    pub x: HashMap<(usize, usize, usize), Variable>,
    pub y: HashMap<(usize, usize), Variable>,
    pub players_by_table: HashMap<(usize, usize), Vec<usize>>,
}

impl VariableSpace {
    pub fn x_var(&self, session: usize, player: usize, game: usize) -> Option<Variable> {
        self.x.get(&(session, player, game)).copied()
    }

    pub fn y_var(&self, session: usize, game: usize) -> Option<Variable> {
        self.y.get(&(session, game)).copied()
    }
}

/// Builds the `X`/`Y` variable space for `idx`, registering each variable
/// with `vars`.
pub fn build(vars: &mut ProblemVariables, idx: &ProblemIndex) -> VariableSpace {
    let mut x = HashMap::new();
    let mut y = HashMap::new();
    let mut players_by_table: HashMap<(usize, usize), Vec<usize>> = HashMap::new();

    for (session_idx, present_games) in idx.present.iter().enumerate() {
        for &game_idx in present_games {
            y.insert((session_idx, game_idx), vars.add(variable().binary()));
        }
        for (player_idx, player) in idx.players.iter().enumerate() {
            if !player.sessions.contains(&session_idx) {
                continue;
            }
            for &game_idx in present_games {
                x.insert((session_idx, player_idx, game_idx), vars.add(variable().binary()));
                players_by_table
                    .entry((session_idx, game_idx))
                    .or_default()
                    .push(player_idx);
            }
        }
    }

    let raw_triples = idx.sessions.len() * idx.players.len() * idx.games.len();
    debug!(
        "variable space: {} of {} possible X triples materialized, {} Y variables",
        x.len(),
        raw_triples,
        y.len()
    );

    VariableSpace {
        x,
        y,
        players_by_table,
    }
}

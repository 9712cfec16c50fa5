//! Constraint Generator (§4.4).
//!
//! Emits every hard constraint of the MIP except the two popularity
//! linearization identities, which live next to the objective that needs
//! them (§4.5, [`crate::objective`]).

use crate::index::ProblemIndex;
use crate::models::SharedGameDecl;
use crate::variables::VariableSpace;
use good_lp::{constraint, Constraint, Expression};
use std::collections::HashSet;

fn sum_of(vars: impl IntoIterator<Item = good_lp::Variable>) -> Expression {
    vars.into_iter().map(|v| 1.0 * v).sum()
}

/// Builds every constraint of §4.4 (1) through (8). `table_limit` is the
/// already-resolved `T` (the CLI turns "unbounded" into a concrete number
/// before calling this, see [`crate::solver`]).
pub fn build(
    idx: &ProblemIndex,
    vars: &VariableSpace,
    table_limit: u32,
    shared_games: &[SharedGameDecl],
) -> Vec<Constraint> {
    let mut cons = Vec::new();

    // 1. Coverage: one game per player per attended session.
    for (player_idx, player) in idx.players.iter().enumerate() {
        for &session_idx in &player.sessions {
            let terms = idx.present[session_idx]
                .iter()
                .filter_map(|&g| vars.x_var(session_idx, player_idx, g));
            let expr = sum_of(terms);
            cons.push(constraint!(expr == 1));
        }
    }

    // 2. Play-once across the convention.
    for (player_idx, player) in idx.players.iter().enumerate() {
        let mut candidate_games: HashSet<usize> = HashSet::new();
        for &session_idx in &player.sessions {
            candidate_games.extend(idx.present[session_idx].iter().copied());
        }
        for game_idx in candidate_games {
            let terms = player
                .sessions
                .iter()
                .filter_map(|&s| vars.x_var(s, player_idx, game_idx));
            let expr = sum_of(terms);
            cons.push(constraint!(expr <= 1));
        }
    }

    // 3. Table activation: a player can only be seated at an active table.
    for (&(session_idx, game_idx), players) in &vars.players_by_table {
        let y = vars
            .y_var(session_idx, game_idx)
            .expect("every table with seated players has a Y variable");
        for &player_idx in players {
            if let Some(x) = vars.x_var(session_idx, player_idx, game_idx) {
                cons.push(constraint!(1.0 * x <= 1.0 * y));
            }
        }
    }

    // 4 & 5. Player-count bounds when a table is active.
    for (&(session_idx, game_idx), &y) in &vars.y {
        let params = idx.effective[&(session_idx, game_idx)];
        let empty = Vec::new();
        let players = vars
            .players_by_table
            .get(&(session_idx, game_idx))
            .unwrap_or(&empty);
        let terms = players
            .iter()
            .filter_map(|&p| vars.x_var(session_idx, p, game_idx));
        let count_expr = sum_of(terms);
        cons.push(constraint!(count_expr.clone() >= (params.emin as f64) * y));
        cons.push(constraint!(count_expr <= (params.emax as f64) * y));
    }

    // 6. Table limit per session.
    for (session_idx, present_games) in idx.present.iter().enumerate() {
        let terms = present_games
            .iter()
            .filter_map(|&g| vars.y_var(session_idx, g));
        let expr = sum_of(terms);
        cons.push(constraint!(expr <= table_limit as f64));
    }

    // 7. Shared-game cap.
    for decl in shared_games {
        let Some(&game_idx) = idx.game_lookup.get(&decl.game) else {
            continue;
        };
        let terms = (0..idx.sessions.len()).filter_map(|s| vars.y_var(s, game_idx));
        let expr = sum_of(terms);
        cons.push(constraint!(expr <= decl.cap as f64));
    }

    // 8. Ownership: a table can only activate if a seated player owns it.
    // Pruning (§4.3 item 2, index.rs) only guarantees an owner *attends* the
    // session, not that one is *seated* at this particular table. The
    // solver is otherwise free to seat the sole owner elsewhere and leave
    // the table owner-less, so the seated-owner count is tied to Y directly.
    for (&(session_idx, game_idx), &y) in &vars.y {
        let empty = Vec::new();
        let players = vars
            .players_by_table
            .get(&(session_idx, game_idx))
            .unwrap_or(&empty);
        let owner_terms = players
            .iter()
            .filter(|&&p| idx.players[p].owns.contains(&game_idx))
            .filter_map(|&p| vars.x_var(session_idx, p, game_idx));
        let owner_count = sum_of(owner_terms);
        cons.push(constraint!(owner_count >= 1.0 * y));
    }

    cons
}

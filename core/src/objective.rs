//! Objective Builder (§4.5).
//!
//! Assembles the weighted-sum objective: player interest satisfaction as
//! the dominant term, and a popularity-of-assigned-count term as a
//! lexicographic tiebreak. Popularity is nonlinear in the assigned count,
//! so it is linearized here with per-count indicator variables `C[i,g,k]`
//! and the two identities tying them back to `Y` and to the player count —
//! this module therefore also returns extra constraints for those
//! identities, since they cannot be expressed any other way.

use crate::index::ProblemIndex;
use crate::variables::VariableSpace;
use good_lp::{constraint, variable, Constraint, Expression, ProblemVariables, Variable};

/// The assembled objective expression, plus the constraints the popularity
/// linearization needs (§4.5).
pub struct ObjectiveParts {
    pub expression: Expression,
    pub extra_constraints: Vec<Constraint>,
    /// Count of `C[i,g,k]` auxiliary variables created, for logging.
    pub popularity_indicator_count: usize,
}

fn sum_of(vars: impl IntoIterator<Item = Variable>) -> Expression {
    vars.into_iter().map(|v| 1.0 * v).sum()
}

/// Builds the objective and its supporting constraints. Registers the new
/// `C[i,g,k]` variables with `vars`.
pub fn build(vars: &mut ProblemVariables, idx: &ProblemIndex, space: &VariableSpace) -> ObjectiveParts {
    let mut terms: Vec<(Variable, f64)> = Vec::new();

    // Primary term: one point per satisfied interest.
    for (player_idx, player) in idx.players.iter().enumerate() {
        for &session_idx in &player.sessions {
            for &game_idx in &idx.present[session_idx] {
                if !player.interests.contains(&game_idx) {
                    continue;
                }
                if let Some(x) = space.x_var(session_idx, player_idx, game_idx) {
                    terms.push((x, 1.0));
                }
            }
        }
    }

    // lambda chosen so popularity can never outweigh a single interest
    // satisfaction (§4.5): each table-slot contributes at most 1.0 of
    // popularity, so max_popularity_sum = number of (session, game) tables.
    let max_popularity_sum = space.y.len().max(1) as f64;
    let lambda = 0.5 / max_popularity_sum;

    let mut extra_constraints = Vec::new();
    let mut popularity_indicator_count = 0usize;

    for (&(session_idx, game_idx), &y) in &space.y {
        let params = idx.effective[&(session_idx, game_idx)];
        let game = &idx.catalog[game_idx];

        let mut c_vars: Vec<(Variable, u32)> = Vec::with_capacity((params.emax - params.emin + 1) as usize);
        for k in params.emin..=params.emax {
            let c = vars.add(variable().binary());
            c_vars.push((c, k));
            popularity_indicator_count += 1;
            let pop = game.popularity_at(k);
            if pop != 0.0 {
                terms.push((c, lambda * pop));
            }
        }

        // Sigma_k C[i,g,k] == Y[i,g]
        let c_sum = sum_of(c_vars.iter().map(|&(c, _)| c));
        extra_constraints.push(constraint!(c_sum == 1.0 * y));

        // Sigma_p X[i,p,g] == Sigma_k k * C[i,g,k]
        let empty = Vec::new();
        let players = space
            .players_by_table
            .get(&(session_idx, game_idx))
            .unwrap_or(&empty);
        let assigned_count: Expression = sum_of(
            players
                .iter()
                .filter_map(|&p| space.x_var(session_idx, p, game_idx)),
        );
        let weighted_count: Expression = c_vars
            .iter()
            .map(|&(c, k)| (k as f64) * c)
            .sum();
        extra_constraints.push(constraint!(assigned_count == weighted_count));
    }

    let expression: Expression = terms.into_iter().map(|(v, coeff)| coeff * v).sum();

    ObjectiveParts {
        expression,
        extra_constraints,
        popularity_indicator_count,
    }
}

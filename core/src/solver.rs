//! Solver Driver (§4.6).
//!
//! Assembles the variables, constraints, and objective built by the other
//! components into a single MIP, hands it to the integer-programming
//! solver, and either extracts the integral solution into a [`Schedule`] or
//! diagnoses infeasibility (§7).

use crate::constraints;
use crate::error::ScheduleError;
use crate::index::ProblemIndex;
use crate::models::SharedGameDecl;
use crate::objective;
use crate::schedule::{PlayerSlot, Schedule, SessionResult, TableResult};
use crate::variables;
use good_lp::{ProblemVariables, ResolutionError, Solution, SolverModel};
use log::info;

/// Resolves `table_limit` into a concrete `T`: an explicit cap if given, or
/// the busiest session's present-game count otherwise (§6: "unbounded" in
/// practice means "no stricter than physically possible").
pub fn resolve_table_limit(idx: &ProblemIndex, configured: Option<u32>) -> u32 {
    configured.unwrap_or_else(|| {
        idx.present
            .iter()
            .map(|games| games.len() as u32)
            .max()
            .unwrap_or(0)
    })
}

/// Builds and solves the MIP for `idx`, returning the extracted schedule or
/// a diagnosed [`ScheduleError`].
pub fn solve(
    idx: &ProblemIndex,
    table_limit: u32,
    shared_games: &[SharedGameDecl],
) -> Result<Schedule, ScheduleError> {
    let mut vars = ProblemVariables::new();
    let space = variables::build(&mut vars, idx);
    let obj = objective::build(&mut vars, idx, &space);

    let mut all_constraints = constraints::build(idx, &space, table_limit, shared_games);
    all_constraints.extend(obj.extra_constraints);

    info!(
        "solving MIP: {} X vars, {} Y vars, {} popularity indicators, {} constraints",
        space.x.len(),
        space.y.len(),
        obj.popularity_indicator_count,
        all_constraints.len()
    );

    let mut model = vars.maximise(obj.expression).using(good_lp::default_solver);
    for c in all_constraints {
        model = model.with(c);
    }

    let solution = match model.solve() {
        Ok(solution) => solution,
        Err(ResolutionError::Infeasible) => return Err(diagnose_infeasibility(idx, table_limit)),
        Err(other) => return Err(ScheduleError::SolverError(other.to_string())),
    };

    Ok(extract_schedule(idx, &space, &solution))
}

/// Diagnoses why the model came back infeasible, per §4.6/§7: the most
/// common cause is a session with more attendees than `T * max EMAX` across
/// its present games.
fn diagnose_infeasibility(idx: &ProblemIndex, table_limit: u32) -> ScheduleError {
    for (session_idx, session) in idx.sessions.iter().enumerate() {
        let attendees = idx
            .players
            .iter()
            .filter(|p| p.sessions.contains(&session_idx))
            .count() as u32;
        let present = &idx.present[session_idx];
        let max_emax = present
            .iter()
            .map(|&g| idx.effective[&(session_idx, g)].emax)
            .max()
            .unwrap_or(0);
        let effective_tables = table_limit.min(present.len() as u32);
        let capacity = effective_tables * max_emax;
        if attendees > capacity {
            return ScheduleError::ModelInfeasible(format!(
                "session '{}' (index {}) is over-subscribed: {} attending players exceed capacity {} \
                 (table_limit {} capped to {} present games, times max EMAX {})",
                session.name, session_idx, attendees, capacity, table_limit, effective_tables, max_emax
            ));
        }
        if present.is_empty() && attendees > 0 {
            return ScheduleError::ModelInfeasible(format!(
                "session '{}' (index {}) has {} attending players but no game that both fits and has an \
                 attending owner",
                session.name, session_idx, attendees
            ));
        }
    }
    ScheduleError::ModelInfeasible(
        "no feasible schedule found; no single session is obviously over-subscribed \
         (attendance never exceeds table_limit * max EMAX) — check shared-game caps and play-once \
         pressure across sessions"
            .to_string(),
    )
}

fn extract_schedule(idx: &ProblemIndex, space: &variables::VariableSpace, solution: &impl Solution) -> Schedule {
    let mut sessions = Vec::with_capacity(idx.sessions.len());
    for (session_idx, session) in idx.sessions.iter().enumerate() {
        let mut tables = Vec::new();
        for &game_idx in &idx.present[session_idx] {
            let empty = Vec::new();
            let candidates = space
                .players_by_table
                .get(&(session_idx, game_idx))
                .unwrap_or(&empty);
            let mut players: Vec<PlayerSlot> = candidates
                .iter()
                .filter(|&&player_idx| {
                    space
                        .x_var(session_idx, player_idx, game_idx)
                        .map(|v| solution.value(v) > 0.5)
                        .unwrap_or(false)
                })
                .map(|&player_idx| PlayerSlot {
                    name: idx.players[player_idx].name.clone(),
                    owner: idx.players[player_idx].owns.contains(&game_idx),
                })
                .collect();
            if players.is_empty() {
                continue;
            }
            players.sort_by(|a, b| a.name.cmp(&b.name));
            tables.push(TableResult {
                game: idx.games[game_idx].clone(),
                players,
            });
        }
        tables.sort_by(|a, b| a.game.cmp(&b.game));
        sessions.push(SessionResult {
            name: session.name.clone(),
            tables,
        });
    }
    Schedule { sessions }
}

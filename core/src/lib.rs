//! # table-scheduler-core: games-convention table assignment
//!
//! This crate builds and solves the Mixed Integer Program that assigns
//! every attending player to exactly one game per session they attend,
//! maximizing satisfied interests first and good player-counts second.
//!
//! ## Quick Example
//!
//! ```no_run
//! use table_scheduler_core::models::*;
//! use table_scheduler_core::build_schedule;
//! use std::collections::HashMap;
//!
//! let input = ScheduleInput {
//!     games: vec![GameRecord {
//!         id: 1,
//!         name: "Catan".to_string(),
//!         full_name: "Settlers of Catan".to_string(),
//!         min_players: 3,
//!         max_players: 4,
//!         min_playtime: 60,
//!         max_playtime: 120,
//!         popularity: HashMap::new(),
//!         owned: 1,
//!     }],
//!     sessions: vec![SessionDef { name: "Saturday Evening".to_string(), length: 120 }],
//!     players: vec![
//!         PlayerDef { name: "Alice".to_string(), owns: vec!["Catan".to_string()], interests: vec![], sessions: vec![0] },
//!         PlayerDef { name: "Bob".to_string(), owns: vec![], interests: vec![], sessions: vec![0] },
//!         PlayerDef { name: "Carol".to_string(), owns: vec![], interests: vec![], sessions: vec![0] },
//!     ],
//!     config: ScheduleConfig::default(),
//! };
//!
//! match build_schedule(&input) {
//!     Ok(outcome) => println!("{}", outcome.schedule),
//!     Err(e) => eprintln!("scheduling failed: {e}"),
//! }
//! ```
//!
//! ## Module Map
//!
//! - [`models`]: the JSON-shaped input types.
//! - [`catalog`]: Catalog Normalizer (§4.1).
//! - [`effective`]: Effective-Parameters Deriver (§4.2).
//! - [`index`]: resolves raw input into an integer-indexed, validated
//!   problem representation shared by the rest of the solver.
//! - [`variables`]: Variable Space Builder (§4.3).
//! - [`constraints`]: Constraint Generator (§4.4).
//! - [`objective`]: Objective Builder (§4.5).
//! - [`solver`]: Solver Driver (§4.6) — MIP assembly, solve, extraction.
//! - [`schedule`]: the solved-schedule output type and its stdout rendering.
//! - [`error`]: error and warning types (§7).
//! - [`io`]: JSON parsing helpers for the three input files.

pub mod catalog;
pub mod constraints;
pub mod effective;
pub mod error;
pub mod index;
pub mod io;
pub mod models;
pub mod objective;
pub mod schedule;
pub mod solver;
pub mod variables;

use error::ConsistencyWarning;
use error::ScheduleError;
use models::ScheduleInput;
use schedule::Schedule;

/// A completed solve: the schedule itself, plus any non-fatal consistency
/// warnings collected along the way (§7).
#[derive(Debug, Clone)]
pub struct ScheduleOutcome {
    pub schedule: Schedule,
    pub warnings: Vec<ConsistencyWarning>,
}

/// Runs the full pipeline of §2: normalize the catalog, derive effective
/// parameters, build the variable space, generate constraints and
/// objective, and solve.
///
/// # Errors
///
/// Returns [`ScheduleError::InputConsistencyError`] for a structurally
/// invalid input (out-of-range session index, non-positive length or
/// playtime), [`ScheduleError::ModelInfeasible`] if no valid assignment
/// exists, or [`ScheduleError::SolverError`] if the underlying
/// integer-programming solver itself fails.
pub fn build_schedule(input: &ScheduleInput) -> Result<ScheduleOutcome, ScheduleError> {
    let (idx, warnings) = index::build(input)?;
    let table_limit = solver::resolve_table_limit(&idx, input.config.table_limit);
    let schedule = solver::solve(&idx, table_limit, &input.config.shared_games)?;
    Ok(ScheduleOutcome { schedule, warnings })
}
